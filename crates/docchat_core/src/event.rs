use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DocchatError, Result};

/// A cited source attached to a completed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub name: String,
}

impl Reference {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Token usage reported by the backend. The wire value is either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalTokens {
    Count(u64),
    Text(String),
}

impl TotalTokens {
    /// Normalises the loose wire value. Missing, null, zero, empty and "N/A" all mean unavailable.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(0) => None,
                Some(count) => Some(Self::Count(count)),
                None => {
                    let text = n.to_string();
                    (text != "0" && text != "0.0").then_some(Self::Text(text))
                }
            },
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
                    None
                } else {
                    Some(Self::Text(trimmed.to_string()))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for TotalTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalTokens::Count(n) => write!(f, "{}", n),
            TotalTokens::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One decoded line of an answer stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Chunk {
        content: String,
    },
    End {
        references: Vec<Reference>,
        total_tokens: Option<TotalTokens>,
    },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireRecord {
    Chunk {
        content: String,
    },
    End {
        #[serde(default)]
        references: Option<Vec<Reference>>,
        #[serde(default)]
        total_tokens: Option<Value>,
    },
    #[serde(other)]
    Unknown,
}

impl StreamEvent {
    pub fn chunk(content: impl Into<String>) -> Self {
        StreamEvent::Chunk {
            content: content.into(),
        }
    }

    pub fn end(references: Vec<Reference>, total_tokens: Option<TotalTokens>) -> Self {
        StreamEvent::End {
            references,
            total_tokens,
        }
    }

    /// Interprets one decoded JSON record.
    ///
    /// Returns `Ok(None)` for record types this client does not know, and an
    /// error when a known type is missing the fields it needs.
    pub fn from_record(record: Value) -> Result<Option<Self>> {
        let wire: WireRecord = serde_json::from_value(record)
            .map_err(|e| DocchatError::MalformedRecord(e.to_string()))?;
        Ok(match wire {
            WireRecord::Chunk { content } => Some(StreamEvent::Chunk { content }),
            WireRecord::End {
                references,
                total_tokens,
            } => Some(StreamEvent::End {
                references: references.unwrap_or_default(),
                total_tokens: total_tokens.as_ref().and_then(TotalTokens::from_value),
            }),
            WireRecord::Unknown => None,
        })
    }

    pub fn is_end(&self) -> bool {
        matches!(self, StreamEvent::End { .. })
    }
}

/// What an in-flight request reports for its entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryUpdate {
    Event(StreamEvent),
    Failed(String),
}

impl From<StreamEvent> for EntryUpdate {
    fn from(event: StreamEvent) -> Self {
        EntryUpdate::Event(event)
    }
}
