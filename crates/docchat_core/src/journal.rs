use serde::{Deserialize, Serialize};

/// A canned question offered before the first question is asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultQuestion {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(rename = "Question")]
    pub question: String,
}

/// A document the backend can answer questions about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub img: String,
    #[serde(rename = "defaultDocumentQuestions", default)]
    pub default_questions: Vec<DefaultQuestion>,
}

impl Journal {
    /// Placeholder used when a document id is given without a catalogue entry.
    pub fn untitled(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            desc: String::new(),
            img: String::new(),
            default_questions: Vec::new(),
        }
    }
}
