//! Backend API seam

use std::pin::Pin;

use async_trait::async_trait;
use docchat_core::{Journal, StreamEvent};
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest question the backend accepts, in characters.
pub const MAX_QUESTION_CHARS: usize = 2000;

/// Ordered answer events for one request.
pub type AnswerStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub document_id: String,
}

impl AskRequest {
    /// Builds a request, applying the same checks the backend does so bad
    /// input fails fast without a round trip.
    pub fn new(question: impl Into<String>, document_id: impl Into<String>) -> Result<Self> {
        let question = question.into().trim().to_string();
        let document_id = document_id.into().trim().to_string();

        if question.is_empty() {
            return Err(Error::InvalidQuestion("question cannot be empty".into()));
        }
        let len = question.chars().count();
        if len > MAX_QUESTION_CHARS {
            return Err(Error::InvalidQuestion(format!(
                "question too long ({} characters, max {})",
                len, MAX_QUESTION_CHARS
            )));
        }
        validate_document_id(&document_id)?;

        Ok(Self {
            question,
            document_id,
        })
    }
}

pub fn validate_document_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidDocumentId("document id cannot be empty".into()));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::InvalidDocumentId(id.to_string()));
    }
    Ok(())
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

/// Operations the client needs from the backend.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// Base URL every endpoint hangs off.
    fn base_url(&self) -> &str;

    /// URL of the rendered document, used by the viewer pane and reference links.
    fn pdf_url(&self, document_id: &str) -> String {
        format!("{}/pdf/{}", self.base_url(), document_id)
    }

    async fn list_journals(&self) -> Result<Vec<Journal>>;

    /// Opens an answer stream. Errors here mean the request never started
    /// streaming; errors inside the stream are mid-stream transport failures.
    async fn ask(&self, request: AskRequest) -> Result<AnswerStream>;

    async fn health(&self) -> Result<HealthStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_trimmed() {
        let req = AskRequest::new("  What?  ", " doc_1 ").unwrap();
        assert_eq!(req.question, "What?");
        assert_eq!(req.document_id, "doc_1");
    }

    #[test]
    fn request_serializes_to_wire_shape() {
        let req = AskRequest::new("Q", "file-abc").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "Q", "document_id": "file-abc"})
        );
    }

    #[test]
    fn empty_question_rejected() {
        assert!(matches!(
            AskRequest::new("   ", "doc"),
            Err(Error::InvalidQuestion(_))
        ));
    }

    #[test]
    fn long_question_rejected() {
        let long = "x".repeat(MAX_QUESTION_CHARS + 1);
        assert!(matches!(
            AskRequest::new(long, "doc"),
            Err(Error::InvalidQuestion(_))
        ));
        assert!(AskRequest::new("x".repeat(MAX_QUESTION_CHARS), "doc").is_ok());
    }

    #[test]
    fn document_id_charset() {
        assert!(validate_document_id("file-HKVYN4qp29bB6nCKh9fab5").is_ok());
        assert!(validate_document_id("a_b-c").is_ok());
        assert!(validate_document_id("../etc").is_err());
        assert!(validate_document_id("").is_err());
        assert!(validate_document_id("doc 1").is_err());
    }
}
