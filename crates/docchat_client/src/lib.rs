//! docchat_client: HTTP access to the document question-answering backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                    stream_answer()                    │
//! │   AskRequest ──► DocumentApi::ask ──► AnswerStream    │
//! │                        │                  │           │
//! │                        ▼                  ▼           │
//! │                 ┌────────────┐    ┌──────────────┐    │
//! │                 │  HttpApi   │    │ NdjsonDecoder│    │
//! │                 │ (reqwest)  │───►│  bytes→JSON  │    │
//! │                 └────────────┘    └──────────────┘    │
//! │                                          │            │
//! │                                          ▼            │
//! │                          docchat_core::pump → sink    │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docchat_client::{ApiConfig, HttpApi, stream_answer};
//! use docchat_core::ConversationLedger;
//!
//! # async fn demo() -> docchat_client::Result<()> {
//! let api = HttpApi::new(ApiConfig::from_env())?;
//! let mut ledger = ConversationLedger::new();
//! let id = ledger.submit("What is the dosage?").unwrap();
//! stream_answer(&api, id, "What is the dosage?", "file-abc", |id, update| {
//!     ledger.apply(id, update);
//! })
//! .await;
//! # Ok(())
//! # }
//! ```

pub mod answer;
pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod ndjson;


pub use answer::stream_answer;
pub use api::{AnswerStream, AskRequest, DocumentApi, HealthStatus, MAX_QUESTION_CHARS};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use http::HttpApi;
pub use ndjson::{NdjsonDecoder, decode_events, decode_records};
