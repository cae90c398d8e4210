//! reqwest-backed implementation of [`DocumentApi`]

use async_trait::async_trait;
use docchat_core::Journal;
use futures::StreamExt;
use reqwest::Client;

use crate::api::{AnswerStream, AskRequest, DocumentApi, HealthStatus};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::ndjson::decode_events;

pub struct HttpApi {
    config: ApiConfig,
    client: Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .user_agent(concat!("docchat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, body = %body, "backend returned an error status");
        Err(Error::status(status, body))
    }
}

#[async_trait]
impl DocumentApi for HttpApi {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn pdf_url(&self, document_id: &str) -> String {
        self.config.pdf_url(document_id)
    }

    async fn list_journals(&self) -> Result<Vec<Journal>> {
        let response = self.client.get(self.config.journals_url()).send().await?;
        let response = Self::check(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn ask(&self, request: AskRequest) -> Result<AnswerStream> {
        tracing::debug!(document = %request.document_id, "opening answer stream");
        let response = self
            .client
            .post(self.config.ask_url())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let bytes = response.bytes_stream().map(|chunk| chunk.map_err(Error::from));
        Ok(Box::pin(decode_events(bytes)))
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.config.health_url()).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}
