//! `docchat health`: check that the backend answers.

use std::time::Instant;

use anyhow::{Result, anyhow};
use docchat_client::{ApiConfig, DocumentApi, HttpApi};
use docchat_observability::{command_span, record_duration, record_error};
use tracing::Instrument;

use crate::output;

pub async fn handle(config: ApiConfig) -> Result<()> {
    let base = config.base_url.clone();
    let api = HttpApi::new(config)?;
    let span = command_span!("health");

    async move {
        let started = Instant::now();
        let spinner = output::spinner(&format!("Checking {}...", base));
        let result = api.health().await;
        record_duration("duration_ms", started.elapsed());
        match result {
            Ok(status) => {
                output::spinner_success(&spinner, &format!("{} is reachable", base));
                output::kv("status", &status.status);
                if !status.service.is_empty() {
                    output::kv("service", &status.service);
                }
                output::data("health", &status);
                Ok(())
            }
            Err(e) => {
                record_error(&e);
                output::spinner_error(&spinner, &format!("{} is not reachable", base));
                Err(anyhow!("Health check failed: {}", e))
            }
        }
    }
    .instrument(span)
    .await
}
