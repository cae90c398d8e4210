//! `docchat journals`: list the documents the backend serves.

use std::time::Instant;

use anyhow::{Result, anyhow};
use docchat_client::{ApiConfig, DocumentApi, HttpApi};
use docchat_core::Journal;
use docchat_observability::{command_span, record_duration, record_error};
use tracing::Instrument;

use crate::output;

pub async fn handle(config: ApiConfig) -> Result<()> {
    let api = HttpApi::new(config)?;
    let span = command_span!("journals");

    async move {
        let started = Instant::now();
        let spinner = output::spinner("Fetching documents...");
        let result = api.list_journals().await;
        record_duration("duration_ms", started.elapsed());
        let journals = match result {
            Ok(journals) => {
                spinner.finish_and_clear();
                journals
            }
            Err(e) => {
                record_error(&e);
                output::spinner_error(&spinner, "Could not load documents");
                return Err(anyhow!("Failed to list journals: {}", e));
            }
        };
        print_journals(&journals);
        Ok(())
    }
    .instrument(span)
    .await
}

fn print_journals(journals: &[Journal]) {
    if output::is_json() {
        output::data("journals", &journals);
        return;
    }
    output::header("Documents");
    if journals.is_empty() {
        output::dim("No documents available.");
        return;
    }
    let mut table = output::table();
    output::table_header(&mut table, &["ID", "Title", "Description", "Questions"]);
    for journal in journals {
        let questions = journal.default_questions.len().to_string();
        output::table_row(
            &mut table,
            &[&journal.id, &journal.title, &journal.desc, &questions],
        );
    }
    println!("{table}");
}
