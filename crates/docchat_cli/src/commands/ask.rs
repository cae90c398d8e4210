//! `docchat ask`: one question, answer streamed to stdout.

use std::time::Instant;

use anyhow::{Result, anyhow};
use docchat_client::{ApiConfig, DocumentApi, HttpApi, stream_answer};
use docchat_core::{
    ConversationEntry, EntryId, EntryStatus, EntryUpdate, PumpOutcome, StreamEvent, format_answer,
};
use docchat_observability::{command_span, record_duration, record_error};
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::Instrument;

use crate::output;

/// Final answer as emitted with `--output json`.
#[derive(Debug, Serialize)]
struct AnswerReport<'a> {
    question: &'a str,
    document_id: &'a str,
    answer: &'a str,
    page: Option<u32>,
    references: Vec<ReferenceReport>,
    total_tokens: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReferenceReport {
    id: String,
    name: String,
    url: String,
}

pub async fn handle(config: ApiConfig, document: &str, question: &str) -> Result<()> {
    let api = HttpApi::new(config)?;
    let span = command_span!("ask");

    async move {
        let started = Instant::now();
        let id = EntryId(1);
        let mut entry = ConversationEntry::new(id, question.trim());
        let spinner = output::spinner("Thinking...");
        let mut first_chunk = true;

        let outcome = stream_answer(&api, id, question, document, |_, update| {
            on_update(&mut entry, update, &spinner, &mut first_chunk);
        })
        .await;
        spinner.finish_and_clear();
        record_duration("duration_ms", started.elapsed());

        match outcome {
            PumpOutcome::Completed | PumpOutcome::Ignored if entry.status == EntryStatus::Complete => {
                print_summary(&api, document, &entry);
                Ok(())
            }
            PumpOutcome::Failed(reason) => {
                record_error(&reason);
                Err(anyhow!("Failed to get response: {}", reason))
            }
            _ => Err(anyhow!("Failed to get response: stream ended without an answer")),
        }
    }
    .instrument(span)
    .await
}

fn on_update(
    entry: &mut ConversationEntry,
    update: EntryUpdate,
    spinner: &ProgressBar,
    first_chunk: &mut bool,
) {
    if let EntryUpdate::Event(StreamEvent::Chunk { content }) = &update {
        if *first_chunk {
            spinner.finish_and_clear();
            *first_chunk = false;
        }
        output::stream_text(content);
    }
    entry.apply(update);
}

fn print_summary(api: &dyn DocumentApi, document: &str, entry: &ConversationEntry) {
    let formatted = format_answer(&entry.answer);
    if output::is_json() {
        let report = AnswerReport {
            question: &entry.question,
            document_id: document,
            answer: &entry.answer,
            page: formatted.page,
            references: entry
                .references
                .iter()
                .map(|r| ReferenceReport {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    url: api.pdf_url(&r.id),
                })
                .collect(),
            total_tokens: entry.total_tokens.as_ref().map(|t| t.to_string()),
        };
        output::data("answer", &report);
        return;
    }

    println!();
    if let Some(page) = formatted.page {
        output::kv("Page", &format!("{} ({}#page={})", page, api.pdf_url(document), page));
    }
    if !entry.references.is_empty() {
        println!();
        output::header("References");
        for reference in &entry.references {
            let name = if reference.name.is_empty() { &reference.id } else { &reference.name };
            output::kv(name, &api.pdf_url(&reference.id));
        }
    }
    if let Some(tokens) = &entry.total_tokens {
        println!();
        output::dim(&format!("Total tokens used: {}", tokens));
    }
}
