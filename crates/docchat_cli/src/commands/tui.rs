//! `docchat tui`: run the interactive TUI with the HTTP client behind it.

use std::sync::Arc;

use anyhow::Result;
use docchat_client::api::validate_document_id;
use docchat_client::{ApiConfig, DocumentApi, HttpApi, stream_answer};
use docchat_core::{EntryId, EntryUpdate, Journal};
use docchat_observability::{LogConfig, LogSink, init};
use docchat_tui::{TuiChannels, TuiRequest, TuiState, UiConfig, run_tui};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::output;

/// Serves [TuiRequest]s until the TUI drops its sender or `shutdown` fires.
/// Every question gets its own task, so answers stream concurrently and a
/// slow one never holds up the next.
async fn run_request_loop(
    api: Arc<dyn DocumentApi>,
    mut requests: mpsc::UnboundedReceiver<TuiRequest>,
    updates: mpsc::UnboundedSender<(EntryId, EntryUpdate)>,
    journals: mpsc::UnboundedSender<Result<Vec<Journal>, String>>,
    shutdown: CancellationToken,
) {
    loop {
        let request = tokio::select! {
            request = requests.recv() => match request {
                Some(r) => r,
                None => break,
            },
            _ = shutdown.cancelled() => break,
        };
        match request {
            TuiRequest::Ask {
                entry_id,
                question,
                document_id,
            } => {
                let api = Arc::clone(&api);
                let updates = updates.clone();
                let token = shutdown.child_token();
                tokio::spawn(async move {
                    let ask = stream_answer(api.as_ref(), entry_id, &question, &document_id, |id, update| {
                        let _ = updates.send((id, update));
                    });
                    tokio::select! {
                        _ = ask => {}
                        _ = token.cancelled() => {
                            tracing::debug!(entry = %entry_id, "answer stream abandoned on shutdown");
                        }
                    }
                });
            }
            TuiRequest::LoadJournals => {
                let api = Arc::clone(&api);
                let journals = journals.clone();
                tokio::spawn(async move {
                    let result = api.list_journals().await.map_err(|e| e.to_string());
                    let _ = journals.send(result);
                });
            }
        }
    }
}

pub async fn handle(config: ApiConfig, document: Option<String>) -> Result<()> {
    if let Some(id) = document.as_deref() {
        validate_document_id(id)?;
    }

    // Tracing output goes to the logs screen (Ctrl+D), never to the terminal the TUI owns.
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    let log_config = LogConfig::sink(log_sink, "info,docchat_client=debug")
        .with_version(env!("CARGO_PKG_VERSION"));
    if let Err(e) = init(log_config) {
        output::warning(&format!("Logging disabled: {}", e));
    }

    let base_url = config.base_url.clone();
    let api: Arc<dyn DocumentApi> = Arc::new(HttpApi::new(config)?);
    tracing::info!(api_base = %base_url, "starting tui");

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let (journals_tx, journals_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();
    tokio::spawn(run_request_loop(
        api,
        request_rx,
        update_tx,
        journals_tx,
        shutdown.clone(),
    ));

    let mut state = TuiState::new(base_url, UiConfig::from_env());
    if let Some(id) = document {
        state.open_document(&Journal::untitled(id));
    }
    let channels = TuiChannels {
        requests: request_tx,
        updates: update_rx,
        journals: journals_rx,
        logs: Some(log_rx),
    };

    let result = tokio::task::spawn_blocking(move || run_tui(state, channels)).await;
    shutdown.cancel();
    result??;
    Ok(())
}
