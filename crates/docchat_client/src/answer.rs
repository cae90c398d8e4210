//! One question, start to finish

use docchat_core::{EntryId, EntryUpdate, PumpOutcome, pump};
use tracing::Instrument;

use crate::api::{AskRequest, DocumentApi};

/// Asks `question` about `document_id` and reports every update for entry `id`
/// to `sink`. A request that never starts streaming is reported as a single
/// failure, same as a mid-stream transport error.
pub async fn stream_answer<F>(
    api: &dyn DocumentApi,
    id: EntryId,
    question: &str,
    document_id: &str,
    mut sink: F,
) -> PumpOutcome
where
    F: FnMut(EntryId, EntryUpdate),
{
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!(
        "ask",
        request_id = %request_id,
        entry = %id,
        document = %document_id
    );

    async move {
        let request = match AskRequest::new(question, document_id) {
            Ok(request) => request,
            Err(e) => return fail(id, e.to_string(), &mut sink),
        };
        let stream = match api.ask(request).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(error = %e, "request failed before streaming");
                return fail(id, e.to_string(), &mut sink);
            }
        };
        let outcome = pump(stream, id, &mut sink).await;
        tracing::info!(outcome = ?outcome, "answer stream finished");
        outcome
    }
    .instrument(span)
    .await
}

fn fail<F>(id: EntryId, reason: String, sink: &mut F) -> PumpOutcome
where
    F: FnMut(EntryId, EntryUpdate),
{
    sink(id, EntryUpdate::Failed(reason.clone()));
    PumpOutcome::Failed(reason)
}
