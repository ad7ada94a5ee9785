//! Single-flight debounce driver for the external generation path.
//!
//! Semantics:
//! - Trailing debounce: a request is issued only after [`QUIET_PERIOD`] with
//!   no newer edit; every edit restarts the window.
//! - Single flight: at most one request is in the air. A newer edit
//!   supersedes an in-flight request by dropping it and starting a fresh
//!   debounce window.
//! - No automatic retry: a service failure is forwarded once; the caller owns
//!   the retry affordance.
//! - When the edit channel closes, the last pending edit (if any) is flushed
//!   immediately and the driver returns.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use crate::error::{GenAiError, ServiceError};
use crate::payload::GenerateRequest;
use crate::response::GeneratedSnippets;

/// Quiet period after the last edit before a request is issued.
pub const QUIET_PERIOD: Duration = Duration::from_millis(500);

/// One round trip against the external generation model.
///
/// Implementations own transport, auth, and prompt assembly; the driver only
/// cares about the request/response contract.
#[allow(async_fn_in_trait)]
pub trait SnippetService {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedSnippets, ServiceError>;
}

/// Drive `service` from a stream of edits until the edit channel closes or
/// the result receiver goes away.
pub async fn drive<S: SnippetService>(
    mut edits: mpsc::UnboundedReceiver<GenerateRequest>,
    results: mpsc::UnboundedSender<Result<GeneratedSnippets, GenAiError>>,
    service: S,
    quiet: Duration,
) {
    let mut pending: Option<GenerateRequest> = None;
    let mut closed = false;

    loop {
        let mut latest = match pending.take() {
            Some(req) => req,
            None if closed => return,
            None => match edits.recv().await {
                Some(req) => req,
                None => return,
            },
        };

        // Debounce window: newer edits supersede `latest` and restart it.
        while !closed {
            tokio::select! {
                next = edits.recv() => match next {
                    Some(req) => latest = req,
                    None => closed = true, // editor gone: flush the final edit
                },
                _ = time::sleep(quiet) => break,
            }
        }

        // Fire. A newer edit arriving mid-flight drops the request on the
        // floor and loops back into a fresh debounce window.
        let outcome = {
            let call = service.generate(&latest);
            tokio::pin!(call);
            loop {
                if closed {
                    break Some(call.await);
                }
                tokio::select! {
                    res = &mut call => break Some(res),
                    next = edits.recv() => match next {
                        Some(req) => {
                            pending = Some(req);
                            break None;
                        }
                        None => closed = true,
                    },
                }
            }
        };

        if let Some(res) = outcome {
            if results.send(res.map_err(GenAiError::Service)).is_err() {
                return;
            }
        }
    }
}
