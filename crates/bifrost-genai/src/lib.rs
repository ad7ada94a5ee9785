//! External AI generation contract for the **bifrost** gradient designer.
//!
//! The designer can ask a text-generation model for the same three snippets
//! the deterministic generator produces. This crate owns everything on this
//! side of that boundary — and nothing beyond it:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`payload`] | `GenerateRequest` — hex-flattened wire payload |
//! | [`response`] | `GeneratedSnippets` + shape validation |
//! | [`debounce`] | trailing-debounce single-flight driver, `SnippetService` |
//! | [`error`] | `RequestError` / `ServiceError` / `GenAiError` |
//!
//! Transport, auth, and prompt assembly belong to the [`SnippetService`]
//! implementation supplied by the host.

pub mod debounce;
pub mod error;
pub mod payload;
pub mod response;

pub use debounce::{drive, SnippetService, QUIET_PERIOD};
pub use error::{GenAiError, RequestError, ServiceError};
pub use payload::GenerateRequest;
pub use response::{parse_snippets, GeneratedSnippets};
