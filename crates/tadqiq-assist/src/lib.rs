//! # tadqiq-assist — Generative-Text Assistance
//!
//! The one external interface of the audit desk: an optional call to a
//! generative-text API that drafts awareness-message copy and
//! summarizes audit progress for the general director.
//!
//! ## Architecture
//!
//! - **Trait** (`traits.rs`): the `TextAssistant` interface every
//!   implementation satisfies, and the never-failing `AssistService`
//!   wrapper that substitutes the fixed Arabic fallback strings when
//!   the call fails.
//! - **Gemini** (`gemini.rs`): the HTTP implementation against a
//!   Gemini-compatible `generateContent` endpoint.
//! - **Mock** (`mock.rs`): deterministic implementations for tests.
//!
//! There is no retry or timeout policy beyond the HTTP client's
//! defaults; the desk treats assistance as best-effort.

pub mod gemini;
pub mod mock;
pub mod traits;

pub use gemini::GeminiClient;
pub use mock::{FailingAssistant, MockAssistant};
pub use traits::{AssistError, AssistService, TextAssistant};
