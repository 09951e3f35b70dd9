//! # Text Assistant Trait
//!
//! Defines the abstract interface for generative-text backends. The
//! HTTP client and the test mocks are interchangeable behind it.
//!
//! The `AssistService` wrapper is what the desk consumes: it never
//! fails, substituting the fixed Arabic fallback strings the dashboard
//! shows when the external call errors out.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use tadqiq_state::AuditTask;

/// Fallback when progress analysis fails outright.
pub const ANALYZE_ERROR_FALLBACK: &str = "حدث خطأ أثناء تحليل البيانات ذكياً.";

/// Fallback when progress analysis returns an empty body.
pub const ANALYZE_EMPTY_FALLBACK: &str = "لم يتم التمكن من تحليل البيانات حالياً.";

/// Fallback when message suggestion fails outright.
pub const SUGGEST_ERROR_FALLBACK: &str = "فشل إنشاء الرسالة.";

/// Error from a text-assistance backend.
#[derive(Error, Debug)]
pub enum AssistError {
    /// The HTTP transport failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("api error: status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Abstract interface for a generative-text backend.
///
/// Implementations must be `Send + Sync`; the CLI shares one across
/// its async runtime.
#[async_trait]
pub trait TextAssistant: Send + Sync {
    /// Draft an awareness message in Arabic about `topic`.
    async fn suggest_awareness_message(&self, topic: &str) -> Result<String, AssistError>;

    /// Summarize audit progress for the general director, in Arabic,
    /// highlighting risks and recommended actions.
    async fn analyze_audit_progress(&self, tasks: &[AuditTask]) -> Result<String, AssistError>;
}

/// The never-failing facade the desk consumes.
///
/// Wraps any [`TextAssistant`] and substitutes the fixed Arabic
/// fallback strings on failure, exactly as the dashboard's service
/// layer does.
pub struct AssistService<A: TextAssistant> {
    inner: A,
}

impl<A: TextAssistant> AssistService<A> {
    /// Wrap a backend.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// Draft an awareness message; empty on an empty response, the
    /// fixed failure string on error.
    pub async fn suggest_awareness_message(&self, topic: &str) -> String {
        match self.inner.suggest_awareness_message(topic).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "awareness suggestion failed");
                SUGGEST_ERROR_FALLBACK.to_string()
            }
        }
    }

    /// Summarize audit progress; fixed fallbacks on empty or failed
    /// responses.
    pub async fn analyze_audit_progress(&self, tasks: &[AuditTask]) -> String {
        match self.inner.analyze_audit_progress(tasks).await {
            Ok(text) if text.is_empty() => ANALYZE_EMPTY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "progress analysis failed");
                ANALYZE_ERROR_FALLBACK.to_string()
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FailingAssistant, MockAssistant};

    #[tokio::test]
    async fn test_service_passes_through_success() {
        let service = AssistService::new(MockAssistant::default());
        let text = service.suggest_awareness_message("أمانة التعامل مع الملفات").await;
        assert!(text.contains("أمانة التعامل مع الملفات"));
    }

    #[tokio::test]
    async fn test_service_substitutes_suggest_fallback() {
        let service = AssistService::new(FailingAssistant);
        let text = service.suggest_awareness_message("موضوع").await;
        assert_eq!(text, SUGGEST_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_service_substitutes_analyze_fallback() {
        let service = AssistService::new(FailingAssistant);
        let text = service.analyze_audit_progress(&[]).await;
        assert_eq!(text, ANALYZE_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_service_substitutes_empty_analysis() {
        let service = AssistService::new(MockAssistant::empty());
        let text = service.analyze_audit_progress(&[]).await;
        assert_eq!(text, ANALYZE_EMPTY_FALLBACK);
    }
}
