//! # Mock Assistants
//!
//! Deterministic `TextAssistant` implementations for tests and offline
//! runs: one that answers, one that always fails.

use async_trait::async_trait;

use tadqiq_state::AuditTask;

use crate::traits::{AssistError, TextAssistant};

/// Deterministic assistant that echoes structured Arabic copy.
#[derive(Debug, Default)]
pub struct MockAssistant {
    empty: bool,
}

impl MockAssistant {
    /// An assistant whose analysis responses are empty strings.
    pub fn empty() -> Self {
        Self { empty: true }
    }
}

#[async_trait]
impl TextAssistant for MockAssistant {
    async fn suggest_awareness_message(&self, topic: &str) -> Result<String, AssistError> {
        if self.empty {
            return Ok(String::new());
        }
        Ok(format!(
            "رسالة توعوية: {topic}\n\nنؤكد على كافة المنسوبين أهمية الالتزام بهذا الموضوع."
        ))
    }

    async fn analyze_audit_progress(&self, tasks: &[AuditTask]) -> Result<String, AssistError> {
        if self.empty {
            return Ok(String::new());
        }
        Ok(format!(
            "ملخص المراجعة: عدد المهام {} — لا توجد مخاطر حرجة.",
            tasks.len()
        ))
    }
}

/// Assistant whose every call fails with a transport error.
#[derive(Debug, Default)]
pub struct FailingAssistant;

#[async_trait]
impl TextAssistant for FailingAssistant {
    async fn suggest_awareness_message(&self, _topic: &str) -> Result<String, AssistError> {
        Err(AssistError::Transport("connection refused".to_string()))
    }

    async fn analyze_audit_progress(&self, _tasks: &[AuditTask]) -> Result<String, AssistError> {
        Err(AssistError::Transport("connection refused".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_mentions_topic() {
        let assistant = MockAssistant::default();
        let text = assistant
            .suggest_awareness_message("سرية البيانات")
            .await
            .unwrap();
        assert!(text.contains("سرية البيانات"));
    }

    #[tokio::test]
    async fn test_mock_counts_tasks() {
        let assistant = MockAssistant::default();
        let text = assistant.analyze_audit_progress(&[]).await.unwrap();
        assert!(text.contains('0'));
    }

    #[tokio::test]
    async fn test_failing_assistant_errors() {
        let assistant = FailingAssistant;
        assert!(assistant.suggest_awareness_message("x").await.is_err());
    }
}
