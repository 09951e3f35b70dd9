//! # Document Request Lifecycle
//!
//! Tracks a supporting-document request from the auditor to the
//! department's liaison officer.
//!
//! ```text
//! Sent ──begin_preparation()──▶ InProgress ──fulfil()──▶ Received (terminal)
//!   │                                                        ▲
//!   └──────────────────fulfil()──────────────────────────────┘
//! ```
//!
//! Fulfilment may attach the provided document's URL; a request can be
//! fulfilled directly from Sent when the liaison uploads without first
//! flagging preparation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tadqiq_core::{DocRequestId, PlanDate, TaskId};

/// The lifecycle status of a document request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocRequestStatus {
    /// Sent to the liaison officer, awaiting a response.
    Sent,
    /// The liaison is preparing the documents.
    InProgress,
    /// Documents delivered (terminal).
    Received,
}

impl DocRequestStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Received)
    }

    /// The Arabic status label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Sent => "بانتظار الرد",
            Self::InProgress => "جاري التجهيز",
            Self::Received => "تم الاستلام",
        }
    }
}

impl std::fmt::Display for DocRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sent => "SENT",
            Self::InProgress => "IN_PROGRESS",
            Self::Received => "RECEIVED",
        };
        f.write_str(s)
    }
}

/// Errors that can occur during document-request transitions.
#[derive(Error, Debug)]
pub enum DocRequestError {
    /// Attempted transition is not valid from the current status.
    #[error("invalid document request transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },
}

/// A supporting-document request raised on an audit task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// Request reference code.
    pub id: DocRequestId,
    /// The task the request belongs to.
    pub task_id: TaskId,
    /// Name of the requested document.
    pub title: String,
    /// Details and justification, free text.
    pub description: String,
    /// Latest acceptable delivery date.
    pub due_date: PlanDate,
    /// Current lifecycle status.
    pub status: DocRequestStatus,
    /// URL of the delivered document, once fulfilled.
    pub attachment_url: Option<String>,
}

impl DocumentRequest {
    /// Create a new request in the Sent status.
    pub fn new(
        id: DocRequestId,
        task_id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: PlanDate,
    ) -> Self {
        Self {
            id,
            task_id,
            title: title.into(),
            description: description.into(),
            due_date,
            status: DocRequestStatus::Sent,
            attachment_url: None,
        }
    }

    /// The liaison flags the request as being prepared (SENT → IN_PROGRESS).
    pub fn begin_preparation(&mut self) -> Result<(), DocRequestError> {
        match self.status {
            DocRequestStatus::Sent => {
                self.status = DocRequestStatus::InProgress;
                Ok(())
            }
            other => Err(DocRequestError::InvalidTransition {
                from: other.to_string(),
                to: "IN_PROGRESS".to_string(),
            }),
        }
    }

    /// The liaison delivers the documents (→ RECEIVED, terminal).
    pub fn fulfil(&mut self, attachment_url: Option<String>) -> Result<(), DocRequestError> {
        match self.status {
            DocRequestStatus::Sent | DocRequestStatus::InProgress => {
                self.attachment_url = attachment_url;
                self.status = DocRequestStatus::Received;
                Ok(())
            }
            DocRequestStatus::Received => Err(DocRequestError::InvalidTransition {
                from: self.status.to_string(),
                to: "RECEIVED".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request() -> DocumentRequest {
        DocumentRequest::new(
            DocRequestId::new("REQ-1"),
            TaskId::new("SH-101"),
            "سجلات العمليات المالية - فبراير",
            "كافة العمليات التي تمت عبر بوابة الدفع.",
            PlanDate::parse("2024-03-15").unwrap(),
        )
    }

    #[test]
    fn test_new_request_is_sent() {
        let r = make_request();
        assert_eq!(r.status, DocRequestStatus::Sent);
        assert!(r.attachment_url.is_none());
    }

    #[test]
    fn test_full_flow_sent_preparing_received() {
        let mut r = make_request();
        r.begin_preparation().unwrap();
        assert_eq!(r.status, DocRequestStatus::InProgress);
        r.fulfil(Some("blob:records-feb".to_string())).unwrap();
        assert_eq!(r.status, DocRequestStatus::Received);
        assert_eq!(r.attachment_url.as_deref(), Some("blob:records-feb"));
    }

    #[test]
    fn test_fulfil_directly_from_sent() {
        let mut r = make_request();
        r.fulfil(None).unwrap();
        assert_eq!(r.status, DocRequestStatus::Received);
    }

    #[test]
    fn test_received_is_terminal() {
        let mut r = make_request();
        r.fulfil(None).unwrap();
        assert!(r.begin_preparation().is_err());
        assert!(r.fulfil(None).is_err());
    }

    #[test]
    fn test_cannot_begin_preparation_twice() {
        let mut r = make_request();
        r.begin_preparation().unwrap();
        assert!(r.begin_preparation().is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DocRequestStatus::Sent.label_ar(), "بانتظار الرد");
        assert_eq!(DocRequestStatus::Received.to_string(), "RECEIVED");
    }
}
