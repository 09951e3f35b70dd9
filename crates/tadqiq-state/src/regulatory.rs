//! # Regulatory Correspondence Lifecycle
//!
//! Tracks notifications from external oversight bodies (the
//! anti-corruption authority, the board of grievances) and the
//! director's handling actions.
//!
//! ```text
//! New ──record_action()──▶ Processing ──close()──▶ Closed (terminal)
//! ```
//!
//! The liaison officer logs inbound notifications; the general director
//! acts on them. Each action is appended to the request's action log,
//! and the first action moves the request out of New.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tadqiq_core::{Department, PlanDate, RegulatoryRef, Timestamp};

// ─── Status ──────────────────────────────────────────────────────────

/// The lifecycle status of a regulatory notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegulatoryStatus {
    /// Logged and forwarded to the general director.
    New,
    /// Being handled.
    Processing,
    /// Response delivered and file closed (terminal).
    Closed,
}

impl RegulatoryStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The Arabic status label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::New => "محال للمراجعة",
            Self::Processing => "قيد المعالجة",
            Self::Closed => "مكتمل",
        }
    }
}

impl std::fmt::Display for RegulatoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::Processing => "PROCESSING",
            Self::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

// ─── Director Actions ────────────────────────────────────────────────

/// Handling actions the general director can take on a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum DirectorAction {
    /// Open an audit task to investigate the notification's subject.
    CreateTask {
        /// The department the new task targets.
        department: Department,
    },
    /// Ask a department for information before responding.
    RequestInfo {
        /// The department asked.
        department: Department,
        /// The inquiry text.
        inquiry: String,
    },
    /// Draft and approve the official response to the sender.
    PrepareResponse {
        /// The response text.
        response: String,
    },
}

impl DirectorAction {
    /// The Arabic confirmation shown when the action completes.
    pub fn confirmation_ar(&self) -> &'static str {
        match self {
            Self::CreateTask { .. } => "تم إنشاء المهمة وإسنادها بنجاح",
            Self::RequestInfo { .. } => "تم إرسال طلب المعلومات للإدارة",
            Self::PrepareResponse { .. } => "تم اعتماد الرد الرسمي وإرساله للجهة",
        }
    }
}

/// One entry in a notification's action log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatoryActionRecord {
    /// The action taken.
    pub action: DirectorAction,
    /// When it was taken.
    pub timestamp: Timestamp,
    /// Who took it (job title).
    pub actor: String,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during regulatory-request transitions.
#[derive(Error, Debug)]
pub enum RegulatoryError {
    /// Request file is closed.
    #[error("regulatory request {reference} is closed")]
    Closed {
        /// The request reference.
        reference: String,
    },

    /// Closing requires the request to have been processed.
    #[error("regulatory request {reference} is {status}; only processing requests can close")]
    NotProcessing {
        /// The request reference.
        reference: String,
        /// The current status.
        status: String,
    },
}

// ─── Regulatory Request ──────────────────────────────────────────────

/// A notification from an external oversight body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatoryRequest {
    /// Zero-padded registry reference (`REG-001`).
    pub reference: RegulatoryRef,
    /// The sending oversight body.
    pub sender_entity: String,
    /// Kind of notification (`بلاغ إداري`, `طلب إفادة`).
    pub notification_type: String,
    /// Main topic line.
    pub main_topic: String,
    /// Full notification text.
    pub note: String,
    /// Date received.
    pub date: PlanDate,
    /// Current lifecycle status.
    pub status: RegulatoryStatus,
    /// Ordered log of the director's handling actions.
    pub actions: Vec<RegulatoryActionRecord>,
}

impl RegulatoryRequest {
    /// Log a new inbound notification.
    pub fn new(
        reference: RegulatoryRef,
        sender_entity: impl Into<String>,
        notification_type: impl Into<String>,
        main_topic: impl Into<String>,
        note: impl Into<String>,
        date: PlanDate,
    ) -> Self {
        Self {
            reference,
            sender_entity: sender_entity.into(),
            notification_type: notification_type.into(),
            main_topic: main_topic.into(),
            note: note.into(),
            date,
            status: RegulatoryStatus::New,
            actions: Vec::new(),
        }
    }

    /// Record a handling action by the general director.
    ///
    /// The first action moves the request from New to Processing.
    /// Returns the Arabic confirmation line for the action.
    pub fn record_action(
        &mut self,
        action: DirectorAction,
        actor: impl Into<String>,
    ) -> Result<&'static str, RegulatoryError> {
        if self.status.is_terminal() {
            return Err(RegulatoryError::Closed {
                reference: self.reference.to_string(),
            });
        }
        let confirmation = action.confirmation_ar();
        self.actions.push(RegulatoryActionRecord {
            action,
            timestamp: Timestamp::now(),
            actor: actor.into(),
        });
        if self.status == RegulatoryStatus::New {
            self.status = RegulatoryStatus::Processing;
        }
        Ok(confirmation)
    }

    /// Close the file (PROCESSING → CLOSED).
    pub fn close(&mut self) -> Result<(), RegulatoryError> {
        match self.status {
            RegulatoryStatus::Processing => {
                self.status = RegulatoryStatus::Closed;
                Ok(())
            }
            RegulatoryStatus::Closed => Err(RegulatoryError::Closed {
                reference: self.reference.to_string(),
            }),
            other => Err(RegulatoryError::NotProcessing {
                reference: self.reference.to_string(),
                status: other.to_string(),
            }),
        }
    }

    /// Whether the request matches a free-text search over the sender
    /// entity and main topic, as the registry's search box does.
    pub fn matches_search(&self, term: &str) -> bool {
        self.sender_entity.contains(term) || self.main_topic.contains(term)
    }
}
