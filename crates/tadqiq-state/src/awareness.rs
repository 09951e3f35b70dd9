//! # Awareness Messages
//!
//! Compliance-culture messages published to municipality staff. A
//! message is drafted (optionally from an AI suggestion), targeted at
//! an audience, then marked sent.

use serde::{Deserialize, Serialize};

use tadqiq_core::{MessageId, PlanDate};

/// The audience an awareness message targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Audience {
    /// All municipality staff.
    AllStaff,
    /// Department managers.
    DeptManagers,
    /// Field inspectors.
    FieldInspectors,
}

impl Audience {
    /// The Arabic label shown in the publishing form.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::AllStaff => "جميع المنسوبين",
            Self::DeptManagers => "مدراء الإدارات",
            Self::FieldInspectors => "المراقبين الميدانيين",
        }
    }
}

/// An awareness message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwarenessMessage {
    /// Message reference code.
    pub id: MessageId,
    /// Subject line.
    pub title: String,
    /// Message body.
    pub body: String,
    /// Target audience.
    pub audience: Audience,
    /// Scheduled publish date.
    pub publish_date: PlanDate,
    /// Whether the message has gone out.
    pub sent: bool,
}

impl AwarenessMessage {
    /// Draft a new message.
    pub fn new(
        id: MessageId,
        title: impl Into<String>,
        body: impl Into<String>,
        audience: Audience,
        publish_date: PlanDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            audience,
            publish_date,
            sent: false,
        }
    }

    /// Mark the message as sent.
    pub fn mark_sent(&mut self) {
        self.sent = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_then_send() {
        let mut m = AwarenessMessage::new(
            MessageId::new("MSG-1"),
            "أهمية سرية بيانات التفتيش",
            "نود التأكيد على ضرورة الالتزام بالمعايير الأمنية.",
            Audience::AllStaff,
            PlanDate::parse("2024-03-20").unwrap(),
        );
        assert!(!m.sent);
        m.mark_sent();
        assert!(m.sent);
    }

    #[test]
    fn test_audience_labels() {
        assert_eq!(Audience::AllStaff.label_ar(), "جميع المنسوبين");
        assert_eq!(Audience::FieldInspectors.label_ar(), "المراقبين الميدانيين");
    }
}
