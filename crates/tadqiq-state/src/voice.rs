//! # Employee Voice Reports
//!
//! Reports and suggestions submitted by municipality employees,
//! optionally anonymous. A report is either newly received or under
//! analysis; there is no further lifecycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tadqiq_core::{PlanDate, ReportId};

/// The handling status of an employee-voice report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Newly received.
    New,
    /// Under analysis by the audit team.
    Analyzing,
}

impl ReportStatus {
    /// The Arabic status label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::New => "جديدة",
            Self::Analyzing => "جاري التحليل",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::Analyzing => "ANALYZING",
        };
        f.write_str(s)
    }
}

/// Errors that can occur on an employee-voice report.
#[derive(Error, Debug)]
pub enum VoiceError {
    /// Report is already under analysis.
    #[error("report {report_id} is already under analysis")]
    AlreadyAnalyzing {
        /// The report reference code.
        report_id: String,
    },
}

/// An employee-voice report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeVoiceReport {
    /// Report reference code.
    pub id: ReportId,
    /// Short title.
    pub title: String,
    /// Report body.
    pub content: String,
    /// Date submitted.
    pub date: PlanDate,
    /// Current handling status.
    pub status: ReportStatus,
    /// Whether the submitter's identity is withheld.
    pub is_anonymous: bool,
}

impl EmployeeVoiceReport {
    /// Submit a new report.
    pub fn new(
        id: ReportId,
        title: impl Into<String>,
        content: impl Into<String>,
        date: PlanDate,
        is_anonymous: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            date,
            status: ReportStatus::New,
            is_anonymous,
        }
    }

    /// Move the report under analysis (NEW → ANALYZING).
    pub fn begin_analysis(&mut self) -> Result<(), VoiceError> {
        match self.status {
            ReportStatus::New => {
                self.status = ReportStatus::Analyzing;
                Ok(())
            }
            ReportStatus::Analyzing => Err(VoiceError::AlreadyAnalyzing {
                report_id: self.id.to_string(),
            }),
        }
    }

    /// The Arabic identity badge (`هوية مشفرة` / `الهوية معلنة`).
    pub fn identity_label_ar(&self) -> &'static str {
        if self.is_anonymous {
            "هوية مشفرة"
        } else {
            "الهوية معلنة"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(anonymous: bool) -> EmployeeVoiceReport {
        EmployeeVoiceReport::new(
            ReportId::new("R1"),
            "ملاحظة حول توزيع المهام الميدانية",
            "نلاحظ عدم وجود عدالة في توزيع الجولات التفتيشية.",
            PlanDate::parse("2024-03-01").unwrap(),
            anonymous,
        )
    }

    #[test]
    fn test_new_report_status() {
        let r = make_report(true);
        assert_eq!(r.status, ReportStatus::New);
        assert!(r.is_anonymous);
    }

    #[test]
    fn test_begin_analysis_once() {
        let mut r = make_report(false);
        r.begin_analysis().unwrap();
        assert_eq!(r.status, ReportStatus::Analyzing);
        assert!(matches!(
            r.begin_analysis(),
            Err(VoiceError::AlreadyAnalyzing { .. })
        ));
    }

    #[test]
    fn test_identity_labels() {
        assert_eq!(make_report(true).identity_label_ar(), "هوية مشفرة");
        assert_eq!(make_report(false).identity_label_ar(), "الهوية معلنة");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ReportStatus::New.label_ar(), "جديدة");
        assert_eq!(ReportStatus::Analyzing.to_string(), "ANALYZING");
    }
}
