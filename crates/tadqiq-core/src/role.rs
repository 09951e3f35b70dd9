//! # User Role — Single Source of Truth
//!
//! Defines the `UserRole` enum with all 6 department roles. This is the
//! ONE definition used across the entire stack. Every `match` on
//! `UserRole` must be exhaustive — adding a new role forces every
//! consumer to handle it at compile time.
//!
//! # Roles
//!
//! | # | Role | Arabic title |
//! |---|------|--------------|
//! | 1 | GeneralDirector | مدير عام المراجعة الداخلية |
//! | 2 | DeptManager | مدير إدارة |
//! | 3 | Auditor | مراجع |
//! | 4 | DataEntry | مدخل بيانات |
//! | 5 | LiaisonOfficer | ضابط اتصال |
//! | 6 | SystemAdmin | مسؤول النظام |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TadqiqError;

/// All user roles in the audit department.
///
/// Each role carries distinct visibility over the task and plan
/// collections and a distinct set of permitted operations; the desk
/// crate enforces both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Head of the general audit administration.
    GeneralDirector,
    /// Manager of an audited department.
    DeptManager,
    /// Audit team member executing tasks.
    Auditor,
    /// Data-entry clerk maintaining plans and programs.
    DataEntry,
    /// Department-side contact fulfilling document requests.
    LiaisonOfficer,
    /// System administrator.
    SystemAdmin,
}

/// Total number of user roles. Used for compile-time assertions.
pub const ROLE_COUNT: usize = 6;

impl UserRole {
    /// Returns all 6 roles in canonical order.
    pub fn all_roles() -> &'static [UserRole] {
        &[
            Self::GeneralDirector,
            Self::DeptManager,
            Self::Auditor,
            Self::DataEntry,
            Self::LiaisonOfficer,
            Self::SystemAdmin,
        ]
    }

    /// Returns the SCREAMING_SNAKE_CASE identifier for this role.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralDirector => "GENERAL_DIRECTOR",
            Self::DeptManager => "DEPT_MANAGER",
            Self::Auditor => "AUDITOR",
            Self::DataEntry => "DATA_ENTRY",
            Self::LiaisonOfficer => "LIAISON_OFFICER",
            Self::SystemAdmin => "SYSTEM_ADMIN",
        }
    }

    /// The Arabic job title shown throughout the department's records.
    pub fn title_ar(&self) -> &'static str {
        match self {
            Self::GeneralDirector => "مدير عام المراجعة الداخلية",
            Self::DeptManager => "مدير إدارة",
            Self::Auditor => "مراجع",
            Self::DataEntry => "مدخل بيانات",
            Self::LiaisonOfficer => "ضابط اتصال",
            Self::SystemAdmin => "مسؤول النظام",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = TadqiqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GENERAL_DIRECTOR" => Ok(Self::GeneralDirector),
            "DEPT_MANAGER" => Ok(Self::DeptManager),
            "AUDITOR" => Ok(Self::Auditor),
            "DATA_ENTRY" => Ok(Self::DataEntry),
            "LIAISON_OFFICER" => Ok(Self::LiaisonOfficer),
            "SYSTEM_ADMIN" => Ok(Self::SystemAdmin),
            other => Err(TadqiqError::Validation(format!("unknown role: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_count_matches_all_roles() {
        assert_eq!(UserRole::all_roles().len(), ROLE_COUNT);
    }

    #[test]
    fn test_as_str_roundtrips_through_from_str() {
        for role in UserRole::all_roles() {
            let parsed: UserRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, *role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("INTERN".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for role in UserRole::all_roles() {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn test_arabic_titles_are_distinct() {
        let mut titles: Vec<_> = UserRole::all_roles().iter().map(|r| r.title_ar()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), ROLE_COUNT);
    }
}
