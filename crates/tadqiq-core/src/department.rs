//! # Department Registry
//!
//! Departments are identified by their Arabic names throughout the
//! municipality's records; there is no separate department code system.
//! The newtype keeps them from being confused with other free-text
//! fields, and the standard list mirrors the registry the department
//! filters against.

use serde::{Deserialize, Serialize};

/// A municipal department, identified by its Arabic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department(pub String);

/// The standard department registry, in display order.
///
/// The general audit administration itself is not listed here; it is the
/// auditing side, not an audited department.
pub const STANDARD_DEPARTMENTS: &[&str] = &[
    "إدارة التحول الرقمي",
    "إدارة الموارد البشرية",
    "إدارة تقنية المعلومات",
    "إدارة الأسواق",
    "الإدارة المالية",
    "إدارة الرقابة الصحية",
];

impl Department {
    /// Wrap a department name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the department name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The standard registry as typed departments.
    pub fn standard() -> Vec<Department> {
        STANDARD_DEPARTMENTS.iter().map(|d| Self::new(*d)).collect()
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Department {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
