//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all reference codes in the audit desk. These
//! prevent accidental identifier confusion — you cannot pass a `TaskId`
//! where a `PlanId` is expected.
//!
//! The department's records use human-readable reference codes
//! (`SH-101`, `PLAN-1446`, `REQ-1`, `REG-001`), so each newtype wraps a
//! `String` rather than a raw UUID. Generated codes for newly created
//! records derive a short suffix from a v4 UUID; regulatory references
//! are zero-padded sequentials matching the registry's visible format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference code for a system user (`USER-001`, `AUD-200`, `LIO-01`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Reference code for an audit task (`SH-101`, `DT-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

/// Reference code for an annual plan (`PLAN-1446`, `P1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub String);

/// Reference code for an audit program within a plan (`PROG-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Reference code for a document request (`REQ-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocRequestId(pub String);

/// Reference code for a regulatory-entity notification (`REG-001`).
///
/// The registry displays these zero-padded to three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegulatoryRef(pub String);

/// Reference code for an employee-voice report (`R1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

/// Reference code for an awareness message (`MSG-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Short suffix derived from a fresh v4 UUID, used by `generate()`
/// constructors for records created at runtime.
fn short_suffix() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    uuid[..8].to_string()
}

macro_rules! reference_code {
    ($name:ident, $prefix:literal) => {
        impl $name {
            /// Wrap an existing reference code.
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Generate a fresh reference code with the registry prefix.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), short_suffix()))
            }

            /// Access the reference code as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }
    };
}

reference_code!(UserId, "USER");
reference_code!(TaskId, "TSK");
reference_code!(PlanId, "PLAN");
reference_code!(ProgramId, "PROG");
reference_code!(DocRequestId, "REQ");
reference_code!(ReportId, "RPT");
reference_code!(MessageId, "MSG");

impl RegulatoryRef {
    /// Wrap an existing regulatory reference.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Build the next sequential reference, zero-padded to three digits
    /// (`REG-007`), matching the registry's visible numbering.
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("REG-{sequence:03}"))
    }

    /// Access the reference code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegulatoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegulatoryRef {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_existing_code() {
        let id = TaskId::new("SH-101");
        assert_eq!(id.as_str(), "SH-101");
        assert_eq!(id.to_string(), "SH-101");
    }

    #[test]
    fn test_generate_uses_prefix() {
        let id = DocRequestId::generate();
        assert!(id.as_str().starts_with("REQ-"));
        assert_eq!(id.as_str().len(), "REQ-".len() + 8);
    }

    #[test]
    fn test_generated_codes_are_distinct() {
        assert_ne!(ProgramId::generate(), ProgramId::generate());
    }

    #[test]
    fn test_regulatory_sequence_padding() {
        assert_eq!(RegulatoryRef::from_sequence(7).as_str(), "REG-007");
        assert_eq!(RegulatoryRef::from_sequence(42).as_str(), "REG-042");
        assert_eq!(RegulatoryRef::from_sequence(1234).as_str(), "REG-1234");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = PlanId::new("PLAN-1446");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"PLAN-1446\"");
        let parsed: PlanId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
