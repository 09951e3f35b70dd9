//! # User Records and Demo Personas
//!
//! The desk is seeded with a user directory and a switchable acting
//! persona per role: switching role swaps in that role's demo
//! identity, the way the demo login does.

use serde::{Deserialize, Serialize};

use tadqiq_core::{Department, UserId, UserRole};

/// A system user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User reference code.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// The user's role.
    pub role: UserRole,
    /// The user's department, where applicable.
    pub department: Option<Department>,
}

impl User {
    /// Build a user record.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        role: UserRole,
        department: Option<Department>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            department,
        }
    }

    /// The demo persona for a role.
    ///
    /// The auditor persona carries the `AUD-200` reference so the
    /// assigned-to-me task filter resolves against the seeded tasks;
    /// the liaison persona likewise carries `LIO-01`.
    pub fn persona(role: UserRole) -> User {
        match role {
            UserRole::Auditor => User::new(
                UserId::new("AUD-200"),
                "شهد الحربي",
                role,
                Some(Department::new("الإدارة العامة للمراجعة")),
            ),
            UserRole::LiaisonOfficer => User::new(
                UserId::new("LIO-01"),
                "منصور الصاعدي",
                role,
                Some(Department::new("إدارة الرقابة الصحية")),
            ),
            UserRole::DeptManager => User::new(
                UserId::new("USER-001"),
                "المستخدم التجريبي",
                role,
                Some(Department::new("إدارة التحول الرقمي")),
            ),
            UserRole::GeneralDirector | UserRole::DataEntry | UserRole::SystemAdmin => User::new(
                UserId::new("USER-001"),
                "المستخدم التجريبي",
                role,
                Some(Department::new("الإدارة العامة للمراجعة")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auditor_persona_is_shahad() {
        let u = User::persona(UserRole::Auditor);
        assert_eq!(u.id, UserId::new("AUD-200"));
        assert_eq!(u.name, "شهد الحربي");
    }

    #[test]
    fn test_dept_manager_persona_department() {
        let u = User::persona(UserRole::DeptManager);
        assert_eq!(
            u.department,
            Some(Department::new("إدارة التحول الرقمي"))
        );
    }

    #[test]
    fn test_director_persona_default_identity() {
        let u = User::persona(UserRole::GeneralDirector);
        assert_eq!(u.id, UserId::new("USER-001"));
        assert_eq!(
            u.department,
            Some(Department::new("الإدارة العامة للمراجعة"))
        );
    }
}
