//! # Navigation Access Rules
//!
//! The dashboard's sections and the roles admitted to each. This is the
//! single place the per-section role lists live; every view renders or
//! refuses based on these tables.

use serde::{Deserialize, Serialize};

use tadqiq_core::UserRole;

/// The dashboard's navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavSection {
    /// The landing dashboard with the stat tiles.
    Dashboard,
    /// Annual plans and their program rosters.
    AnnualPlan,
    /// Task oversight, grouped by plan.
    TasksOversight,
    /// Regulatory-entity correspondence.
    RegulatoryEntities,
    /// Audit reports.
    Reports,
    /// Document requests.
    DocRequests,
    /// Notifications.
    Notifications,
    /// Awareness-message center.
    Awareness,
}

impl NavSection {
    /// All sections in sidebar order.
    pub fn all_sections() -> &'static [NavSection] {
        &[
            Self::Dashboard,
            Self::AnnualPlan,
            Self::TasksOversight,
            Self::RegulatoryEntities,
            Self::Reports,
            Self::DocRequests,
            Self::Notifications,
            Self::Awareness,
        ]
    }

    /// The roles admitted to this section.
    pub fn allowed_roles(&self) -> &'static [UserRole] {
        use UserRole::*;
        match self {
            Self::Dashboard | Self::Notifications => UserRole::all_roles(),
            Self::AnnualPlan => &[GeneralDirector, DeptManager, DataEntry, SystemAdmin],
            Self::TasksOversight => &[Auditor, DeptManager, GeneralDirector, DataEntry],
            Self::RegulatoryEntities => &[GeneralDirector, LiaisonOfficer, SystemAdmin],
            Self::Reports => &[GeneralDirector, DeptManager, Auditor],
            Self::DocRequests => &[Auditor, LiaisonOfficer],
            Self::Awareness => &[GeneralDirector, SystemAdmin],
        }
    }

    /// Whether a role may open this section.
    pub fn admits(&self, role: UserRole) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// The sections a role sees in its sidebar, in order.
    pub fn sections_for(role: UserRole) -> Vec<NavSection> {
        Self::all_sections()
            .iter()
            .copied()
            .filter(|s| s.admits(role))
            .collect()
    }

    /// The Arabic sidebar label.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Dashboard => "لوحة التحكم",
            Self::AnnualPlan => "الخطة السنوية",
            Self::TasksOversight => "المهام",
            Self::RegulatoryEntities => "الجهات الرقابية",
            Self::Reports => "التقارير",
            Self::DocRequests => "طلبات المستندات",
            Self::Notifications => "الإشعارات",
            Self::Awareness => "رسائل التوعية",
        }
    }
}

impl std::fmt::Display for NavSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Dashboard => "dashboard",
            Self::AnnualPlan => "annual-plan",
            Self::TasksOversight => "tasks-oversight",
            Self::RegulatoryEntities => "regulatory-entities",
            Self::Reports => "reports",
            Self::DocRequests => "doc-requests",
            Self::Notifications => "notifications",
            Self::Awareness => "awareness",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_open_to_everyone() {
        for role in UserRole::all_roles() {
            assert!(NavSection::Dashboard.admits(*role));
            assert!(NavSection::Notifications.admits(*role));
        }
    }

    #[test]
    fn test_awareness_restricted_to_director_and_admin() {
        assert!(NavSection::Awareness.admits(UserRole::GeneralDirector));
        assert!(NavSection::Awareness.admits(UserRole::SystemAdmin));
        assert!(!NavSection::Awareness.admits(UserRole::Auditor));
        assert!(!NavSection::Awareness.admits(UserRole::DeptManager));
    }

    #[test]
    fn test_doc_requests_for_auditor_and_liaison_only() {
        assert!(NavSection::DocRequests.admits(UserRole::Auditor));
        assert!(NavSection::DocRequests.admits(UserRole::LiaisonOfficer));
        assert!(!NavSection::DocRequests.admits(UserRole::GeneralDirector));
        assert!(!NavSection::DocRequests.admits(UserRole::DataEntry));
    }

    #[test]
    fn test_regulatory_excludes_auditor() {
        assert!(!NavSection::RegulatoryEntities.admits(UserRole::Auditor));
        assert!(NavSection::RegulatoryEntities.admits(UserRole::LiaisonOfficer));
    }

    #[test]
    fn test_liaison_sidebar_sections() {
        let sections = NavSection::sections_for(UserRole::LiaisonOfficer);
        assert_eq!(
            sections,
            vec![
                NavSection::Dashboard,
                NavSection::RegulatoryEntities,
                NavSection::DocRequests,
                NavSection::Notifications,
            ]
        );
    }

    #[test]
    fn test_section_ids_match_display() {
        assert_eq!(NavSection::TasksOversight.to_string(), "tasks-oversight");
        assert_eq!(NavSection::AnnualPlan.to_string(), "annual-plan");
    }

    #[test]
    fn test_section_serde_matches_display() {
        for section in NavSection::all_sections() {
            let json = serde_json::to_string(section).unwrap();
            assert_eq!(json, format!("\"{section}\""));
        }
    }
}
