//! # tadqiq-desk — The Audit Desk Application State
//!
//! The in-memory state root of the audit dashboard. A [`Desk`] holds
//! every record collection, the acting user, and the active navigation
//! section; operations mutate it synchronously and return structured
//! errors. Nothing survives beyond the `Desk` value — there is no
//! persistence layer.
//!
//! ## Modules
//!
//! - **Store** (`store.rs`): the `Desk` itself and every mutating
//!   operation, each gated on the acting user's role.
//! - **Users** (`user.rs`): the user record and the demo personas.
//! - **Access** (`access.rs`): the navigation sections and the roles
//!   admitted to each.
//! - **Filters** (`filters.rs`): role-conditioned visibility queries and
//!   the grouping views (tasks by plan, plans by year).
//! - **Dashboard** (`dashboard.rs`): the stat tiles and per-plan
//!   completion figures.
//! - **Escalation** (`escalation.rs`): overdue-task escalation levels.
//! - **Timeline** (`timeline.rs`): CSV export of a task's timeline.
//! - **Seed** (`seed.rs`): the hardcoded demo records.
//!
//! ## Role Enforcement
//!
//! A dashboard hides controls from roles that may not use them; a
//! library cannot hide methods, so the same rules surface as
//! `DeskError::RoleNotPermitted` rejections. What a role cannot see,
//! the filter queries do not return; what it cannot do, the operations
//! refuse.

pub mod access;
pub mod dashboard;
pub mod error;
pub mod escalation;
pub mod filters;
pub mod seed;
pub mod store;
pub mod timeline;
pub mod user;

pub use access::NavSection;
pub use dashboard::{DashboardStats, PlanTaskStats};
pub use error::DeskError;
pub use escalation::{EscalationLevel, EscalationState};
pub use filters::{PlanFilter, TaskFilter};
pub use store::Desk;
pub use user::User;
