//! # tadqiq-core — Foundational Types for the Audit Desk
//!
//! This crate is the bedrock of the Tadqiq stack. It defines the
//! type-system primitives shared by every other crate in the workspace;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `UserId`, `TaskId`,
//!    `PlanId`, `DocRequestId` — all newtypes carrying the human-readable
//!    reference codes the department uses (`SH-101`, `PLAN-1446`,
//!    `REG-001`). No bare strings for identifiers.
//!
//! 2. **Single `UserRole` enum.** One definition, 6 variants, exhaustive
//!    `match` everywhere. Adding a role forces every consumer to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision; calendar dates use `PlanDate`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tadqiq-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod department;
pub mod error;
pub mod identity;
pub mod role;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use department::{Department, STANDARD_DEPARTMENTS};
pub use error::TadqiqError;
pub use identity::{
    DocRequestId, MessageId, PlanId, ProgramId, RegulatoryRef, ReportId, TaskId, UserId,
};
pub use role::{UserRole, ROLE_COUNT};
pub use temporal::{PlanDate, PlanYear, Timestamp};
