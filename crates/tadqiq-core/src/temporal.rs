//! # Temporal Types
//!
//! Two kinds of time flow through the audit desk:
//!
//! - **`Timestamp`** — UTC-only instants with seconds precision, used for
//!   timeline records. Non-UTC inputs are rejected at construction; there
//!   is no silent conversion that could introduce ambiguity.
//! - **`PlanDate`** — calendar dates (`YYYY-MM-DD`) as the plan and task
//!   records carry them. No time-of-day component.
//!
//! Plan years are Hijri year labels (`1446`), not Gregorian calendar
//! values; `PlanYear` keeps them from being mixed with day arithmetic.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TadqiqError;

// ─── Timestamp ───────────────────────────────────────────────────────

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted — even `+00:00`, which is semantically equivalent to `Z`,
    /// is rejected, so every stored instant has exactly one rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, TadqiqError> {
        if !s.ends_with('Z') {
            return Err(TadqiqError::Validation(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            TadqiqError::Validation(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The calendar date of this instant.
    pub fn date(&self) -> PlanDate {
        PlanDate(self.0.date_naive())
    }

    /// Render as ISO8601 with Z suffix (e.g., `2024-03-15T14:30:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── PlanDate ────────────────────────────────────────────────────────

/// A calendar date as plan and task records carry it (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanDate(NaiveDate);

impl PlanDate {
    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Build a date from year, month, and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TadqiqError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                TadqiqError::Validation(format!("invalid calendar date: {year}-{month}-{day}"))
            })
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, TadqiqError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| TadqiqError::Validation(format!("invalid date {s:?}: {e}")))
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Whole days from `self` to `other` (negative when `other` is earlier).
    pub fn days_until(&self, other: PlanDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The date `days` whole days after this one.
    pub fn plus_days(&self, days: i64) -> PlanDate {
        PlanDate(self.0 + chrono::Duration::days(days))
    }

    /// The calendar year component. Distinct from [`PlanYear`], which is
    /// the Hijri planning-cycle label.
    pub fn calendar_year(&self) -> i32 {
        self.0.year()
    }
}

impl std::fmt::Display for PlanDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ─── PlanYear ────────────────────────────────────────────────────────

/// A Hijri planning-cycle year label (`1445`, `1446`).
///
/// These are labels for grouping plans and tasks, not values for
/// calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanYear(pub u16);

impl PlanYear {
    /// The numeric year label.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PlanYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
