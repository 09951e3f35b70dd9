//! # Overdue-Task Escalation
//!
//! Escalation level of a running task from the days elapsed since its
//! start date. A new level is reached every five days, capped at the
//! third level:
//!
//! | Level | Reached after | Bar fill |
//! |-------|---------------|----------|
//! | 0     | start         | 25%      |
//! | 1     | 5 days        | 50%      |
//! | 2     | 10 days       | 66%      |
//! | 3     | 15 days       | 100%     |

use serde::Serialize;

use tadqiq_core::PlanDate;
use tadqiq_state::AuditTask;

/// Days between escalation levels.
const LEVEL_STEP_DAYS: i64 = 5;

/// An escalation level, 0 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EscalationLevel {
    /// Within the first window.
    Level0,
    /// First escalation reached.
    Level1,
    /// Second escalation reached.
    Level2,
    /// Third and final escalation reached.
    Level3,
}

impl EscalationLevel {
    /// Derive the level from days elapsed since the start date.
    pub fn from_days_elapsed(days: i64) -> Self {
        match days / LEVEL_STEP_DAYS {
            i64::MIN..=0 => Self::Level0,
            1 => Self::Level1,
            2 => Self::Level2,
            _ => Self::Level3,
        }
    }

    /// The numeric level.
    pub fn number(&self) -> u8 {
        match self {
            Self::Level0 => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }

    /// Progress-bar fill percent for this level.
    pub fn fill_percent(&self) -> u8 {
        match self {
            Self::Level0 => 25,
            Self::Level1 => 50,
            Self::Level2 => 66,
            Self::Level3 => 100,
        }
    }

    /// Whether this is the final escalation level.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Level3)
    }
}

/// The escalation reading of a task at a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EscalationState {
    /// Current level.
    pub level: EscalationLevel,
    /// Whole days since the task's start date (floored at zero).
    pub days_elapsed: i64,
    /// Days until the next level, if any remain.
    pub days_to_next: Option<i64>,
}

impl EscalationState {
    /// Compute the escalation reading of a task as of `today`.
    pub fn for_task(task: &AuditTask, today: PlanDate) -> Self {
        let days_elapsed = task.start_date.days_until(today).max(0);
        let level = EscalationLevel::from_days_elapsed(days_elapsed);
        let days_to_next = if level.is_final() {
            None
        } else {
            let next_threshold = (i64::from(level.number()) + 1) * LEVEL_STEP_DAYS;
            Some((next_threshold - days_elapsed).max(0))
        };
        Self {
            level,
            days_elapsed,
            days_to_next,
        }
    }

    /// The Arabic status line shown under the escalation bar.
    pub fn message_ar(&self) -> String {
        match (self.level, self.days_to_next) {
            (EscalationLevel::Level0, Some(remaining)) => {
                format!("متبقي {remaining} أيام على التصعيد الأول")
            }
            (EscalationLevel::Level1, Some(remaining)) => {
                format!("متبقي {remaining} أيام على التصعيد الثاني")
            }
            (EscalationLevel::Level2, Some(remaining)) if remaining > 0 => {
                format!("تم الوصول إلى التصعيد الثاني • متبقي {remaining} أيام على التصعيد الثالث")
            }
            (EscalationLevel::Level2, _) => "تم الوصول إلى التصعيد الثاني".to_string(),
            _ => "تم الوصول إلى أعلى مستوى تصعيد".to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tadqiq_core::{Department, PlanYear, TaskId};
    use tadqiq_state::TaskType;

    fn task_started(start: &str) -> AuditTask {
        AuditTask::new(
            TaskId::new("DT-1"),
            "أتمتة إجراءات الرقابة الميدانية",
            "تحويل النماذج الورقية إلى نماذج رقمية.",
            TaskType::Audit,
            PlanDate::parse(start).unwrap(),
            PlanDate::parse("2024-06-30").unwrap(),
            Department::new("إدارة التحول الرقمي"),
            PlanYear(1446),
        )
    }

    fn on(date: &str) -> PlanDate {
        PlanDate::parse(date).unwrap()
    }

    #[test]
    fn test_level_thresholds_every_five_days() {
        assert_eq!(EscalationLevel::from_days_elapsed(0), EscalationLevel::Level0);
        assert_eq!(EscalationLevel::from_days_elapsed(4), EscalationLevel::Level0);
        assert_eq!(EscalationLevel::from_days_elapsed(5), EscalationLevel::Level1);
        assert_eq!(EscalationLevel::from_days_elapsed(9), EscalationLevel::Level1);
        assert_eq!(EscalationLevel::from_days_elapsed(10), EscalationLevel::Level2);
        assert_eq!(EscalationLevel::from_days_elapsed(15), EscalationLevel::Level3);
        assert_eq!(EscalationLevel::from_days_elapsed(90), EscalationLevel::Level3);
    }

    #[test]
    fn test_days_to_next_level() {
        let task = task_started("2024-03-01");
        let state = EscalationState::for_task(&task, on("2024-03-03"));
        assert_eq!(state.level, EscalationLevel::Level0);
        assert_eq!(state.days_elapsed, 2);
        assert_eq!(state.days_to_next, Some(3));
    }

    #[test]
    fn test_final_level_has_no_next() {
        let task = task_started("2024-03-01");
        let state = EscalationState::for_task(&task, on("2024-04-01"));
        assert_eq!(state.level, EscalationLevel::Level3);
        assert_eq!(state.days_to_next, None);
        assert_eq!(state.message_ar(), "تم الوصول إلى أعلى مستوى تصعيد");
    }

    #[test]
    fn test_future_start_floors_at_zero() {
        let task = task_started("2024-03-10");
        let state = EscalationState::for_task(&task, on("2024-03-05"));
        assert_eq!(state.days_elapsed, 0);
        assert_eq!(state.level, EscalationLevel::Level0);
    }

    #[test]
    fn test_level_two_message_with_remaining() {
        let task = task_started("2024-03-01");
        let state = EscalationState::for_task(&task, on("2024-03-13"));
        assert_eq!(state.level, EscalationLevel::Level2);
        assert_eq!(state.days_to_next, Some(3));
        assert!(state.message_ar().contains("التصعيد الثالث"));
    }

    #[test]
    fn test_fill_percent_mapping() {
        assert_eq!(EscalationLevel::Level0.fill_percent(), 25);
        assert_eq!(EscalationLevel::Level1.fill_percent(), 50);
        assert_eq!(EscalationLevel::Level2.fill_percent(), 66);
        assert_eq!(EscalationLevel::Level3.fill_percent(), 100);
    }
}
