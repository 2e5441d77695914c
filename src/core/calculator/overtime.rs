//! Daily overtime allocation.
//!
//! Overtime belongs to the cumulative day, not to a single punch: the day's
//! total is compared with the scheduled minutes once, and every unit
//! (entry or allocation) then receives its proportional share of the
//! regular and overtime portions.

use chrono::NaiveDateTime;

use crate::models::{HoursType, OvertimePolicy, TimeEntry};

/// Sum of the worked minutes of a person's day.
pub fn total_daily_minutes<'a, I>(entries: I, now: NaiveDateTime) -> i64
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries.into_iter().map(|e| e.worked_minutes(now)).sum()
}

/// One emitted portion of a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursPortion {
    pub hours_type: HoursType,
    pub hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyOvertime {
    pub total_minutes: i64,
    pub scheduled_minutes: i64,
    pub policy_enabled: bool,
}

impl DailyOvertime {
    pub fn new(total_minutes: i64, scheduled_minutes: i64, policy: &OvertimePolicy) -> Self {
        Self {
            total_minutes,
            scheduled_minutes,
            policy_enabled: policy.enabled,
        }
    }

    /// True when the day must be split into regular and overtime.
    pub fn splits(&self) -> bool {
        self.policy_enabled
            && self.scheduled_minutes > 0
            && self.total_minutes > self.scheduled_minutes
    }

    pub fn regular_minutes(&self) -> i64 {
        self.total_minutes.min(self.scheduled_minutes)
    }

    pub fn overtime_minutes(&self) -> i64 {
        (self.total_minutes - self.scheduled_minutes).max(0)
    }

    /// Portions for a unit worth `unit_minutes`.
    ///
    /// Without a split the unit yields exactly one `Regular` portion, even
    /// when empty. With a split, zero portions are dropped.
    pub fn split(&self, unit_minutes: f64) -> Vec<HoursPortion> {
        if !self.splits() {
            return vec![HoursPortion {
                hours_type: HoursType::Regular,
                hours: unit_minutes / 60.0,
            }];
        }

        // splits() guarantees total > scheduled > 0
        let ratio = unit_minutes / self.total_minutes as f64;
        let regular = self.regular_minutes() as f64 * ratio;
        let overtime = self.overtime_minutes() as f64 * ratio;

        tracing::debug!(
            unit_minutes,
            total = self.total_minutes,
            scheduled = self.scheduled_minutes,
            regular,
            overtime,
            "split unit into regular/overtime"
        );

        let mut portions = Vec::with_capacity(2);
        if regular > 0.0 {
            portions.push(HoursPortion {
                hours_type: HoursType::Regular,
                hours: regular / 60.0,
            });
        }
        if overtime > 0.0 {
            portions.push(HoursPortion {
                hours_type: HoursType::Overtime,
                hours: overtime / 60.0,
            });
        }
        portions
    }
}
