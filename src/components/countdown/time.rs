use chrono::NaiveDateTime;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Time left until an event, split into calendar units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split whole seconds, clamping negative input to zero
    pub fn from_secs(total: i64) -> Self {
        let s = total.max(0);
        Self {
            days: s / SECONDS_PER_DAY,
            hours: (s % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (s % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: s % SECONDS_PER_MINUTE,
        }
    }

    /// Split a millisecond difference, flooring to whole seconds
    pub fn from_millis(diff_ms: i64) -> Self {
        Self::from_secs(diff_ms.div_euclid(1000))
    }

    /// Time left from `now` until `target`
    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        Self::from_millis(target.signed_duration_since(now).num_milliseconds())
    }

    /// Total seconds represented
    pub fn total_secs(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}
