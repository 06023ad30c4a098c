use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Source of the viewer's current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock of the host's local zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Wall clock of a configured zone
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock(pub Tz);

impl Clock for ZonedClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.0).naive_local()
    }
}

/// Clock for an optional configured zone
pub fn clock_for(tz: Option<Tz>) -> Arc<dyn Clock> {
    match tz {
        Some(tz) => Arc::new(ZonedClock(tz)),
        None => Arc::new(LocalClock),
    }
}
