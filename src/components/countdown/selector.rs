use super::time::Remaining;
use crate::components::event_source::RawEvent;
use chrono::NaiveDateTime;

/// The nearest published event that has not started yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextEvent<'a> {
    pub event: &'a RawEvent,
    pub starts_at: NaiveDateTime,
}

/// Pick the published event with the earliest start at or after `now`.
///
/// The user's filters do not apply here. Rows whose start does not parse are
/// never picked, and on equal starts the earlier row wins.
pub fn next_event(events: &[RawEvent], now: NaiveDateTime) -> Option<NextEvent<'_>> {
    events
        .iter()
        .filter(|event| event.is_published())
        .filter_map(|event| {
            event
                .start_instant()
                .map(|starts_at| NextEvent { event, starts_at })
        })
        .filter(|next| next.starts_at >= now)
        .min_by_key(|next| next.starts_at)
}

/// What the countdown shows for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub event: RawEvent,
    pub starts_at: NaiveDateTime,
    pub remaining: Remaining,
}

/// Recompute the countdown from scratch, `None` when nothing is upcoming
pub fn snapshot(events: &[RawEvent], now: NaiveDateTime) -> Option<CountdownSnapshot> {
    next_event(events, now).map(|next| CountdownSnapshot {
        event: next.event.clone(),
        starts_at: next.starts_at,
        remaining: Remaining::between(now, next.starts_at),
    })
}
