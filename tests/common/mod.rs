#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use lukkari::components::countdown::Clock;
use lukkari::components::event_source::{EventFetcher, RawEvent};
use lukkari::error::{data_source_error, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mock fetcher serving a fixed set of rows and counting requests
#[derive(Debug, Default)]
pub struct MockFetcher {
    events: Vec<RawEvent>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockFetcher {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    /// Make every fetch take a while, to overlap concurrent callers
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventFetcher for MockFetcher {
    async fn fetch(&self) -> AppResult<Vec<RawEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.events.clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Mock fetcher that always fails, like an unreachable endpoint
#[derive(Debug, Default)]
pub struct FailingFetcher {
    calls: AtomicUsize,
}

impl FailingFetcher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventFetcher for FailingFetcher {
    async fn fetch(&self) -> AppResult<Vec<RawEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(data_source_error("connection refused"))
    }

    fn describe(&self) -> String {
        "unreachable".to_string()
    }
}

/// Clock stuck at one instant
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Clock that follows tokio's (possibly paused) time from an origin
pub struct TokioClock {
    origin: NaiveDateTime,
    started: tokio::time::Instant,
}

impl TokioClock {
    pub fn new(origin: NaiveDateTime) -> Self {
        Self {
            origin,
            started: tokio::time::Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> NaiveDateTime {
        let elapsed = tokio::time::Instant::now() - self.started;
        self.origin + chrono::Duration::from_std(elapsed).unwrap()
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// A published all-day row
pub fn event(id: &str, title: &str, start_date: &str) -> RawEvent {
    RawEvent {
        id: id.to_string(),
        title: title.to_string(),
        start_date: start_date.to_string(),
        ..Default::default()
    }
}

/// A row starting at a given wall-clock instant
pub fn event_at(id: &str, start: NaiveDateTime) -> RawEvent {
    RawEvent {
        id: id.to_string(),
        title: format!("Event {}", id),
        start_date: start.format("%Y-%m-%d").to_string(),
        start_time: Some(start.format("%H:%M:%S").to_string()),
        ..Default::default()
    }
}

/// A small school year with every kind of row
pub fn school_year() -> Vec<RawEvent> {
    vec![
        RawEvent {
            category: Some("study".to_string()),
            audience: Some("students|parents|teachers".to_string()),
            term: Some("T1".to_string()),
            icon_emoji: Some("🏫".to_string()),
            ..event("1", "First day of school", "2025-09-01")
        },
        RawEvent {
            category: Some("exam".to_string()),
            audience: Some("students".to_string()),
            term: Some("Exams".to_string()),
            end_date: Some("2025-12-20".to_string()),
            ..event("2", "Midterm exams", "2025-12-10")
        },
        RawEvent {
            category: Some("holiday".to_string()),
            term: Some("Break".to_string()),
            published: Some("TRUE".to_string()),
            ..event("3", "Winter break", "2025-12-21")
        },
        RawEvent {
            category: Some("event".to_string()),
            audience: Some("students|parents".to_string()),
            term: Some("T2".to_string()),
            published: Some("true".to_string()),
            ..event("4", "Science fair", "2026-02-14")
        },
        RawEvent {
            category: Some("registration".to_string()),
            audience: Some("parents".to_string()),
            published: Some("FALSE".to_string()),
            ..event("5", "Draft: registration", "2026-03-01")
        },
        RawEvent {
            audience: Some("teachers".to_string()),
            term: Some("Summer".to_string()),
            ..event("6", "Teacher training", "2026-07-01")
        },
    ]
}

pub fn ids(events: &[&RawEvent]) -> Vec<String> {
    events.iter().map(|e| e.id.clone()).collect()
}

pub fn fetcher(events: Vec<RawEvent>) -> Arc<MockFetcher> {
    Arc::new(MockFetcher::new(events))
}
