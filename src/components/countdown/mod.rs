pub mod clock;
pub mod display;
pub mod scheduler;
pub mod selector;
pub mod time;

pub use clock::{Clock, LocalClock, ZonedClock};
pub use scheduler::{start_ticker, Ticker, TICK_PERIOD};
pub use selector::{next_event, snapshot, CountdownSnapshot, NextEvent};
pub use time::Remaining;

use crate::components::event_source::EventSourceHandle;
use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex, RwLock};
use tracing::info;

/// Live countdown to the next published event
pub struct Countdown {
    sender: watch::Sender<Option<CountdownSnapshot>>,
    clock: Option<Arc<dyn Clock>>,
    period: Duration,
    ticker: Mutex<Option<Ticker>>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// Create a countdown using the configured wall clock
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender,
            clock: None,
            period: TICK_PERIOD,
            ticker: Mutex::new(None),
        }
    }

    /// Use a specific clock instead of the configured one
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Latest countdown state
    pub fn current(&self) -> Option<CountdownSnapshot> {
        self.sender.borrow().clone()
    }

    /// Receiver notified on every tick
    pub fn subscribe(&self) -> watch::Receiver<Option<CountdownSnapshot>> {
        self.sender.subscribe()
    }

    /// Whether the ticker is currently running
    pub async fn is_running(&self) -> bool {
        self.ticker
            .lock()
            .await
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }
}

#[async_trait]
impl super::Component for Countdown {
    fn name(&self) -> &'static str {
        "countdown"
    }

    async fn init(&self, config: Arc<RwLock<Config>>, event_source: EventSourceHandle) -> AppResult<()> {
        let clock = match &self.clock {
            Some(clock) => Arc::clone(clock),
            None => clock::clock_for(config.read().await.tz()?),
        };

        let events = event_source.events().await?;

        // Publish before the first tick so the view can show it on mount
        self.sender.send_replace(snapshot(&events, clock.now()));

        let mut ticker = self.ticker.lock().await;
        if let Some(previous) = ticker.take() {
            previous.stop().await;
        }
        *ticker = Some(start_ticker(events, clock, self.period, self.sender.clone()));

        Ok(())
    }

    async fn shutdown(&self) -> AppResult<()> {
        if let Some(ticker) = self.ticker.lock().await.take() {
            ticker.stop().await;
            info!("Countdown stopped");
        }
        self.sender.send_replace(None);
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
