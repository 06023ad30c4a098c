use super::clock::Clock;
use super::selector::{snapshot, CountdownSnapshot};
use crate::components::event_source::RawEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Period between countdown recomputations
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running countdown ticker
pub struct Ticker {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Whether the ticker task has ended
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel the ticker and wait for its task to end
    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            error!("Countdown ticker ended abnormally: {}", e);
        }
    }
}

/// Start recomputing the countdown every `period`, publishing each result
pub fn start_ticker(
    events: Arc<[RawEvent]>,
    clock: Arc<dyn Clock>,
    period: Duration,
    sender: watch::Sender<Option<CountdownSnapshot>>,
) -> Ticker {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let task = tokio::spawn(async move {
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!("Countdown ticker started");

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticks.tick() => {
                    let current = snapshot(&events, clock.now());
                    if let Some(current) = &current {
                        debug!(
                            "Next event '{}' in {}s",
                            current.event.title_text(),
                            current.remaining.total_secs()
                        );
                    }
                    sender.send_replace(current);
                }
            }
        }

        info!("Countdown ticker stopped");
    });

    Ticker { cancel, task }
}
