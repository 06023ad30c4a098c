use super::client::EventFetcher;
use super::models::RawEvent;
use crate::error::{data_source_error, AppResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// The event source actor that owns the fetched-once event list
pub struct EventSourceActor {
    fetcher: Arc<dyn EventFetcher>,
    cache: Option<Arc<[RawEvent]>>,
    command_rx: mpsc::Receiver<EventSourceCommand>,
}

/// Commands that can be sent to the event source actor
pub enum EventSourceCommand {
    GetEvents(mpsc::Sender<Arc<[RawEvent]>>),
    Shutdown,
}

/// Handle for communicating with the event source actor
#[derive(Clone)]
pub struct EventSourceActorHandle {
    command_tx: mpsc::Sender<EventSourceCommand>,
}

impl EventSourceActorHandle {
    /// Get the event list, fetching it on first use
    pub async fn get_events(&self) -> AppResult<Arc<[RawEvent]>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(EventSourceCommand::GetEvents(response_tx))
            .await
            .map_err(|e| data_source_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| data_source_error("Response channel closed"))
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(EventSourceCommand::Shutdown).await;
        Ok(())
    }
}

impl EventSourceActor {
    /// Create a new actor and return its handle
    pub fn new(fetcher: Arc<dyn EventFetcher>) -> (Self, EventSourceActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            fetcher,
            cache: None,
            command_rx,
        };

        let handle = EventSourceActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Event source actor started");

        // Commands are served one at a time, so a first request that is still
        // fetching holds back every later one until the cache is filled
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                EventSourceCommand::GetEvents(response_tx) => {
                    let events = self.load().await;
                    let _ = response_tx.send(events).await;
                }
                EventSourceCommand::Shutdown => {
                    info!("Event source actor shutting down");
                    break;
                }
            }
        }

        info!("Event source actor shut down");
    }

    /// Return the cached list, fetching it exactly once
    async fn load(&mut self) -> Arc<[RawEvent]> {
        if let Some(events) = &self.cache {
            return Arc::clone(events);
        }

        let events: Arc<[RawEvent]> = match self.fetcher.fetch().await {
            Ok(events) => {
                info!(
                    "Loaded {} calendar events from {}",
                    events.len(),
                    self.fetcher.describe()
                );
                events.into()
            }
            Err(e) => {
                error!(
                    "Failed to load calendar events from {}: {}",
                    self.fetcher.describe(),
                    e
                );
                Vec::<RawEvent>::new().into()
            }
        };

        self.cache = Some(Arc::clone(&events));
        events
    }
}
