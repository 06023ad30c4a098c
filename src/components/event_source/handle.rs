use super::actor::{EventSourceActor, EventSourceActorHandle};
use super::client::EventFetcher;
use super::models::RawEvent;
use crate::error::AppResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the event source actor
#[derive(Clone)]
pub struct EventSourceHandle {
    actor_handle: EventSourceActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl EventSourceHandle {
    /// Create a new EventSourceHandle and spawn the actor
    pub fn new(fetcher: Arc<dyn EventFetcher>) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = EventSourceActor::new(fetcher);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Get the canonical event list in fetch order
    pub async fn events(&self) -> AppResult<Arc<[RawEvent]>> {
        self.actor_handle.get_events().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
