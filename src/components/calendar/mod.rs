pub mod filter;
pub mod render;
pub mod widget;

pub use filter::{visible, Audience, Category, FilterChange, FilterSelection, Term};
pub use widget::WidgetEvent;

use crate::components::event_source::{EventSourceHandle, RawEvent};
use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Calendar view: the loaded events and the user's filter selection
pub struct Calendar {
    events: RwLock<Arc<[RawEvent]>>,
    selection: RwLock<FilterSelection>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Create an empty calendar with the all-wildcard selection
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::<RawEvent>::new().into()),
            selection: RwLock::new(FilterSelection::default()),
        }
    }

    /// Current filter selection
    pub async fn selection(&self) -> FilterSelection {
        *self.selection.read().await
    }

    /// Change one dimension and return the new selection
    pub async fn apply(&self, change: FilterChange) -> FilterSelection {
        let mut selection = self.selection.write().await;
        selection.apply(change);
        debug!("Filter selection changed to {:?}", *selection);
        *selection
    }

    /// Go back to the all-wildcard selection
    pub async fn reset(&self) -> FilterSelection {
        let mut selection = self.selection.write().await;
        *selection = FilterSelection::default();
        *selection
    }

    /// Events passing the current selection, in fetch order
    pub async fn visible_events(&self) -> Vec<RawEvent> {
        let events = Arc::clone(&*self.events.read().await);
        let selection = self.selection().await;
        visible(&events, &selection).into_iter().cloned().collect()
    }

    /// Widget input for the visible events
    pub async fn widget_events(&self) -> Vec<WidgetEvent> {
        self.visible_events()
            .await
            .iter()
            .map(WidgetEvent::from)
            .collect()
    }

    /// Text listing of the visible events
    pub async fn render(&self) -> String {
        let events = self.visible_events().await;
        let refs: Vec<&RawEvent> = events.iter().collect();
        render::render_listing(&refs)
    }
}

#[async_trait]
impl super::Component for Calendar {
    fn name(&self) -> &'static str {
        "calendar"
    }

    async fn init(&self, _config: Arc<RwLock<Config>>, event_source: EventSourceHandle) -> AppResult<()> {
        let events = event_source.events().await?;
        info!("Calendar view mounted with {} events", events.len());
        *self.events.write().await = events;
        Ok(())
    }

    async fn shutdown(&self) -> AppResult<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
