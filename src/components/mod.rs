use crate::components::event_source::EventSourceHandle;
use crate::config::Config;
use crate::error::{component_error, AppResult};
use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// Export components
pub mod calendar;
pub mod countdown;
pub mod event_source;

pub use calendar::Calendar;
pub use countdown::Countdown;

/// Component trait that all components must implement
#[async_trait]
pub trait Component: Send + Sync + Any {
    /// Get the name of the component
    fn name(&self) -> &'static str;

    /// Initialize the component
    async fn init(&self, config: Arc<RwLock<Config>>, event_source: EventSourceHandle) -> AppResult<()>;

    /// Shutdown the component
    async fn shutdown(&self) -> AppResult<()>;

    /// Convert to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Manager for all components
pub struct ComponentManager {
    components: Vec<Box<dyn Component>>,
    config: Arc<RwLock<Config>>,
}

impl fmt::Debug for ComponentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentManager")
            .field("component_count", &self.components.len())
            .field("config", &self.config)
            .finish()
    }
}

impl ComponentManager {
    /// Create a new component manager
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            components: Vec::new(),
            config,
        }
    }

    /// Register a component, skipping it when the configuration disables it
    pub async fn register<T: Component + 'static>(&mut self, component: T) {
        if !self.config.read().await.is_component_enabled(component.name()) {
            info!("Component disabled: {}", component.name());
            return;
        }

        info!("Registering component: {}", component.name());
        self.components.push(Box::new(component));
    }

    /// Initialize all registered components.
    ///
    /// Every component gets its turn; failures are reported together afterwards.
    pub async fn init_all(&self, event_source: EventSourceHandle) -> AppResult<()> {
        let mut failed = Vec::new();

        for component in &self.components {
            info!("Initializing component: {}", component.name());

            if let Err(e) = component
                .init(Arc::clone(&self.config), event_source.clone())
                .await
            {
                // Log error but continue with other components
                tracing::error!("Error initializing component {}: {:?}", component.name(), e);
                failed.push(format!("{} ({})", component.name(), e));
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(component_error(&format!(
                "failed to initialize: {}",
                failed.join(", ")
            )))
        }
    }

    /// Shutdown all components
    pub async fn shutdown_all(&self) -> AppResult<()> {
        info!("Shutting down all components");

        for component in &self.components {
            info!("Shutting down component: {}", component.name());

            if let Err(e) = component.shutdown().await {
                // Log error but continue with other components
                tracing::error!(
                    "Error shutting down component {}: {:?}",
                    component.name(),
                    e
                );
            }
        }

        Ok(())
    }

    /// Get a component by name
    pub fn get_component_by_name(&self, name: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Get a component by name, downcast to its concrete type
    pub fn get<T: Component>(&self, name: &str) -> Option<&T> {
        self.get_component_by_name(name)
            .and_then(|component| component.as_any().downcast_ref::<T>())
    }
}
