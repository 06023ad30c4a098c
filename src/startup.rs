use crate::commands::{self, CommandContext};
use crate::shutdown;
use lukkari::components::countdown::display::render_countdown;
use lukkari::components::event_source::{EventSourceHandle, SheetClient};
use lukkari::components::{Calendar, ComponentManager, Countdown};
use lukkari::config::Config;
use lukkari::error::Error;
use std::sync::Arc;
use tokio::sync::{oneshot, RwLock};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Mount the calendar view and serve commands until quit or a signal
pub async fn start_app(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    // Set locale from config
    {
        let config_read = config.read().await;
        lukkari::set_locale(&config_read.locale);
        info!("Setting locale to {}", config_read.locale);
    }

    // Start the event source; the rows are fetched when the first component asks
    let sheet_client = {
        let config_read = config.read().await;
        SheetClient::from_config(&config_read)?
    };
    let event_source = EventSourceHandle::new(Arc::new(sheet_client));

    // Register components
    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register(Calendar::new()).await;
    component_manager.register(Countdown::new()).await;

    component_manager.init_all(event_source.clone()).await?;
    let component_manager = Arc::new(component_manager);

    let ctx = CommandContext::new(Arc::clone(&component_manager));
    print!("{}", initial_view(&ctx).await);

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    let shutdown_components = Arc::clone(&component_manager);
    let shutdown_source = event_source.clone();
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send, shutdown_components, shutdown_source).await;
    });

    let lines = commands::spawn_stdin_reader();

    // Wait for either the input loop to end or a shutdown signal
    tokio::select! {
        result = commands::run(&ctx, lines) => {
            info!("Input loop ended, shutting down...");
            shutdown::shutdown_all(&component_manager, &event_source).await;
            result.map_err(Into::into)
        }
        Ok(()) = shutdown_recv => {
            info!("Received shutdown signal, shutting down...");
            Ok(())
        }
    }
}

/// What the view shows on mount: countdown card when something is upcoming, then the calendar
async fn initial_view(ctx: &CommandContext) -> String {
    let mut output = String::new();

    if let Some(current) = ctx.countdown().and_then(|countdown| countdown.current()) {
        output.push_str(&render_countdown(Some(&current)));
        output.push('\n');
    }

    if let Some(calendar) = ctx.calendar() {
        output.push_str(&calendar.render().await);
    }

    output
}
