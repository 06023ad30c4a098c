#[macro_use]
extern crate rust_i18n;

mod commands;
mod shutdown;
mod startup;

use tracing::info;

// Initialize i18n
i18n!("locales", fallback = "en");

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting lukkari");

    // Load configuration
    let config = startup::load_config().await?;

    // Mount the calendar view
    startup::start_app(config).await
}
