use crate::error::{config_error, env_error, AppResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use url::Url;

/// Default locale for user-facing labels
pub const DEFAULT_LOCALE: &str = "ar";

/// Path of the optional component toggle file
pub const COMPONENTS_FILE: &str = "config/components.toml";

/// Names of the components that are enabled unless switched off
pub const DEFAULT_COMPONENTS: [&str; 2] = ["calendar", "countdown"];

/// Main configuration structure for the calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Spreadsheet API endpoint returning the event rows
    pub sheet_url: String,
    /// Locale used for labels and the countdown line
    pub locale: String,
    /// IANA timezone used as the viewer's wall clock, system local if unset
    pub timezone: Option<String>,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
}

impl Config {
    /// Create a configuration for the given endpoint with default settings
    pub fn new(sheet_url: impl Into<String>) -> Self {
        let components = DEFAULT_COMPONENTS
            .iter()
            .map(|name| (name.to_string(), true))
            .collect();

        Self {
            sheet_url: sheet_url.into(),
            locale: DEFAULT_LOCALE.to_string(),
            timezone: None,
            components,
        }
    }

    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let sheet_url = env::var("SHEETDB_URL")
            .or_else(|_| env::var("NEXT_PUBLIC_SHEETDB_URL"))
            .map_err(|_| env_error("SHEETDB_URL"))?;

        let mut config = Config::new(sheet_url);
        config.sheet_url()?;

        if let Ok(locale) = env::var("CALENDAR_LOCALE") {
            config.locale = locale;
        }

        config.timezone = env::var("CALENDAR_TIMEZONE")
            .ok()
            .filter(|tz| !tz.trim().is_empty());
        config.tz()?;

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string(COMPONENTS_FILE) {
            config.merge_components(&content)?;
        }

        Ok(config)
    }

    /// Merge component toggles from TOML content into the defaults
    pub fn merge_components(&mut self, content: &str) -> AppResult<()> {
        let file_components = toml::from_str::<HashMap<String, bool>>(content)?;
        for (key, value) in file_components {
            self.components.insert(key, value);
        }
        Ok(())
    }

    /// Parsed endpoint URL
    pub fn sheet_url(&self) -> AppResult<Url> {
        Url::parse(&self.sheet_url)
            .map_err(|e| config_error(&format!("Invalid SHEETDB_URL '{}': {}", self.sheet_url, e)))
    }

    /// Parsed viewer timezone, `None` meaning the system local zone
    pub fn tz(&self) -> AppResult<Option<Tz>> {
        match &self.timezone {
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| config_error(&format!("Invalid CALENDAR_TIMEZONE: {}", name))),
            None => Ok(None),
        }
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }
}
