use super::models::RawEvent;
use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Field under which wrapped responses carry the rows
pub const WRAPPED_ROWS_FIELD: &str = "data";

/// Source of the raw calendar rows
#[async_trait]
pub trait EventFetcher: Send + Sync {
    /// Fetch every row once
    async fn fetch(&self) -> AppResult<Vec<RawEvent>>;

    /// Short description used in log lines
    fn describe(&self) -> String;
}

/// Fetcher for a spreadsheet-backed JSON endpoint
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
    url: Url,
}

impl SheetClient {
    /// Create a client for the given endpoint
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Create a client for the given endpoint on top of a prepared HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Create a client for the endpoint named in the configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(config.sheet_url()?))
    }
}

#[async_trait]
impl EventFetcher for SheetClient {
    async fn fetch(&self) -> AppResult<Vec<RawEvent>> {
        fetch_events(&self.client, &self.url).await
    }

    fn describe(&self) -> String {
        // Sheet URLs embed the API key in the path, keep only the host
        self.url.host_str().unwrap_or("sheet endpoint").to_string()
    }
}

/// Issue the single GET and normalize the body into rows
pub async fn fetch_events(client: &Client, url: &Url) -> AppResult<Vec<RawEvent>> {
    debug!("Requesting calendar rows from {}", url.host_str().unwrap_or_default());

    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let body: Value = response.json().await?;

    Ok(normalize_payload(body))
}

/// Accept either a bare array of rows or an object wrapping them in `data`.
///
/// Any other shape yields no rows. Elements that are not rows are skipped.
pub fn normalize_payload(body: Value) -> Vec<RawEvent> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut object) => match object.remove(WRAPPED_ROWS_FIELD) {
            Some(Value::Array(rows)) => rows,
            _ => {
                warn!("Response object has no '{}' array", WRAPPED_ROWS_FIELD);
                Vec::new()
            }
        },
        other => {
            warn!("Unexpected response shape: {}", shape_name(&other));
            Vec::new()
        }
    };

    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<RawEvent>(row) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping row {}: {}", index, e);
                None
            }
        })
        .collect()
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
