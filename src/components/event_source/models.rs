use crate::utils::time::wall_clock_instant;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Separator used by the sheet to join audience members
pub const AUDIENCE_SEPARATOR: char = '|';

/// One calendar row as served by the spreadsheet API.
///
/// Every column arrives as text. Empty cells are read as absent, and numbers or
/// booleans are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "required_text")]
    pub id: String,
    #[serde(default, deserialize_with = "required_text")]
    pub title: String,
    /// Arabic title column, used when `title` is empty
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "required_text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub all_day: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub audience: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub term: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub color_hex: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub icon_emoji: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub published: Option<String>,
}

impl RawEvent {
    /// Whether the row may be shown or counted down to.
    ///
    /// Absent means published; otherwise only a case-insensitive `TRUE` passes.
    pub fn is_published(&self) -> bool {
        self.published
            .as_deref()
            .map_or(true, |flag| flag.to_uppercase() == "TRUE")
    }

    /// Audience members the row is addressed to, empty when the cell is absent
    pub fn audience_members(&self) -> Vec<&str> {
        self.audience
            .as_deref()
            .map(|audience| audience.split(AUDIENCE_SEPARATOR).collect())
            .unwrap_or_default()
    }

    /// Title of the row: `title` when present, else `title_ar`
    pub fn title_text(&self) -> &str {
        match self.title_ar.as_deref() {
            Some(title_ar) if self.title.is_empty() => title_ar,
            _ => &self.title,
        }
    }

    /// Title prefixed with the icon, if the row has one
    pub fn display_title(&self) -> String {
        match &self.icon_emoji {
            Some(icon) => format!("{} {}", icon, self.title_text()),
            None => self.title_text().to_string(),
        }
    }

    /// Start of the event as local wall-clock time, midnight for all-day rows.
    ///
    /// `None` when the date or a present time does not parse.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        wall_clock_instant(&self.start_date, self.start_time.as_deref())
    }
}

/// Convert a JSON cell into text, treating null and empty strings as absent
fn cell_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(cell_text(Option::<Value>::deserialize(deserializer)?))
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(cell_text(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}
