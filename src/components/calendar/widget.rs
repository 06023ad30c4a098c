use crate::components::event_source::RawEvent;
use serde::Serialize;

/// Event input for a month-grid calendar widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub extended_props: ExtendedProps,
}

/// Payload the widget shows on hover or click
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedProps {
    pub description: String,
}

impl From<&RawEvent> for WidgetEvent {
    fn from(event: &RawEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.display_title(),
            start: event.start_date.clone(),
            end: event.end_date.clone(),
            all_day: true,
            background_color: event.color_hex.clone(),
            extended_props: ExtendedProps {
                description: event.description.clone().unwrap_or_default(),
            },
        }
    }
}
