use crate::components::event_source::RawEvent;
use crate::error::{command_error, AppResult};
use std::fmt;
use std::str::FromStr;

/// Filter value meaning "do not restrict on this dimension"
pub const WILDCARD: &str = "all";

macro_rules! filter_value {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member in the order the view offers them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Text used for this member in the sheet
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = crate::error::Error;

            fn from_str(s: &str) -> AppResult<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(command_error(&format!(
                        "unknown {} '{}'",
                        stringify!($name).to_lowercase(),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

filter_value! {
    /// Kind of calendar entry
    Category {
        Exam => "exam",
        Holiday => "holiday",
        Study => "study",
        Event => "event",
        Registration => "registration",
    }
}

filter_value! {
    /// Group an entry is addressed to
    Audience {
        Students => "students",
        Parents => "parents",
        Teachers => "teachers",
    }
}

filter_value! {
    /// Part of the school year an entry belongs to
    Term {
        T1 => "T1",
        Break => "Break",
        T2 => "T2",
        Exams => "Exams",
        Summer => "Summer",
    }
}

/// Dimension of the filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Category,
    Audience,
    Term,
}

impl FromStr for Dimension {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "category" => Ok(Dimension::Category),
            "audience" => Ok(Dimension::Audience),
            "term" => Ok(Dimension::Term),
            other => Err(command_error(&format!("unknown filter '{}'", other))),
        }
    }
}

/// The three dropdowns of the view, `None` being the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: Option<Category>,
    pub audience: Option<Audience>,
    pub term: Option<Term>,
}

/// A change of one dimension of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Category(Option<Category>),
    Audience(Option<Audience>),
    Term(Option<Term>),
}

impl FilterChange {
    /// Parse a dimension name and a value, `all` meaning the wildcard
    pub fn parse(dimension: &str, value: &str) -> AppResult<Self> {
        let dimension = dimension.parse::<Dimension>()?;
        Ok(match dimension {
            Dimension::Category => FilterChange::Category(parse_choice(value)?),
            Dimension::Audience => FilterChange::Audience(parse_choice(value)?),
            Dimension::Term => FilterChange::Term(parse_choice(value)?),
        })
    }
}

fn parse_choice<T>(value: &str) -> AppResult<Option<T>>
where
    T: FromStr<Err = crate::error::Error>,
{
    if value == WILDCARD {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

impl FilterSelection {
    /// Apply a single-dimension change
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Category(category) => self.category = category,
            FilterChange::Audience(audience) => self.audience = audience,
            FilterChange::Term(term) => self.term = term,
        }
    }

    /// Whether every dimension is the wildcard
    pub fn is_wildcard(&self) -> bool {
        *self == FilterSelection::default()
    }

    /// Whether an event passes every gate
    pub fn matches(&self, event: &RawEvent) -> bool {
        event.is_published()
            && category_gate(self.category, event)
            && audience_gate(self.audience, event)
            && term_gate(self.term, event)
    }
}

fn category_gate(category: Option<Category>, event: &RawEvent) -> bool {
    match category {
        None => true,
        Some(category) => event.category.as_deref() == Some(category.as_str()),
    }
}

fn audience_gate(audience: Option<Audience>, event: &RawEvent) -> bool {
    match audience {
        None => true,
        Some(audience) => event.audience_members().contains(&audience.as_str()),
    }
}

fn term_gate(term: Option<Term>, event: &RawEvent) -> bool {
    match term {
        None => true,
        Some(term) => event.term.as_deref() == Some(term.as_str()),
    }
}

/// Events the view shows for a selection, in fetch order
pub fn visible<'a>(events: &'a [RawEvent], selection: &FilterSelection) -> Vec<&'a RawEvent> {
    events
        .iter()
        .filter(|event| selection.matches(event))
        .collect()
}
