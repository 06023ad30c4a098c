use super::filter::{Audience, Category, FilterSelection, Term};
use crate::components::event_source::RawEvent;
use crate::utils::time::{month_key, parse_date};
use std::collections::BTreeMap;

/// Localized label of a category choice
pub fn category_label(category: Option<Category>) -> String {
    match category {
        None => t!("category.all"),
        Some(Category::Exam) => t!("category.exam"),
        Some(Category::Holiday) => t!("category.holiday"),
        Some(Category::Study) => t!("category.study"),
        Some(Category::Event) => t!("category.event"),
        Some(Category::Registration) => t!("category.registration"),
    }
    .to_string()
}

/// Localized label of an audience choice
pub fn audience_label(audience: Option<Audience>) -> String {
    match audience {
        None => t!("audience.all"),
        Some(Audience::Students) => t!("audience.students"),
        Some(Audience::Parents) => t!("audience.parents"),
        Some(Audience::Teachers) => t!("audience.teachers"),
    }
    .to_string()
}

/// Localized label of a term choice
pub fn term_label(term: Option<Term>) -> String {
    match term {
        None => t!("term.all"),
        Some(Term::T1) => t!("term.T1"),
        Some(Term::Break) => t!("term.Break"),
        Some(Term::T2) => t!("term.T2"),
        Some(Term::Exams) => t!("term.Exams"),
        Some(Term::Summer) => t!("term.Summer"),
    }
    .to_string()
}

/// Text listing of events grouped by the month they start in.
///
/// Months are in calendar order; within a month the given order is kept.
/// Rows whose start date does not parse are listed last.
pub fn render_listing(events: &[&RawEvent]) -> String {
    let mut output = format!("{}\n", t!("calendar_title"));

    if events.is_empty() {
        output.push_str(&format!("  {}\n", t!("no_events")));
        return output;
    }

    let mut months: BTreeMap<String, Vec<&RawEvent>> = BTreeMap::new();
    let mut undated = Vec::new();
    for event in events {
        match parse_date(&event.start_date) {
            Some(date) => months.entry(month_key(date)).or_default().push(*event),
            None => undated.push(*event),
        }
    }

    for (month, month_events) in &months {
        output.push_str(&format!("\n── {} ──\n", month));
        for event in month_events {
            output.push_str(&render_line(event));
        }
    }

    if !undated.is_empty() {
        output.push_str(&format!("\n── {} ──\n", t!("undated_heading")));
        for event in undated {
            output.push_str(&render_line(event));
        }
    }

    output
}

fn render_line(event: &RawEvent) -> String {
    let mut when = event.start_date.clone();
    if let Some(end) = &event.end_date {
        when.push_str(&format!(" → {}", end));
    }
    if let Some(start_time) = &event.start_time {
        when.push_str(&format!(" {}", start_time));
        if let Some(end_time) = &event.end_time {
            when.push_str(&format!("–{}", end_time));
        }
    }

    let mut line = format!("  {}  {}", when, event.display_title());
    if let Some(category) = event
        .category
        .as_deref()
        .and_then(|c| c.parse::<Category>().ok())
    {
        line.push_str(&format!("  [{}]", category_label(Some(category))));
    }
    line.push('\n');
    line
}

/// Current selection and the values each dimension accepts
pub fn render_selection(selection: &FilterSelection) -> String {
    let categories: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let audiences: Vec<&str> = Audience::ALL.iter().map(Audience::as_str).collect();
    let terms: Vec<&str> = Term::ALL.iter().map(Term::as_str).collect();

    format!(
        "{}\n  category: {} (all, {})\n  audience: {} (all, {})\n  term: {} (all, {})\n",
        t!("filters_heading"),
        category_label(selection.category),
        categories.join(", "),
        audience_label(selection.audience),
        audiences.join(", "),
        term_label(selection.term),
        terms.join(", "),
    )
}

/// Summary of the available commands
pub fn render_help() -> String {
    [
        t!("help.heading"),
        t!("help.filter"),
        t!("help.reset"),
        t!("help.list"),
        t!("help.export"),
        t!("help.next"),
        t!("help.filters"),
        t!("help.quit"),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}
