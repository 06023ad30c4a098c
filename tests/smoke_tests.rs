mod common;

use common::{fetcher, school_year, FailingFetcher};
use lukkari::components::calendar::render::{render_listing, render_selection};
use lukkari::components::calendar::{Audience, Category, FilterChange, Term};
use lukkari::components::event_source::EventSourceHandle;
use lukkari::components::{Calendar, Component, ComponentManager, Countdown};
use lukkari::config::Config;
use lukkari::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;

fn test_config() -> Config {
    Config::new("https://sheetdb.io/api/v1/test")
}

/// Smoke test to verify that the config can be built
#[tokio::test]
async fn test_config_loads() {
    let config = test_config();
    assert!(config.sheet_url().is_ok());
    assert!(config.is_component_enabled("calendar"));
    assert!(config.is_component_enabled("countdown"));
}

/// The manager mounts every enabled component against one event source
#[tokio::test]
async fn test_component_manager_mounts_view() {
    let config = Arc::new(RwLock::new(test_config()));
    let mock = fetcher(school_year());
    let event_source = EventSourceHandle::new(mock.clone());

    let mut manager = ComponentManager::new(Arc::clone(&config));
    manager.register(Calendar::new()).await;
    manager.register(Countdown::new()).await;
    manager.init_all(event_source.clone()).await.unwrap();

    // Both components share the single fetch
    assert_eq!(mock.calls(), 1);

    let calendar = manager.get::<Calendar>("calendar").unwrap();
    assert_eq!(calendar.visible_events().await.len(), 5);
    assert!(manager.get::<Countdown>("countdown").is_some());
    assert!(manager.get::<Countdown>("calendar").is_none());

    manager.shutdown_all().await.unwrap();
    event_source.shutdown().await.unwrap();
}

/// Disabled components are never registered
#[tokio::test]
async fn test_disabled_component_is_skipped() {
    let mut config = test_config();
    config.merge_components("countdown = false").unwrap();
    let config = Arc::new(RwLock::new(config));

    let mut manager = ComponentManager::new(config);
    manager.register(Calendar::new()).await;
    manager.register(Countdown::new()).await;

    assert!(manager.get_component_by_name("calendar").is_some());
    assert!(manager.get_component_by_name("countdown").is_none());
}

/// A component that cannot mount is reported once the others are up
#[tokio::test]
async fn test_failed_component_init_is_reported() {
    let mut config = test_config();
    config.timezone = Some("Mars/Olympus".to_string());
    let config = Arc::new(RwLock::new(config));
    let event_source = EventSourceHandle::new(fetcher(school_year()));

    let mut manager = ComponentManager::new(config);
    manager.register(Calendar::new()).await;
    manager.register(Countdown::new()).await;

    let err = manager.init_all(event_source.clone()).await.unwrap_err();
    assert!(matches!(&err, Error::Component(message) if message.contains("countdown")));

    // The calendar still mounted
    let calendar = manager.get::<Calendar>("calendar").unwrap();
    assert_eq!(calendar.visible_events().await.len(), 5);

    manager.shutdown_all().await.unwrap();
    event_source.shutdown().await.unwrap();
}

/// Each filter change re-derives the visible list
#[tokio::test]
async fn test_calendar_filter_changes() {
    let config = Arc::new(RwLock::new(test_config()));
    let event_source = EventSourceHandle::new(fetcher(school_year()));
    let calendar = Calendar::new();
    calendar.init(config, event_source).await.unwrap();

    let selection = calendar.apply(FilterChange::Audience(Some(Audience::Parents))).await;
    assert_eq!(selection.audience, Some(Audience::Parents));
    let ids: Vec<String> = calendar.visible_events().await.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["1", "4"]);

    calendar.apply(FilterChange::Term(Some(Term::T2))).await;
    let ids: Vec<String> = calendar.visible_events().await.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["4"]);

    calendar.apply(FilterChange::Category(Some(Category::Exam))).await;
    assert!(calendar.visible_events().await.is_empty());

    let selection = calendar.reset().await;
    assert!(selection.is_wildcard());
    assert_eq!(calendar.visible_events().await.len(), 5);
}

/// Widget input follows the visible list
#[tokio::test]
async fn test_widget_export() {
    let config = Arc::new(RwLock::new(test_config()));
    let event_source = EventSourceHandle::new(fetcher(school_year()));
    let calendar = Calendar::new();
    calendar.init(config, event_source).await.unwrap();

    calendar.apply(FilterChange::Category(Some(Category::Study))).await;
    let widget = calendar.widget_events().await;

    assert_eq!(widget.len(), 1);
    assert_eq!(widget[0].id, "1");
    assert_eq!(widget[0].title, "🏫 First day of school");
    assert!(widget[0].all_day);
    assert_eq!(widget[0].end, None);

    calendar.reset().await;
    let widget = calendar.widget_events().await;
    let exams = widget.iter().find(|w| w.id == "2").unwrap();
    assert_eq!(exams.end.as_deref(), Some("2025-12-20"));
}

/// An unreachable endpoint still mounts an empty view
#[tokio::test]
async fn test_unreachable_endpoint_mounts_empty_view() {
    let config = Arc::new(RwLock::new(test_config()));
    let event_source = EventSourceHandle::new(Arc::new(FailingFetcher::default()));

    let calendar = Calendar::new();
    let countdown = Countdown::new();
    calendar.init(Arc::clone(&config), event_source.clone()).await.unwrap();
    countdown.init(config, event_source).await.unwrap();

    assert!(calendar.visible_events().await.is_empty());
    assert!(countdown.current().is_none());

    let listing = calendar.render().await;
    assert_eq!(listing.lines().count(), 2);

    countdown.shutdown().await.unwrap();
}

/// The listing groups rows by month and keeps undated rows last
#[test]
fn test_render_listing_groups_by_month() {
    let mut events = school_year();
    events.push(common::event("7", "Graduation", "June, TBD"));
    let refs: Vec<_> = events.iter().filter(|e| e.is_published()).collect();

    let listing = render_listing(&refs);
    let september = listing.find("── 2025-09 ──").unwrap();
    let december = listing.find("── 2025-12 ──").unwrap();
    let graduation = listing.find("Graduation").unwrap();
    assert!(september < december);
    assert!(december < graduation);
    assert!(!listing.contains("Draft: registration"));
}

#[test]
fn test_render_selection_lists_values() {
    let text = render_selection(&Default::default());
    assert!(text.contains("exam, holiday, study, event, registration"));
    assert!(text.contains("students, parents, teachers"));
    assert!(text.contains("T1, Break, T2, Exams, Summer"));
}
