use super::CommandContext;
use lukkari::components::calendar::render::render_selection;
use lukkari::components::calendar::FilterChange;
use lukkari::components::countdown::display::render_countdown;
use lukkari::error::AppResult;

fn disabled(name: &str) -> String {
    format!("{}\n", t!("component_disabled", name = name))
}

/// Change one filter and show the re-derived calendar
pub async fn filter(ctx: &CommandContext, change: FilterChange) -> AppResult<String> {
    let Some(calendar) = ctx.calendar() else {
        return Ok(disabled("calendar"));
    };

    let selection = calendar.apply(change).await;
    Ok(format!("{}\n{}", render_selection(&selection), calendar.render().await))
}

/// Clear every filter and show the calendar
pub async fn reset(ctx: &CommandContext) -> AppResult<String> {
    let Some(calendar) = ctx.calendar() else {
        return Ok(disabled("calendar"));
    };

    calendar.reset().await;
    Ok(calendar.render().await)
}

/// Show the filtered calendar
pub async fn list(ctx: &CommandContext) -> AppResult<String> {
    match ctx.calendar() {
        Some(calendar) => Ok(calendar.render().await),
        None => Ok(disabled("calendar")),
    }
}

/// Print the filtered events as calendar widget input
pub async fn export(ctx: &CommandContext) -> AppResult<String> {
    let Some(calendar) = ctx.calendar() else {
        return Ok(disabled("calendar"));
    };

    let events = calendar.widget_events().await;
    Ok(format!("{}\n", serde_json::to_string_pretty(&events)?))
}

/// Show the countdown to the next event
pub async fn next(ctx: &CommandContext) -> AppResult<String> {
    match ctx.countdown() {
        Some(countdown) => Ok(render_countdown(countdown.current().as_ref())),
        None => Ok(disabled("countdown")),
    }
}

/// Show the current filters
pub async fn filters(ctx: &CommandContext) -> AppResult<String> {
    match ctx.calendar() {
        Some(calendar) => Ok(render_selection(&calendar.selection().await)),
        None => Ok(disabled("calendar")),
    }
}
