use super::selector::CountdownSnapshot;

/// Countdown card text, or a note when nothing is upcoming
pub fn render_countdown(snapshot: Option<&CountdownSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return format!("{}\n", t!("no_upcoming_event"));
    };

    let remaining = snapshot.remaining;
    format!(
        "{}\n{}\n{}\n",
        t!("next_event_heading"),
        snapshot.event.display_title(),
        t!(
            "countdown_remaining",
            days = remaining.days,
            hours = remaining.hours,
            minutes = remaining.minutes,
            seconds = remaining.seconds
        )
    )
}
