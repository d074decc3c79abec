use chrono::{Local, Timelike};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical_pad = r.height.saturating_sub(height) / 2;

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_pad),
            Constraint::Length(height),
            Constraint::Length(vertical_pad),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning 👋",
        12..=17 => "Good Afternoon 👋",
        _ => "Good Evening 👋",
    }
}

pub fn today_label() -> String {
    Local::now().format("%b %-d").to_string()
}

pub fn progress_ratio(value: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(goal)).clamp(0.0, 1.0)
}

pub fn masked(len: usize) -> String {
    "•".repeat(len)
}
