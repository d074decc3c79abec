use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Sparkline, Tabs,
};

use crate::app::AppState;
use crate::handlers::filtered_workouts;
use crate::session::Phase;
use crate::style;
use crate::types::*;
use crate::utils::*;

fn dim() -> Style {
    Style::default().fg(style::GRAY_DIM)
}

fn highlight() -> Style {
    Style::default()
        .fg(style::ORANGE)
        .add_modifier(Modifier::BOLD)
}

// ── Main UI ──────────────────────────────────────────────────────────────

/// Render the entire UI for the current screen.
pub fn ui(f: &mut ratatui::Frame, state: &AppState) {
    match state.mode {
        Mode::Login => render_login(f, state),
        Mode::Browse => render_browse(f, state),
        Mode::Detail => render_detail(f, state),
    }
}

// ── Login ────────────────────────────────────────────────────────────────

fn render_login(f: &mut ratatui::Frame, state: &AppState) {
    let area = centered_rect_fixed_height(50, 12, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("MOVIT")
        .border_style(Style::default().fg(style::ORANGE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tagline
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Email
            Constraint::Length(1), // Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Status
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Help
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Track. Move. Achieve.")
            .style(dim())
            .alignment(Alignment::Center),
        layout[0],
    );

    render_login_field(
        f,
        layout[2],
        "Email: ",
        &state.login.email.value,
        state.login.field == LoginField::Email && !state.login.is_pending(),
    );
    render_login_field(
        f,
        layout[3],
        "Password: ",
        &masked(state.login.password.value.chars().count()),
        state.login.field == LoginField::Password && !state.login.is_pending(),
    );

    let status = if state.login.is_pending() {
        Paragraph::new("Signing in...")
            .style(highlight())
            .alignment(Alignment::Center)
    } else {
        Paragraph::new("[ Sign In ]")
            .style(highlight())
            .alignment(Alignment::Center)
    };
    f.render_widget(status, layout[5]);

    f.render_widget(
        Paragraph::new("Tab: switch field • Enter: sign in • Ctrl-C: quit").style(dim()),
        layout[7],
    );
}

fn render_login_field(f: &mut ratatui::Frame, area: Rect, label: &str, value: &str, active: bool) {
    let label_style = if active {
        Style::default().fg(style::ORANGE)
    } else {
        Style::default()
    };
    let cursor = if active { "▏" } else { "" };
    let line = Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(value.to_string()),
        Span::styled(cursor, label_style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

// ── Browse (tabbed screens) ──────────────────────────────────────────────

fn render_browse(f: &mut ratatui::Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Tab bar
        ])
        .split(f.area());

    match state.active_tab {
        Tab::Home => render_home(f, chunks[0], state),
        Tab::Workouts => render_workouts(f, chunks[0], state),
        Tab::Profile => render_profile(f, chunks[0], state),
    }

    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.label())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.active_tab.index())
        .highlight_style(highlight())
        .divider("•");
    f.render_widget(tabs, chunks[1]);
}

// ── Home dashboard ───────────────────────────────────────────────────────

fn render_home(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Streak banner
            Constraint::Length(3), // Daily stat gauges
            Constraint::Length(4), // Weekly progress
            Constraint::Min(3),    // Today's workouts
            Constraint::Length(1), // Hint
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(greeting(), dim())),
        Line::from(vec![
            Span::styled(
                state.profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {}", today_label()), dim()),
        ]),
    ]);
    f.render_widget(header, layout[0]);

    let streak = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} Days 🔥", state.profile.streak_days),
            highlight(),
        ),
        Span::styled(
            format!(
                "  ·  Best: {} days  ·  Keep going!",
                state.profile.best_streak_days
            ),
            dim(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Current Streak")
            .border_style(Style::default().fg(style::ORANGE)),
    );
    f.render_widget(streak, layout[1]);

    render_daily_stats(f, layout[2], &state.stats);
    render_weekly_progress(f, layout[3], &state.stats);

    let workouts: Vec<&WorkoutDefinition> = state.catalog.todays().iter().collect();
    render_workout_list(
        f,
        layout[4],
        "Today's Workouts",
        &workouts,
        state.home_selected,
    );

    f.render_widget(
        Paragraph::new("↑↓ select • Enter open • Tab next tab • q quit").style(dim()),
        layout[5],
    );
}

fn render_daily_stats(f: &mut ratatui::Frame, area: Rect, stats: &DailyStats) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let gauges = [
        ("Steps", stats.steps, stats.steps_goal, style::BLUE),
        ("Calories", stats.calories, stats.calories_goal, style::ORANGE),
        ("Minutes", stats.active_minutes, stats.minutes_goal, style::PURPLE),
    ];
    for (i, (title, value, goal, color)) in gauges.iter().enumerate() {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(*title))
            .gauge_style(Style::default().fg(*color))
            .ratio(progress_ratio(*value, *goal))
            .label(value.to_string());
        f.render_widget(gauge, cells[i]);
    }
}

fn render_weekly_progress(f: &mut ratatui::Frame, area: Rect, stats: &DailyStats) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        "Weekly Progress · {}/7 days",
        stats.days_active_this_week
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let week: Vec<u64> = stats.week.iter().map(|v| u64::from(*v)).collect();
    let spark = Sparkline::default()
        .data(&week)
        .max(100)
        .style(Style::default().fg(style::ORANGE));
    f.render_widget(spark, rows[0]);

    f.render_widget(Paragraph::new("MTWTFSS").style(dim()), rows[1]);
}

// ── Workouts tab ─────────────────────────────────────────────────────────

fn render_workouts(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let mut constraints = vec![
        Constraint::Length(2), // Header
        Constraint::Length(1), // Filter pills
    ];
    if state.searching {
        constraints.push(Constraint::Length(1)); // Search input
    }
    constraints.push(Constraint::Min(3)); // List
    constraints.push(Constraint::Length(1)); // Hint
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Workouts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Choose your workout", dim())),
    ]);
    f.render_widget(header, layout[0]);

    let filters = state.category_filters();
    let mut spans: Vec<Span> = Vec::new();
    for (i, label) in filters.iter().enumerate() {
        let style = if i == state.category_index {
            highlight()
        } else {
            dim()
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), layout[1]);

    let mut next = 2;
    if state.searching {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("> ", highlight()),
                Span::raw(state.search_input.value.clone()),
            ])),
            layout[next],
        );
        next += 1;
    }

    let workouts = filtered_workouts(state);
    render_workout_list(f, layout[next], "All Workouts", &workouts, state.workouts_selected);

    let hint = if state.searching {
        "type to search • ↑↓ select • Enter open • Esc cancel"
    } else {
        "←→ filter • ↑↓ select • Enter open • / search • Tab next tab"
    };
    f.render_widget(Paragraph::new(hint).style(dim()), layout[next + 1]);
}

fn render_workout_list(
    f: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    workouts: &[&WorkoutDefinition],
    selected: usize,
) {
    let items: Vec<ListItem> = workouts
        .iter()
        .map(|w| {
            let title_line = Line::from(vec![
                Span::raw(format!("{} {}", w.icon, w.name)),
                Span::styled(
                    format!("  [{}]", w.difficulty.label()),
                    Style::default().fg(style::difficulty_color(w.difficulty)),
                ),
            ]);
            let info_line = Line::from(Span::styled(
                format!(
                    "   ⏱ {} · ⚡ {} kcal · {}",
                    w.target_duration, w.calories, w.category
                ),
                dim(),
            ));
            ListItem::new(vec![title_line, info_line])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(highlight());

    let mut stateful = ListState::default();
    if !workouts.is_empty() {
        stateful.select(Some(selected.min(workouts.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut stateful);
}

// ── Profile ──────────────────────────────────────────────────────────────

fn render_profile(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(6), // User card
            Constraint::Length(5), // Menu
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Hint
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Profile",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Movit v0.1.0 · Made for athletes", dim())),
    ]);
    f.render_widget(header, layout[0]);

    let profile = &state.profile;
    let card = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {}", profile.plan), highlight()),
        ]),
        Line::from(Span::styled(profile.email.clone(), dim())),
        Line::from(format!(
            "{} Workouts  ·  {}d Streak  ·  {} This Month",
            profile.total_workouts, profile.streak_days, profile.workouts_this_month
        )),
        Line::from(Span::styled(
            format!("Goal: {}", profile.fitness_goal),
            dim(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, layout[1]);

    let menu_items = vec![
        ListItem::new(format!(
            "Notifications  [{}]",
            if profile.notifications { "On" } else { "Off" }
        )),
        ListItem::new(format!(
            "Weekly Target  {} days/week  ◄ ►",
            profile.weekly_target
        )),
        ListItem::new(Line::from(Span::styled(
            "Sign Out",
            Style::default().fg(style::RED),
        ))),
    ];
    let menu = List::new(menu_items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(highlight());
    let mut stateful = ListState::default();
    stateful.select(Some(state.profile_row.index()));
    f.render_stateful_widget(menu, layout[2], &mut stateful);

    f.render_widget(
        Paragraph::new("↑↓ select • Enter/Space activate • ←→ adjust target • Tab next tab")
            .style(dim()),
        layout[4],
    );
}

// ── Workout detail ───────────────────────────────────────────────────────

fn render_detail(f: &mut ratatui::Frame, state: &AppState) {
    let Some(detail) = &state.detail else {
        return;
    };
    let workout = &detail.workout;
    let phase = detail.session.phase();

    let banner_height = if phase == Phase::Idle { 0 } else { 4 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Hero
            Constraint::Length(3),             // Stats row
            Constraint::Length(banner_height), // Timer / completion banner
            Constraint::Min(3),                // Exercises
            Constraint::Length(1),             // Hint
        ])
        .split(f.area());

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(workout.category.to_uppercase(), dim())),
        Line::from(vec![
            Span::styled(
                format!("{} {}", workout.icon, workout.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", workout.difficulty.label()),
                Style::default().fg(style::difficulty_color(workout.difficulty)),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(hero, layout[0]);

    render_detail_stats(f, layout[1], workout);

    match phase {
        Phase::Idle => {}
        Phase::Active => {
            let timer = Paragraph::new(Line::from(Span::styled(
                detail.session.format_elapsed(),
                highlight(),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Elapsed Time")
                    .border_style(Style::default().fg(style::ORANGE)),
            );
            f.render_widget(timer, layout[2]);
        }
        Phase::Completed => {
            let banner = Paragraph::new(Line::from(format!(
                "You crushed it! {} total",
                detail.session.format_elapsed()
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Workout Complete! 🎉")
                    .border_style(Style::default().fg(style::GREEN)),
            );
            f.render_widget(banner, layout[2]);
        }
    }

    render_exercises(f, layout[3], detail);

    let hint = match phase {
        Phase::Idle => "s start workout • Enter/Space toggle • ↑↓ move • Esc back",
        Phase::Active => "c complete workout • Enter/Space toggle • ↑↓ move • Esc back",
        Phase::Completed => "Enter back to dashboard • Space toggle • Esc back",
    };
    f.render_widget(Paragraph::new(hint).style(dim()), layout[4]);
}

fn render_detail_stats(f: &mut ratatui::Frame, area: Rect, workout: &WorkoutDefinition) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats = [
        ("Duration", workout.target_duration.clone(), style::BLUE),
        ("Calories", format!("{} kcal", workout.calories), style::ORANGE),
        (
            "Level",
            workout.difficulty.label().to_string(),
            style::difficulty_color(workout.difficulty),
        ),
    ];
    for (i, (title, value, color)) in stats.iter().enumerate() {
        let cell = Paragraph::new(Line::from(Span::styled(
            value.clone(),
            Style::default().fg(*color),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(*title));
        f.render_widget(cell, cells[i]);
    }
}

fn render_exercises(f: &mut ratatui::Frame, area: Rect, detail: &crate::app::DetailState) {
    let session = &detail.session;
    let items: Vec<ListItem> = detail
        .workout
        .exercises
        .iter()
        .enumerate()
        .map(|(idx, ex)| {
            let done = session.is_exercise_done(idx);
            let checkbox = if done {
                Span::styled("[x] ", Style::default().fg(style::ORANGE))
            } else {
                Span::raw("[ ] ")
            };
            let name_style = if done {
                Style::default()
                    .fg(style::GRAY_DIM)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                checkbox,
                Span::styled(ex.name.clone(), name_style),
                Span::styled(format!("  {}", ex.detail_label()), dim()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!(
        "Exercises ({}/{})",
        session.completed_count(),
        detail.workout.exercises.len()
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut stateful = ListState::default();
    if !detail.workout.exercises.is_empty() {
        stateful.select(Some(
            detail.selected.min(detail.workout.exercises.len() - 1),
        ));
    }
    f.render_stateful_widget(list, area, &mut stateful);
}
