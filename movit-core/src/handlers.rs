use chrono::Utc;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::app::AppState;
use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::session::Phase;
use crate::types::*;

pub fn handle_login_key(state: &mut AppState, key: &AppKeyEvent) {
    // Ignore input while the fake sign-in request is in flight.
    if state.login.is_pending() {
        return;
    }

    let field = match state.login.field {
        LoginField::Email => &mut state.login.email,
        LoginField::Password => &mut state.login.password,
    };
    if field.handle_key(key) {
        return;
    }

    match key.code {
        AppKeyCode::Tab | AppKeyCode::BackTab | AppKeyCode::Up | AppKeyCode::Down => {
            state.login.field = match state.login.field {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }
        AppKeyCode::Enter => state.login.submit(Utc::now()),
        _ => {}
    }
}

pub fn handle_browse_key(state: &mut AppState, key: &AppKeyEvent) {
    if state.active_tab == Tab::Workouts && state.searching {
        handle_workout_search_key(state, key);
        return;
    }

    match key.code {
        AppKeyCode::Tab => {
            state.active_tab = state.active_tab.next();
            return;
        }
        AppKeyCode::BackTab => {
            state.active_tab = state.active_tab.prev();
            return;
        }
        _ => {}
    }

    match state.active_tab {
        Tab::Home => handle_home_key(state, key),
        Tab::Workouts => handle_workouts_key(state, key),
        Tab::Profile => handle_profile_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: &AppKeyEvent) {
    match key.code {
        AppKeyCode::Up | AppKeyCode::Char('k') => {
            state.home_selected = state.home_selected.saturating_sub(1);
        }
        AppKeyCode::Down | AppKeyCode::Char('j') => {
            let max_idx = state.catalog.todays().len().saturating_sub(1);
            state.home_selected = (state.home_selected + 1).min(max_idx);
        }
        AppKeyCode::Enter => {
            let id = state
                .catalog
                .todays()
                .get(state.home_selected)
                .map(|w| w.id);
            if let Some(id) = id {
                let _ = state.open_detail(id);
            }
        }
        _ => {}
    }
}

fn handle_workouts_key(state: &mut AppState, key: &AppKeyEvent) {
    match key.code {
        AppKeyCode::Char('/') => {
            state.searching = true;
            state.search_input.clear();
            state.workouts_selected = 0;
        }
        AppKeyCode::Left | AppKeyCode::Char('h') => {
            let len = state.category_filters().len();
            state.category_index = (state.category_index + len - 1) % len;
            state.workouts_selected = 0;
        }
        AppKeyCode::Right | AppKeyCode::Char('l') => {
            let len = state.category_filters().len();
            state.category_index = (state.category_index + 1) % len;
            state.workouts_selected = 0;
        }
        AppKeyCode::Up | AppKeyCode::Char('k') => {
            state.workouts_selected = state.workouts_selected.saturating_sub(1);
        }
        AppKeyCode::Down | AppKeyCode::Char('j') => {
            let max_idx = filtered_workouts(state).len().saturating_sub(1);
            state.workouts_selected = (state.workouts_selected + 1).min(max_idx);
        }
        AppKeyCode::Enter => open_selected_workout(state),
        _ => {}
    }
}

fn open_selected_workout(state: &mut AppState) {
    let id = filtered_workouts(state)
        .get(state.workouts_selected)
        .map(|w| w.id);
    if let Some(id) = id {
        let _ = state.open_detail(id);
    }
}

fn handle_workout_search_key(state: &mut AppState, key: &AppKeyEvent) {
    if state.search_input.handle_key(key) {
        state.workouts_selected = 0;
        return;
    }
    match key.code {
        AppKeyCode::Esc => {
            state.searching = false;
            state.search_input.clear();
            state.workouts_selected = 0;
        }
        AppKeyCode::Enter => {
            open_selected_workout(state);
            state.searching = false;
        }
        AppKeyCode::Up => {
            state.workouts_selected = state.workouts_selected.saturating_sub(1);
        }
        AppKeyCode::Down => {
            let max_idx = filtered_workouts(state).len().saturating_sub(1);
            state.workouts_selected = (state.workouts_selected + 1).min(max_idx);
        }
        _ => {}
    }
}

fn handle_profile_key(state: &mut AppState, key: &AppKeyEvent) {
    match key.code {
        AppKeyCode::Up | AppKeyCode::Char('k') => {
            state.profile_row = state.profile_row.prev();
        }
        AppKeyCode::Down | AppKeyCode::Char('j') => {
            state.profile_row = state.profile_row.next();
        }
        AppKeyCode::Left | AppKeyCode::Char('h') => {
            if state.profile_row == ProfileRow::WeeklyTarget {
                state.profile.weekly_target = state.profile.weekly_target.saturating_sub(1).max(3);
            }
        }
        AppKeyCode::Right | AppKeyCode::Char('l') => {
            if state.profile_row == ProfileRow::WeeklyTarget {
                state.profile.weekly_target = (state.profile.weekly_target + 1).min(7);
            }
        }
        AppKeyCode::Char('n') => {
            state.profile.notifications = !state.profile.notifications;
        }
        AppKeyCode::Enter | AppKeyCode::Char(' ') => match state.profile_row {
            ProfileRow::Notifications => {
                state.profile.notifications = !state.profile.notifications;
            }
            ProfileRow::WeeklyTarget => {
                state.profile.weekly_target = if state.profile.weekly_target >= 7 {
                    3
                } else {
                    state.profile.weekly_target + 1
                };
            }
            ProfileRow::SignOut => state.sign_out(),
        },
        _ => {}
    }
}

pub fn handle_detail_key(state: &mut AppState, key: &AppKeyEvent) {
    if matches!(key.code, AppKeyCode::Esc | AppKeyCode::Char('b')) {
        state.close_detail();
        return;
    }

    let Some(detail) = state.detail.as_mut() else {
        state.mode = Mode::Browse;
        return;
    };
    let exercise_count = detail.workout.exercises.len();

    let mut back = false;
    match key.code {
        AppKeyCode::Up | AppKeyCode::Char('k') => {
            detail.selected = detail.selected.saturating_sub(1);
        }
        AppKeyCode::Down | AppKeyCode::Char('j') => {
            detail.selected = (detail.selected + 1).min(exercise_count.saturating_sub(1));
        }
        AppKeyCode::Char('s') => detail.start_at(Utc::now()),
        AppKeyCode::Char('c') => detail.complete(),
        // Enter leaves a finished workout; Space still toggles the checklist
        // in every phase.
        AppKeyCode::Enter if detail.session.phase() == Phase::Completed => {
            back = true;
        }
        AppKeyCode::Enter | AppKeyCode::Char(' ') => {
            let _ = detail.session.toggle_exercise(detail.selected);
        }
        _ => {}
    }
    if back {
        state.close_detail();
    }
}

/// Workouts visible on the Workouts tab: category pill filter plus the
/// fuzzy search query, best matches first.
pub fn filtered_workouts(state: &AppState) -> Vec<&WorkoutDefinition> {
    let filters = state.category_filters();
    let category = filters
        .get(state.category_index)
        .cloned()
        .unwrap_or_else(|| "All".to_string());
    let query = state.search_input.value.trim();
    let matcher = SkimMatcherV2::default();

    let mut scored: Vec<(i64, &WorkoutDefinition)> = state
        .catalog
        .all()
        .iter()
        .filter(|w| category == "All" || w.category == category)
        .filter_map(|w| {
            if query.is_empty() {
                Some((0, w))
            } else {
                matcher.fuzzy_match(&w.name, query).map(|score| (score, w))
            }
        })
        .collect();

    if !query.is_empty() {
        scored.sort_by(|a, b| b.0.cmp(&a.0));
    }
    scored.into_iter().map(|(_, w)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: AppKeyCode) -> AppKeyEvent {
        AppKeyEvent::plain(code)
    }

    fn on_workouts_tab() -> AppState {
        let mut state = AppState::new(Profile::sample());
        state.mode = Mode::Browse;
        state.active_tab = Tab::Workouts;
        state
    }

    #[test]
    fn category_pills_filter_the_list() {
        let mut state = on_workouts_tab();
        assert_eq!(filtered_workouts(&state).len(), 6);

        // "All" -> "Running"
        handle_browse_key(&mut state, &key(AppKeyCode::Right));
        let names: Vec<&str> = filtered_workouts(&state)
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(names, vec!["Morning Run"]);

        // Wraps backwards from "All" to the last category.
        handle_browse_key(&mut state, &key(AppKeyCode::Left));
        handle_browse_key(&mut state, &key(AppKeyCode::Left));
        let names: Vec<&str> = filtered_workouts(&state)
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(names, vec!["HIIT Cardio"]);
    }

    #[test]
    fn fuzzy_search_narrows_and_ranks() {
        let mut state = on_workouts_tab();
        handle_browse_key(&mut state, &key(AppKeyCode::Char('/')));
        assert!(state.searching);

        for c in "yoga".chars() {
            handle_browse_key(&mut state, &key(AppKeyCode::Char(c)));
        }
        let names: Vec<&str> = filtered_workouts(&state)
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(names, vec!["Evening Yoga"]);

        handle_browse_key(&mut state, &key(AppKeyCode::Esc));
        assert!(!state.searching);
        assert_eq!(filtered_workouts(&state).len(), 6);
    }

    #[test]
    fn enter_opens_the_selected_workout() {
        let mut state = on_workouts_tab();
        handle_browse_key(&mut state, &key(AppKeyCode::Down));
        handle_browse_key(&mut state, &key(AppKeyCode::Enter));
        assert_eq!(state.mode, Mode::Detail);
        assert_eq!(state.detail.as_ref().unwrap().workout.id, 2);
    }

    #[test]
    fn enter_opens_a_search_match() {
        let mut state = on_workouts_tab();
        handle_browse_key(&mut state, &key(AppKeyCode::Char('/')));
        for c in "yoga".chars() {
            handle_browse_key(&mut state, &key(AppKeyCode::Char(c)));
        }
        handle_browse_key(&mut state, &key(AppKeyCode::Enter));
        assert_eq!(state.mode, Mode::Detail);
        assert_eq!(state.detail.as_ref().unwrap().workout.name, "Evening Yoga");
        assert!(!state.searching);
    }

    #[test]
    fn space_still_toggles_after_completion() {
        let mut state = AppState::new(Profile::sample());
        state.mode = Mode::Browse;
        state.open_detail(1).unwrap();
        {
            let detail = state.detail.as_mut().unwrap();
            detail.start_at(Utc::now());
            detail.complete();
            assert_eq!(detail.session.phase(), Phase::Completed);
        }

        handle_detail_key(&mut state, &key(AppKeyCode::Char(' ')));
        let detail = state.detail.as_ref().unwrap();
        assert!(detail.session.completed_exercises().contains(&0));
        assert_eq!(detail.session.phase(), Phase::Completed);

        handle_detail_key(&mut state, &key(AppKeyCode::Enter));
        assert_eq!(state.mode, Mode::Browse);
        assert!(state.detail.is_none());
    }

    #[test]
    fn weekly_target_stays_between_3_and_7() {
        let mut state = AppState::new(Profile::sample());
        state.mode = Mode::Browse;
        state.active_tab = Tab::Profile;
        state.profile_row = ProfileRow::WeeklyTarget;

        for _ in 0..10 {
            handle_browse_key(&mut state, &key(AppKeyCode::Left));
        }
        assert_eq!(state.profile.weekly_target, 3);

        for _ in 0..10 {
            handle_browse_key(&mut state, &key(AppKeyCode::Right));
        }
        assert_eq!(state.profile.weekly_target, 7);
    }

    #[test]
    fn detail_cursor_stays_in_range() {
        let mut state = AppState::new(Profile::sample());
        state.mode = Mode::Browse;
        state.open_detail(3).unwrap();
        for _ in 0..10 {
            handle_detail_key(&mut state, &key(AppKeyCode::Down));
        }
        assert_eq!(state.detail.as_ref().unwrap().selected, 3);
        for _ in 0..10 {
            handle_detail_key(&mut state, &key(AppKeyCode::Up));
        }
        assert_eq!(state.detail.as_ref().unwrap().selected, 0);
    }
}
