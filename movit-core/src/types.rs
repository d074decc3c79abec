use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::key_event::{AppKeyCode, AppKeyEvent};

// ── Workout data ─────────────────────────────────────────────────────────

/// Difficulty tier shown next to every workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One entry in a workout's checklist. Strength exercises carry sets and
/// reps; endurance ones carry a duration and optionally a distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub distance: Option<String>,
    pub duration: Option<String>,
}

impl ExerciseSpec {
    pub fn strength(name: &str, sets: &str, reps: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: Some(sets.to_string()),
            reps: Some(reps.to_string()),
            distance: None,
            duration: None,
        }
    }

    pub fn timed(name: &str, duration: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: None,
            reps: None,
            distance: None,
            duration: Some(duration.to_string()),
        }
    }

    pub fn paced(name: &str, distance: &str, duration: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: None,
            reps: None,
            distance: Some(distance.to_string()),
            duration: Some(duration.to_string()),
        }
    }

    /// Secondary line shown under the exercise name.
    pub fn detail_label(&self) -> String {
        match (&self.sets, &self.reps, &self.distance, &self.duration) {
            (Some(sets), Some(reps), _, _) => format!("{sets} sets × {reps} reps"),
            (_, _, Some(distance), Some(duration)) => format!("{distance} · {duration}"),
            (_, _, None, Some(duration)) => duration.clone(),
            _ => String::new(),
        }
    }
}

/// Immutable description of a workout, as served by the catalog.
/// Exercise order is meaningful: it defines the checklist indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDefinition {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub target_duration: String,
    pub calories: u32,
    pub difficulty: Difficulty,
    pub exercises: Vec<ExerciseSpec>,
}

// ── Mock profile and dashboard data ──────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub plan: String,
    pub total_workouts: u32,
    pub streak_days: u32,
    pub best_streak_days: u32,
    pub workouts_this_month: u32,
    pub fitness_goal: String,
    pub notifications: bool,
    pub weekly_target: u8,
}

impl Profile {
    pub fn sample() -> Self {
        Self {
            name: "Patiphat".to_string(),
            email: "patiphat@movit.app".to_string(),
            plan: "Pro Member".to_string(),
            total_workouts: 142,
            streak_days: 7,
            best_streak_days: 14,
            workouts_this_month: 18,
            fitness_goal: "Weight Loss".to_string(),
            notifications: true,
            weekly_target: 5,
        }
    }
}

/// Today's numbers on the dashboard. All mock data; there is no tracker
/// hardware behind this app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub steps: u32,
    pub steps_goal: u32,
    pub calories: u32,
    pub calories_goal: u32,
    pub active_minutes: u32,
    pub minutes_goal: u32,
    /// Percent effort per day, Monday first.
    pub week: [u8; 7],
    pub days_active_this_week: u8,
}

impl DailyStats {
    pub fn sample() -> Self {
        Self {
            steps: 8432,
            steps_goal: 10_000,
            calories: 642,
            calories_goal: 1_000,
            active_minutes: 47,
            minutes_goal: 100,
            week: [65, 80, 45, 90, 70, 0, 0],
            days_active_this_week: 5,
        }
    }
}

// ── Navigation ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Login,
    Browse,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Workouts,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Workouts, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Workouts => "Workouts",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileRow {
    #[default]
    Notifications,
    WeeklyTarget,
    SignOut,
}

impl ProfileRow {
    pub const ALL: [ProfileRow; 3] = [
        ProfileRow::Notifications,
        ProfileRow::WeeklyTarget,
        ProfileRow::SignOut,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(&self) -> ProfileRow {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn prev(&self) -> ProfileRow {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

// ── Login form ───────────────────────────────────────────────────────────

/// How long the fake sign-in "request" takes.
pub const LOGIN_DELAY_MS: i64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: TextInput,
    pub password: TextInput,
    pub field: LoginField,
    /// Set while the simulated sign-in is in flight.
    pub pending_until: Option<DateTime<Utc>>,
}

impl LoginForm {
    pub fn is_pending(&self) -> bool {
        self.pending_until.is_some()
    }

    /// Arm the fake sign-in delay. There is no backend; any credentials pass.
    pub fn submit(&mut self, now: DateTime<Utc>) {
        if self.pending_until.is_none() {
            self.pending_until = Some(now + Duration::milliseconds(LOGIN_DELAY_MS));
        }
    }

    pub fn reset(&mut self) {
        *self = LoginForm::default();
    }
}

// ── Text input ───────────────────────────────────────────────────────────

/// Minimal single-line text input (login fields, workout search).
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub value: String,
}

impl TextInput {
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &AppKeyEvent) -> bool {
        if key.ctrl || key.alt {
            return false;
        }
        match key.code {
            AppKeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            AppKeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_label_strength_shape() {
        let ex = ExerciseSpec::strength("Push-ups", "4", "15");
        assert_eq!(ex.detail_label(), "4 sets × 15 reps");
    }

    #[test]
    fn detail_label_endurance_shapes() {
        let timed = ExerciseSpec::timed("Warm-up Walk", "5 min");
        assert_eq!(timed.detail_label(), "5 min");

        let paced = ExerciseSpec::paced("Easy Jog", "1.5 km", "10 min");
        assert_eq!(paced.detail_label(), "1.5 km · 10 min");
    }

    #[test]
    fn tab_cycle_wraps() {
        assert_eq!(Tab::Home.next(), Tab::Workouts);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
    }

    #[test]
    fn profile_rows_clamp_at_edges() {
        assert_eq!(ProfileRow::Notifications.prev(), ProfileRow::Notifications);
        assert_eq!(ProfileRow::SignOut.next(), ProfileRow::SignOut);
        assert_eq!(ProfileRow::Notifications.next(), ProfileRow::WeeklyTarget);
    }

    #[test]
    fn text_input_consumes_chars_and_backspace() {
        let mut input = TextInput::default();
        assert!(input.handle_key(&AppKeyEvent::plain(AppKeyCode::Char('h'))));
        assert!(input.handle_key(&AppKeyEvent::plain(AppKeyCode::Char('i'))));
        assert_eq!(input.value, "hi");
        assert!(input.handle_key(&AppKeyEvent::plain(AppKeyCode::Backspace)));
        assert_eq!(input.value, "h");
        assert!(!input.handle_key(&AppKeyEvent::plain(AppKeyCode::Enter)));
    }

    #[test]
    fn login_submit_is_idempotent_while_pending() {
        let mut form = LoginForm::default();
        let t0 = Utc::now();
        form.submit(t0);
        let armed = form.pending_until;
        form.submit(t0 + Duration::milliseconds(500));
        assert_eq!(form.pending_until, armed);
    }
}
