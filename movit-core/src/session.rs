//! Lifecycle of a single workout attempt.
//!
//! A [`WorkoutSession`] is created when the detail screen is entered and
//! dropped when the user navigates back; nothing is persisted. The elapsed
//! clock is driven from the outside, one [`WorkoutSession::tick`] per
//! second, by a [`Ticker`] owned by the same scope as the session.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use crate::error::SessionError;
use crate::types::WorkoutDefinition;

/// Lifecycle stage of a workout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Completed,
}

/// Mutable state of one workout attempt: lifecycle phase, elapsed clock
/// and the set of checked-off exercise indices.
///
/// Invalid lifecycle transitions (`start` outside Idle, `complete` after
/// Completed) are silent no-ops; the screens never offer them, and the
/// original app behaves the same way.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout_id: u32,
    exercise_count: usize,
    phase: Phase,
    elapsed_seconds: u64,
    completed: BTreeSet<usize>,
}

impl WorkoutSession {
    pub fn new(workout: &WorkoutDefinition) -> Self {
        Self {
            workout_id: workout.id,
            exercise_count: workout.exercises.len(),
            phase: Phase::Idle,
            elapsed_seconds: 0,
            completed: BTreeSet::new(),
        }
    }

    pub fn workout_id(&self) -> u32 {
        self.workout_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn completed_exercises(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_exercise_done(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Move from Idle to Active and let the clock run.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
        }
    }

    /// Advance the clock by one second. Only Active sessions tick; calling
    /// this in any other phase does nothing, so a late scheduler invocation
    /// after completion is harmless.
    pub fn tick(&mut self) {
        if self.phase == Phase::Active {
            self.elapsed_seconds += 1;
        }
    }

    /// Freeze the clock and mark the attempt finished. Terminal: only a new
    /// session resets the machine. Tolerated from Idle as well, for a
    /// zero-second attempt.
    pub fn complete(&mut self) {
        if self.phase != Phase::Completed {
            self.phase = Phase::Completed;
        }
    }

    /// Flip membership of `index` in the completed set. Works in any phase;
    /// an out-of-range index is rejected without touching state.
    pub fn toggle_exercise(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.exercise_count {
            return Err(SessionError::OutOfRange {
                index,
                len: self.exercise_count,
            });
        }
        if !self.completed.remove(&index) {
            self.completed.insert(index);
        }
        Ok(())
    }

    /// Elapsed clock as zero-padded `MM:SS`. Minutes are not wrapped at 60.
    pub fn format_elapsed(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// ── Ticker ───────────────────────────────────────────────────────────────

/// Wall-clock driver for [`WorkoutSession::tick`].
///
/// Owned by the same scope as the session (dropping the screen drops the
/// ticker, so no dangling timer can mutate a discarded session). Each call
/// to [`Ticker::drive`] feeds the whole seconds elapsed since the previous
/// call into the session; the fractional remainder carries over to the next
/// call, so polling at an uneven cadence never double-counts or skips.
#[derive(Debug, Clone)]
pub struct Ticker {
    last: DateTime<Utc>,
}

impl Ticker {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { last: now }
    }

    pub fn drive(&mut self, session: &mut WorkoutSession, now: DateTime<Utc>) {
        if session.phase() != Phase::Active {
            // No backlog accumulates while the clock is frozen.
            self.last = now;
            return;
        }
        let mut whole_seconds = (now - self.last).num_seconds();
        while whole_seconds > 0 {
            session.tick();
            self.last += Duration::seconds(1);
            whole_seconds -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, ExerciseSpec};

    fn four_exercise_workout() -> WorkoutDefinition {
        WorkoutDefinition {
            id: 1,
            name: "Morning Run".to_string(),
            category: "Running".to_string(),
            icon: "🏃".to_string(),
            target_duration: "32 min".to_string(),
            calories: 285,
            difficulty: Difficulty::Medium,
            exercises: vec![
                ExerciseSpec::timed("Warm-up Walk", "5 min"),
                ExerciseSpec::paced("Easy Jog", "1.5 km", "10 min"),
                ExerciseSpec::paced("Tempo Run", "2 km", "12 min"),
                ExerciseSpec::timed("Cool-down Walk", "5 min"),
            ],
        }
    }

    #[test]
    fn fresh_session_is_idle_and_empty() {
        let session = WorkoutSession::new(&four_exercise_workout());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(session.completed_exercises().is_empty());
    }

    #[test]
    fn tick_is_a_no_op_while_idle() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn start_then_five_ticks() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.start();
        for _ in 0..5 {
            session.tick();
        }
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.elapsed_seconds(), 5);
        assert_eq!(session.format_elapsed(), "00:05");
    }

    #[test]
    fn complete_freezes_the_clock() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.start();
        for _ in 0..5 {
            session.tick();
        }
        session.complete();
        for _ in 0..3 {
            session.tick();
        }
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.elapsed_seconds(), 5);
    }

    #[test]
    fn start_does_not_restart_an_active_or_completed_session() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.start();
        session.tick();
        session.start();
        assert_eq!(session.elapsed_seconds(), 1);
        assert_eq!(session.phase(), Phase::Active);

        session.complete();
        session.start();
        assert_eq!(session.phase(), Phase::Completed);
    }

    #[test]
    fn complete_is_tolerated_from_idle() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.complete();
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn toggle_tracks_membership() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.toggle_exercise(1).unwrap();
        session.toggle_exercise(3).unwrap();
        let done: Vec<usize> = session.completed_exercises().iter().copied().collect();
        assert_eq!(done, vec![1, 3]);

        session.toggle_exercise(1).unwrap();
        let done: Vec<usize> = session.completed_exercises().iter().copied().collect();
        assert_eq!(done, vec![3]);
    }

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.toggle_exercise(2).unwrap();
        let before = session.completed_exercises().clone();
        session.toggle_exercise(0).unwrap();
        session.toggle_exercise(0).unwrap();
        assert_eq!(session.completed_exercises(), &before);
    }

    #[test]
    fn toggle_works_in_every_phase() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.toggle_exercise(0).unwrap();
        session.start();
        session.toggle_exercise(1).unwrap();
        session.complete();
        session.toggle_exercise(2).unwrap();
        assert_eq!(session.completed_count(), 3);
    }

    #[test]
    fn out_of_range_toggle_leaves_state_unchanged() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.toggle_exercise(0).unwrap();
        let before = session.clone();

        let err = session.toggle_exercise(4).unwrap_err();
        assert_eq!(err, SessionError::OutOfRange { index: 4, len: 4 });
        assert_eq!(session.completed_exercises(), before.completed_exercises());
        assert_eq!(session.elapsed_seconds(), before.elapsed_seconds());
        assert_eq!(session.phase(), before.phase());
    }

    #[test]
    fn format_elapsed_pads_and_does_not_wrap_minutes() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(60), "01:00");
        assert_eq!(format_elapsed(3725), "62:05");
    }

    #[test]
    fn ticker_feeds_whole_seconds_and_carries_the_remainder() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.start();
        let t0 = Utc::now();
        let mut ticker = Ticker::new(t0);

        ticker.drive(&mut session, t0 + Duration::milliseconds(900));
        assert_eq!(session.elapsed_seconds(), 0);

        ticker.drive(&mut session, t0 + Duration::milliseconds(1100));
        assert_eq!(session.elapsed_seconds(), 1);

        ticker.drive(&mut session, t0 + Duration::milliseconds(3500));
        assert_eq!(session.elapsed_seconds(), 3);

        ticker.drive(&mut session, t0 + Duration::milliseconds(4000));
        assert_eq!(session.elapsed_seconds(), 4);
    }

    #[test]
    fn ticker_stops_feeding_once_completed() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        session.start();
        let t0 = Utc::now();
        let mut ticker = Ticker::new(t0);

        ticker.drive(&mut session, t0 + Duration::seconds(2));
        session.complete();
        ticker.drive(&mut session, t0 + Duration::seconds(10));
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn ticker_does_nothing_while_idle() {
        let mut session = WorkoutSession::new(&four_exercise_workout());
        let t0 = Utc::now();
        let mut ticker = Ticker::new(t0);
        ticker.drive(&mut session, t0 + Duration::seconds(5));
        assert_eq!(session.elapsed_seconds(), 0);

        // The idle stretch is discarded, not replayed after start.
        session.start();
        ticker.drive(&mut session, t0 + Duration::milliseconds(5500));
        assert_eq!(session.elapsed_seconds(), 0);
        ticker.drive(&mut session, t0 + Duration::milliseconds(6100));
        assert_eq!(session.elapsed_seconds(), 1);
    }
}
