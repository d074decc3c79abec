//! Built-in workout catalog.
//!
//! The app ships with a fixed set of workouts; there is no backend to fetch
//! from. Lookup by an unknown id is an explicit error — callers decide
//! whether to fall back to anything.

use crate::error::CatalogError;
use crate::types::{Difficulty, ExerciseSpec, WorkoutDefinition};

/// Number of workouts featured on the home dashboard.
const FEATURED: usize = 3;

#[derive(Debug, Clone)]
pub struct Catalog {
    workouts: Vec<WorkoutDefinition>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            workouts: builtin_workouts(),
        }
    }

    pub fn get(&self, id: u32) -> Result<&WorkoutDefinition, CatalogError> {
        self.workouts
            .iter()
            .find(|w| w.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn all(&self) -> &[WorkoutDefinition] {
        &self.workouts
    }

    /// The "Today's Workouts" subset shown on the dashboard.
    pub fn todays(&self) -> &[WorkoutDefinition] {
        &self.workouts[..FEATURED.min(self.workouts.len())]
    }

    /// Distinct categories in first-seen order, for the filter pills.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for w in &self.workouts {
            if !out.contains(&w.category) {
                out.push(w.category.clone());
            }
        }
        out
    }
}

fn builtin_workouts() -> Vec<WorkoutDefinition> {
    vec![
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
        },
        WorkoutDefinition {
            id: 2,
            name: "Upper Body Strength".to_string(),
            category: "Strength".to_string(),
            icon: "💪".to_string(),
            target_duration: "45 min".to_string(),
            calories: 320,
            difficulty: Difficulty::Hard,
            exercises: vec![
                ExerciseSpec::strength("Push-ups", "4", "15"),
                ExerciseSpec::strength("Pull-ups", "3", "10"),
                ExerciseSpec::strength("Dumbbell Press", "4", "12"),
                ExerciseSpec::strength("Lateral Raises", "3", "15"),
                ExerciseSpec::strength("Tricep Dips", "3", "12"),
            ],
        },
        WorkoutDefinition {
            id: 3,
            name: "Evening Yoga".to_string(),
            category: "Flexibility".to_string(),
            icon: "🧘".to_string(),
            target_duration: "20 min".to_string(),
            calories: 95,
            difficulty: Difficulty::Easy,
            exercises: vec![
                ExerciseSpec::timed("Sun Salutation", "5 min"),
                ExerciseSpec::timed("Warrior Poses", "5 min"),
                ExerciseSpec::timed("Hip Openers", "5 min"),
                ExerciseSpec::timed("Savasana", "5 min"),
            ],
        },
        WorkoutDefinition {
            id: 4,
            name: "HIIT Cardio".to_string(),
            category: "Cardio".to_string(),
            icon: "🔥".to_string(),
            target_duration: "25 min".to_string(),
            calories: 380,
            difficulty: Difficulty::Hard,
            exercises: vec![
                ExerciseSpec::timed("Jumping Jacks", "3 min"),
                ExerciseSpec::strength("Burpees", "4", "12"),
                ExerciseSpec::strength("Mountain Climbers", "4", "20"),
                ExerciseSpec::timed("High Knees", "2 min"),
                ExerciseSpec::paced("Sprint Intervals", "400 m", "8 min"),
            ],
        },
        WorkoutDefinition {
            id: 5,
            name: "Core Crusher".to_string(),
            category: "Strength".to_string(),
            icon: "⚡".to_string(),
            target_duration: "30 min".to_string(),
            calories: 210,
            difficulty: Difficulty::Medium,
            exercises: vec![
                ExerciseSpec::timed("Plank", "2 min"),
                ExerciseSpec::strength("Crunches", "3", "20"),
                ExerciseSpec::strength("Russian Twists", "3", "16"),
                ExerciseSpec::strength("Leg Raises", "3", "12"),
                ExerciseSpec::timed("Side Plank", "1 min"),
            ],
        },
        WorkoutDefinition {
            id: 6,
            name: "Recovery Stretch".to_string(),
            category: "Flexibility".to_string(),
            icon: "🌿".to_string(),
            target_duration: "15 min".to_string(),
            calories: 60,
            difficulty: Difficulty::Easy,
            exercises: vec![
                ExerciseSpec::timed("Neck Rolls", "2 min"),
                ExerciseSpec::timed("Hamstring Stretch", "3 min"),
                ExerciseSpec::timed("Quad Stretch", "3 min"),
                ExerciseSpec::timed("Child's Pose", "4 min"),
                ExerciseSpec::timed("Deep Breathing", "3 min"),
            ],
        },
    ]
}
