use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::handlers::*;
use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::session::{Phase, Ticker, WorkoutSession};
use crate::types::*;

/// Everything the detail screen owns. Dropping this drops the session and
/// its ticker together, so a discarded session can never keep ticking.
pub struct DetailState {
    pub workout: WorkoutDefinition,
    pub session: WorkoutSession,
    pub ticker: Option<Ticker>,
    /// Cursor into the exercise checklist.
    pub selected: usize,
}

impl DetailState {
    /// Start the workout and arm the clock.
    pub fn start_at(&mut self, now: DateTime<Utc>) {
        if self.session.phase() == Phase::Idle {
            self.session.start();
            self.ticker = Some(Ticker::new(now));
        }
    }

    /// Finish the workout. The screen only offers this while Active.
    pub fn complete(&mut self) {
        if self.session.phase() == Phase::Active {
            self.session.complete();
            self.ticker = None;
        }
    }
}

/// Central application state.
pub struct AppState {
    pub catalog: Catalog,
    pub profile: Profile,
    pub stats: DailyStats,
    pub mode: Mode,
    pub active_tab: Tab,
    pub login: LoginForm,
    pub detail: Option<DetailState>,
    pub home_selected: usize,
    pub workouts_selected: usize,
    /// Index into `category_filters()`.
    pub category_index: usize,
    pub search_input: TextInput,
    pub searching: bool,
    pub profile_row: ProfileRow,
}

impl AppState {
    pub fn new(profile: Profile) -> Self {
        Self {
            catalog: Catalog::builtin(),
            profile,
            stats: DailyStats::sample(),
            mode: Mode::Login,
            active_tab: Tab::default(),
            login: LoginForm::default(),
            detail: None,
            home_selected: 0,
            workouts_selected: 0,
            category_index: 0,
            search_input: TextInput::default(),
            searching: false,
            profile_row: ProfileRow::default(),
        }
    }

    /// Dispatch a key event to the handler for the current screen.
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: AppKeyEvent) -> bool {
        if key.is_ctrl_c() {
            return true;
        }
        match self.mode {
            Mode::Login => handle_login_key(self, &key),
            Mode::Detail => handle_detail_key(self, &key),
            Mode::Browse => {
                if !self.searching && key.code == AppKeyCode::Char('q') {
                    return true;
                }
                handle_browse_key(self, &key);
            }
        }
        false
    }

    /// Advance time-driven state (call on every poll cycle).
    pub fn tick(&mut self) {
        self.tick_at(Utc::now());
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) {
        if self.mode == Mode::Login {
            if let Some(deadline) = self.login.pending_until {
                if now >= deadline {
                    self.login.reset();
                    self.mode = Mode::Browse;
                    self.active_tab = Tab::Home;
                }
            }
        }

        if let Some(detail) = self.detail.as_mut() {
            if let Some(ticker) = detail.ticker.as_mut() {
                ticker.drive(&mut detail.session, now);
            }
            if detail.session.phase() != Phase::Active {
                detail.ticker = None;
            }
        }
    }

    /// "All" plus every category present in the catalog.
    pub fn category_filters(&self) -> Vec<String> {
        let mut filters = vec!["All".to_string()];
        filters.extend(self.catalog.categories());
        filters
    }

    /// Enter the detail screen with a fresh session bound to `id`.
    pub fn open_detail(&mut self, id: u32) -> Result<(), CatalogError> {
        let workout = self.catalog.get(id)?.clone();
        let session = WorkoutSession::new(&workout);
        self.detail = Some(DetailState {
            workout,
            session,
            ticker: None,
            selected: 0,
        });
        self.mode = Mode::Detail;
        Ok(())
    }

    /// Leave the detail screen, discarding the session and its ticker.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.mode = Mode::Browse;
    }

    pub fn sign_out(&mut self) {
        self.detail = None;
        self.login.reset();
        self.active_tab = Tab::Home;
        self.home_selected = 0;
        self.workouts_selected = 0;
        self.category_index = 0;
        self.search_input.clear();
        self.searching = false;
        self.profile_row = ProfileRow::default();
        self.mode = Mode::Login;
    }
}
