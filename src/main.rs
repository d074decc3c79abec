use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::{Deserialize, Serialize};

use movit_core::app::AppState;
use movit_core::key_event::{AppKeyCode, AppKeyEvent};
use movit_core::types::Profile;
use movit_core::ui;

// ── Key event conversion ─────────────────────────────────────────────────

fn convert_key(key: crossterm::event::KeyEvent) -> AppKeyEvent {
    let code = match key.code {
        KeyCode::Char(c) => AppKeyCode::Char(c),
        KeyCode::Backspace => AppKeyCode::Backspace,
        KeyCode::Enter => AppKeyCode::Enter,
        KeyCode::Left => AppKeyCode::Left,
        KeyCode::Right => AppKeyCode::Right,
        KeyCode::Up => AppKeyCode::Up,
        KeyCode::Down => AppKeyCode::Down,
        KeyCode::Tab => AppKeyCode::Tab,
        KeyCode::BackTab => AppKeyCode::BackTab,
        KeyCode::Esc => AppKeyCode::Esc,
        _ => AppKeyCode::Other,
    };
    AppKeyEvent {
        code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    }
}

// ── Config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CliConfig {
    user: Option<String>,
}

fn config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set; please set HOME")?;
    Ok(Path::new(&home).join(".config/movit/config.json"))
}

fn persist_config(user: &str) -> Result<()> {
    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let cfg = CliConfig {
        user: Some(user.to_string()),
    };
    let content = serde_json::to_string_pretty(&cfg)?;
    fs::write(&path, content)?;
    Ok(())
}

fn configured_user() -> Option<String> {
    let path = config_path().ok()?;
    let content = fs::read_to_string(path).ok()?;
    let cfg: CliConfig = serde_json::from_str(&content).ok()?;
    cfg.user
}

fn resolve_profile(user_arg: Option<String>) -> Profile {
    let mut profile = Profile::sample();
    if let Some(user) = user_arg.or_else(configured_user) {
        profile.email = format!("{}@movit.app", user.to_lowercase().replace(' ', "."));
        profile.name = user;
    }
    profile
}

// ── Main ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "movit")]
#[command(about = "Mock-data fitness tracker for the terminal", long_about = None)]
struct Args {
    /// Display name shown on the dashboard and profile
    #[arg(short, long)]
    user: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(user) = &args.user {
        persist_config(user).ok();
    }
    let mut state = AppState::new(resolve_profile(args.user));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        terminal::LeaveAlternateScreen,
        event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        state.tick();
        terminal.draw(|f| ui::ui(f, state))?;

        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) => {
                    if state.handle_key(convert_key(key)) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }
    Ok(())
}
