/// Abstract key event decoupled from the terminal backend.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: AppKeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Abstract key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKeyCode {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Tab,
    BackTab,
    Esc,
    Other,
}

impl AppKeyEvent {
    pub fn plain(code: AppKeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn is_ctrl_c(&self) -> bool {
        self.ctrl && self.code == AppKeyCode::Char('c')
    }
}
