use ratatui::style::Color;

use crate::types::Difficulty;

pub const ORANGE: Color = Color::Rgb(0xF9, 0x73, 0x16);
pub const GREEN: Color = Color::Rgb(0x4A, 0xDE, 0x80);
pub const YELLOW: Color = Color::Rgb(0xFA, 0xCC, 0x15);
pub const RED: Color = Color::Rgb(0xF8, 0x71, 0x71);
pub const BLUE: Color = Color::Rgb(0x60, 0xA5, 0xFA);
pub const PURPLE: Color = Color::Rgb(0xC0, 0x84, 0xFC);
pub const GRAY_DIM: Color = Color::DarkGray;

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => GREEN,
        Difficulty::Medium => YELLOW,
        Difficulty::Hard => RED,
    }
}
