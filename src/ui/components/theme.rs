//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(96, 165, 250);
pub const ACCENT_SUCCESS: Color = Color::Rgb(74, 222, 128);
pub const ACCENT_WARNING: Color = Color::Rgb(250, 204, 21);
pub const ACCENT_ERROR: Color = Color::Rgb(248, 113, 113);

pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color = Color::Rgb(190, 194, 201);
pub const TEXT_MUTED: Color = Color::Rgb(140, 146, 156);
pub const TEXT_FAINT: Color = Color::Rgb(90, 96, 106);

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const SELECTED_BG_DIM: Color = Color::Rgb(30, 30, 30);
pub const DROP_TARGET_BG: Color = Color::Rgb(60, 50, 20);

pub const HEADER_BG: Color = Color::Rgb(20, 20, 20);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 74, 82);
pub const BORDER_FOCUSED: Color = ACCENT_PRIMARY;
