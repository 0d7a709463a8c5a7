//! Color palette.
//!
//! Named terminal colors only, so the UI follows the user's terminal scheme.

use ratatui::style::Color;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_WARM: Color = Color::Magenta;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Rendered content ---
pub const HEADING_1: Color = Color::Cyan;
pub const HEADING_2: Color = Color::LightBlue;
pub const EMPHASIS: Color = Color::Yellow;
pub const BULLET: Color = Color::Magenta;
pub const NUMBER: Color = Color::Green;

// --- Step timeline ---
pub const STEP_DONE: Color = Color::Green;
pub const STEP_ACTIVE: Color = Color::Cyan;
pub const STEP_PENDING: Color = Color::DarkGray;
