//! Semantic style builders.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use lstudio_app::NoticeLevel;
use lstudio_core::StepIcon;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn error() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for the focused cursor row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row when the list is not focused
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn notice(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => Style::default().fg(palette::STATUS_GREEN),
        NoticeLevel::Warning => Style::default()
            .fg(palette::STATUS_YELLOW)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Rendered content ---
pub fn heading(level: u8) -> Style {
    let color = if level <= 1 {
        palette::HEADING_1
    } else {
        palette::HEADING_2
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level <= 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

pub fn emphasis() -> Style {
    Style::default()
        .fg(palette::EMPHASIS)
        .add_modifier(Modifier::BOLD)
}

pub fn bullet() -> Style {
    Style::default().fg(palette::BULLET)
}

pub fn number() -> Style {
    Style::default()
        .fg(palette::NUMBER)
        .add_modifier(Modifier::BOLD)
}

/// Color for a step icon; thinking hats use their own color
pub fn step_icon(icon: StepIcon) -> Style {
    let color = match icon {
        StepIcon::WhiteHat => Color::White,
        StepIcon::RedHat => Color::Red,
        StepIcon::BlackHat => Color::DarkGray,
        StepIcon::YellowHat => Color::Yellow,
        StepIcon::GreenHat => Color::Green,
        StepIcon::BlueHat => Color::Blue,
        StepIcon::Default => palette::TEXT_SECONDARY,
        _ => palette::ACCENT_WARM,
    };
    Style::default().fg(color)
}

pub fn step_done() -> Style {
    Style::default().fg(palette::STEP_DONE)
}

pub fn step_active() -> Style {
    Style::default()
        .fg(palette::STEP_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn step_pending() -> Style {
    Style::default().fg(palette::STEP_PENDING)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
