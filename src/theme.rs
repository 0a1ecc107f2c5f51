//! Colors and styles for every view.
//!
//! Render code reads constants from here instead of naming `Color` values
//! inline, so the whole look can be retuned in one file.
//!
//! Theme: Dusk - warm brass accents over a slate background

use ratatui::style::{Color, Modifier, Style};

/// Base colors shared by the component modules below
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(232, 230, 222);
    pub const MUTED: Color = Color::Rgb(128, 134, 150);
    pub const SLATE: Color = Color::Rgb(84, 92, 112);
    pub const BRASS: Color = Color::Rgb(226, 178, 96);

    pub const BG_DARK: Color = Color::Rgb(24, 28, 38);
    pub const BG_SURFACE: Color = Color::Rgb(36, 41, 54);

    pub const SUCCESS: Color = Color::Rgb(118, 196, 126);
    pub const WARNING: Color = Color::Rgb(240, 200, 80);
    pub const ERROR: Color = Color::Rgb(222, 102, 108);
    pub const INFO: Color = Color::Rgb(104, 168, 230);
}

/// Page frame styles (header, body, status bar)
pub mod page {
    use super::*;

    pub const BORDER: Color = palette::SLATE;
    pub const TITLE: Color = palette::BRASS;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const KEY: Color = Color::Rgb(140, 190, 210);
    pub const VALUE: Color = palette::TEXT;
    pub const BULLET: Color = palette::MUTED;

    pub const LOADING: Color = palette::MUTED;
    pub const FALLBACK: Color = palette::ERROR;

    pub const MENU_INDEX: Color = palette::BRASS;
    pub const MENU_LABEL: Color = palette::TEXT;
}

/// Lead status stepper styles
pub mod stepper {
    use super::*;

    pub const DONE: Color = palette::SUCCESS;
    pub const CURRENT: Style = Style::new().fg(palette::BRASS).add_modifier(Modifier::BOLD);
    pub const PENDING: Color = palette::SLATE;
    pub const CONNECTOR: Color = palette::SLATE;
}

/// Notification overlay styles. Accent colors are keyed by notification kind.
pub mod notification {
    use super::*;

    pub const SUCCESS: Color = palette::SUCCESS;
    pub const ERROR: Color = palette::ERROR;
    pub const WARNING: Color = palette::WARNING;
    pub const INFO: Color = palette::INFO;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const MESSAGE: Color = palette::TEXT;
    pub const BUTTON_FG: Color = palette::BG_DARK;
}

/// Bottom key-hint line
pub mod help_line {
    use super::*;
    use ratatui::text::{Line, Span};

    pub const KEY: Style = Style::new().fg(palette::BRASS);
    pub const DESCRIPTION: Style = Style::new().fg(palette::MUTED);
    pub const GAP: &str = "   ";

    /// `key description` pairs laid out left to right
    pub fn hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
        let mut spans = Vec::with_capacity(pairs.len() * 3 + 1);
        spans.push(Span::raw(" "));
        for (i, (key, description)) in pairs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(GAP));
            }
            spans.push(Span::styled(*key, KEY));
            spans.push(Span::styled(format!(" {}", description), DESCRIPTION));
        }
        Line::from(spans)
    }
}
