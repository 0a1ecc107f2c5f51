//! Notification rendering
//!
//! Draws the current notification as a centered card: icon and title in the
//! kind's accent color, the wrapped message, and the action button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::notification_state::NotificationStore;
use crate::theme;
use crate::widgets::popup;

const MIN_CARD_WIDTH: u16 = 30;
const MAX_CARD_WIDTH: u16 = 60;
/// Borders plus one column of padding on each side
const HORIZONTAL_CHROME: u16 = 4;
/// Borders, the gap under the title and the gap above the button
const VERTICAL_CHROME: u16 = 4;

/// Render the notification overlay centered in the frame
///
/// Call after the page so the card is drawn on top. Returns the card area,
/// or `None` when nothing is visible or the frame is too small.
pub fn render_notification(frame: &mut Frame, store: &NotificationStore) -> Option<Rect> {
    let descriptor = store.visible_descriptor()?;
    let accent = descriptor.kind.accent();

    let frame_area = frame.area();
    let button = format!("[ {} ]", descriptor.action_label());
    let title = format!("{} {}", descriptor.kind.icon(), descriptor.title);

    let widest = [&title, &descriptor.message, &button]
        .iter()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0);
    let card_width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(HORIZONTAL_CHROME)
        .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
        .min(frame_area.width);

    let text_width = card_width.saturating_sub(HORIZONTAL_CHROME) as usize;
    if text_width == 0 {
        return None;
    }
    let message_lines = wrap_text(&descriptor.message, text_width);

    // Title and button rows plus the wrapped message
    let message_rows = message_lines.len().min(u16::MAX as usize) as u16;
    let card_height = message_rows.saturating_add(VERTICAL_CHROME + 2);
    if card_height > frame_area.height {
        return None;
    }

    let area = popup::centered_popup(frame_area, card_width, card_height);
    popup::clear_area(frame, area);

    let accent_bold = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(descriptor.kind.icon(), accent_bold),
            Span::raw(" "),
            Span::styled(descriptor.title.as_str(), accent_bold),
        ]),
        Line::from(""),
    ];
    lines.extend(message_lines.into_iter().map(|text| {
        Line::from(Span::styled(
            text,
            Style::default().fg(theme::notification::MESSAGE),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            button,
            Style::default()
                .fg(theme::notification::BUTTON_FG)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme::notification::BACKGROUND));

    let inner = popup::inset_rect(block.inner(area), 1, 0);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);

    Some(area)
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            word.len() + 1
        };
        if current_len + needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
