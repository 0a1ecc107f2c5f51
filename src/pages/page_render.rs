//! Page rendering
//!
//! The home page is a menu of the property pages. Data pages render whatever
//! JSON the backend sent: objects as `key: value` rows, arrays as bullets.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use serde_json::Value;

use super::page_state::{PageState, PageStatus};
use super::stepper::{self, LEAD_STAGES};
use crate::router::{PageKind, Route};
use crate::theme;

/// One rendered row of a JSON payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRow {
    pub depth: usize,
    pub key: Option<String>,
    pub value: String,
}

pub fn render_page(frame: &mut Frame, area: Rect, page: &PageState, property_id: u64) {
    let title = match &page.route {
        Route::Home => format!(" Property #{} ", property_id),
        Route::Page { page, property_id } => format!(" {} · #{} ", page.title(), property_id),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::page::BORDER))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::page::TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme::page::BACKGROUND));

    let lines = match &page.status {
        PageStatus::Idle => home_lines(),
        PageStatus::Loading => vec![Line::from(Span::styled(
            "Loading…",
            Style::default().fg(theme::page::LOADING),
        ))],
        PageStatus::Failed(error) => fallback_lines(&page.route, error),
        PageStatus::Loaded(body) => body_lines(&page.route, body),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn home_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (index, page) in PageKind::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", index + 1),
                Style::default()
                    .fg(theme::page::MENU_INDEX)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(page.title(), Style::default().fg(theme::page::MENU_LABEL)),
        ]));
    }
    lines
}

fn fallback_lines(route: &Route, error: &str) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme::page::FALLBACK);
    vec![
        Line::from(Span::styled(
            format!("{} is unavailable right now.", route.title()),
            style,
        )),
        Line::from(Span::styled(error.to_string(), style)),
    ]
}

fn body_lines(route: &Route, body: &Value) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if matches!(
        route,
        Route::Page {
            page: PageKind::AboutProperty,
            ..
        }
    ) && let Some(index) = stepper::status_index(body)
    {
        lines.push(stepper::stepper_line(index, &LEAD_STAGES));
        lines.push(Line::from(""));
    }

    lines.extend(json_rows(body).into_iter().map(row_line));
    lines
}

fn row_line(row: JsonRow) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    match row.key {
        Some(key) => Line::from(vec![
            Span::raw(indent),
            Span::styled(format!("{}: ", key), Style::default().fg(theme::page::KEY)),
            Span::styled(row.value, Style::default().fg(theme::page::VALUE)),
        ]),
        None => Line::from(vec![
            Span::raw(indent),
            Span::styled("• ", Style::default().fg(theme::page::BULLET)),
            Span::styled(row.value, Style::default().fg(theme::page::VALUE)),
        ]),
    }
}

/// Flatten a payload into display rows
pub fn json_rows(value: &Value) -> Vec<JsonRow> {
    let mut rows = Vec::new();
    match value {
        Value::Object(_) | Value::Array(_) => push_rows(&mut rows, value, 0),
        scalar => rows.push(JsonRow {
            depth: 0,
            key: None,
            value: scalar_text(scalar),
        }),
    }
    rows
}

fn push_rows(rows: &mut Vec<JsonRow>, value: &Value, depth: usize) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                push_child(rows, Some(humanize_key(key)), child, depth);
            }
        }
        Value::Array(items) => {
            for item in items {
                push_child(rows, None, item, depth);
            }
        }
        _ => {}
    }
}

fn push_child(rows: &mut Vec<JsonRow>, key: Option<String>, child: &Value, depth: usize) {
    match child {
        Value::Object(map) if map.is_empty() => rows.push(JsonRow {
            depth,
            key,
            value: "—".to_string(),
        }),
        Value::Array(items) if items.is_empty() => rows.push(JsonRow {
            depth,
            key,
            value: "none".to_string(),
        }),
        Value::Object(_) | Value::Array(_) => {
            rows.push(JsonRow {
                depth,
                key,
                value: String::new(),
            });
            push_rows(rows, child, depth + 1);
        }
        scalar => rows.push(JsonRow {
            depth,
            key,
            value: scalar_text(scalar),
        }),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `builderName` / `builder_name` -> `Builder name`
pub fn humanize_key(key: &str) -> String {
    let mut words = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;

    for c in key.chars() {
        if c == '_' || c == '-' {
            words.push(' ');
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            words.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        words.extend(c.to_lowercase());
    }

    let trimmed = words.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "page_render_tests.rs"]
mod page_render_tests;
