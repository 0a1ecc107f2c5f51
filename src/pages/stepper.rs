//! Lead status stepper
//!
//! Pure rendering over a stage index: stages before it are done, the index
//! is current, the rest are pending.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use serde_json::Value;

use crate::theme;

pub const LEAD_STAGES: [&str; 5] = ["New", "Contacted", "Site Visit", "Negotiation", "Booked"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

impl StepState {
    pub fn marker(self) -> &'static str {
        match self {
            StepState::Done => "●",
            StepState::Current => "◉",
            StepState::Pending => "○",
        }
    }

    fn style(self) -> Style {
        match self {
            StepState::Done => Style::default().fg(theme::stepper::DONE),
            StepState::Current => theme::stepper::CURRENT,
            StepState::Pending => Style::default().fg(theme::stepper::PENDING),
        }
    }
}

/// State of each of `count` steps; an index past the end clamps to the last step
pub fn step_states(index: usize, count: usize) -> Vec<StepState> {
    if count == 0 {
        return Vec::new();
    }
    let current = index.min(count - 1);

    (0..count)
        .map(|step| match step.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Done,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Pending,
        })
        .collect()
}

pub fn stepper_line(index: usize, stages: &[&'static str]) -> Line<'static> {
    let mut spans = Vec::with_capacity(stages.len() * 2);

    for (i, (stage, state)) in stages
        .iter()
        .zip(step_states(index, stages.len()))
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(
                " ── ",
                Style::default().fg(theme::stepper::CONNECTOR),
            ));
        }
        spans.push(Span::styled(
            format!("{} {}", state.marker(), stage),
            state.style(),
        ));
    }

    Line::from(spans)
}

/// Stage index carried by a property payload's numeric `status` field
pub fn status_index(body: &Value) -> Option<usize> {
    body.get("status")?.as_u64().map(|index| index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_step_states_middle() {
        assert_eq!(
            step_states(2, 5),
            vec![
                StepState::Done,
                StepState::Done,
                StepState::Current,
                StepState::Pending,
                StepState::Pending,
            ]
        );
    }

    #[test]
    fn test_step_states_first_and_last() {
        assert_eq!(step_states(0, 3)[0], StepState::Current);
        assert_eq!(step_states(2, 3), vec![StepState::Done, StepState::Done, StepState::Current]);
    }

    #[test]
    fn test_step_states_clamps_out_of_range() {
        assert_eq!(step_states(99, 3), step_states(2, 3));
    }

    #[test]
    fn test_step_states_empty() {
        assert!(step_states(0, 0).is_empty());
    }

    #[test]
    fn test_stepper_line_text() {
        let line = stepper_line(1, &LEAD_STAGES);
        assert_eq!(
            line_text(&line),
            "● New ── ◉ Contacted ── ○ Site Visit ── ○ Negotiation ── ○ Booked"
        );
    }

    #[test]
    fn test_current_step_is_highlighted() {
        let line = stepper_line(1, &LEAD_STAGES);
        let current = line
            .spans
            .iter()
            .find(|s| s.content.contains("Contacted"))
            .unwrap();
        assert_eq!(current.style, theme::stepper::CURRENT);
    }

    #[test]
    fn test_status_index() {
        assert_eq!(status_index(&json!({"status": 3})), Some(3));
        assert_eq!(status_index(&json!({"status": "3"})), None);
        assert_eq!(status_index(&json!({"name": "Skyline"})), None);
        assert_eq!(status_index(&json!([1, 2])), None);
    }
}
