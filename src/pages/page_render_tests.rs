//! Tests for page_render

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::json;

fn render_to_string(page: &PageState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_page(f, area, page, 42);
        })
        .unwrap();
    terminal.backend().to_string()
}

fn row(depth: usize, key: Option<&str>, value: &str) -> JsonRow {
    JsonRow {
        depth,
        key: key.map(str::to_string),
        value: value.to_string(),
    }
}

// === json_rows ===

#[test]
fn test_object_rows_are_key_value() {
    let rows = json_rows(&json!({"builderName": "Skyline Homes", "projects": 12}));
    assert_eq!(
        rows,
        vec![
            row(0, Some("Builder name"), "Skyline Homes"),
            row(0, Some("Projects"), "12"),
        ]
    );
}

#[test]
fn test_array_rows_are_bullets() {
    let rows = json_rows(&json!(["Pool", "Gym", true]));
    assert_eq!(
        rows,
        vec![row(0, None, "Pool"), row(0, None, "Gym"), row(0, None, "true")]
    );
}

#[test]
fn test_nested_rows_are_indented() {
    let rows = json_rows(&json!({"bank": {"name": "HDFC", "rate": 8.5}}));
    assert_eq!(
        rows,
        vec![
            row(0, Some("Bank"), ""),
            row(1, Some("Name"), "HDFC"),
            row(1, Some("Rate"), "8.5"),
        ]
    );
}

#[test]
fn test_array_of_objects() {
    let rows = json_rows(&json!([{"stars": 5}, {"stars": 3}]));
    assert_eq!(
        rows,
        vec![
            row(0, None, ""),
            row(1, Some("Stars"), "5"),
            row(0, None, ""),
            row(1, Some("Stars"), "3"),
        ]
    );
}

#[test]
fn test_empty_and_null_values() {
    let rows = json_rows(&json!({"amenities": [], "extra": {}, "notes": null}));
    assert_eq!(
        rows,
        vec![
            row(0, Some("Amenities"), "none"),
            row(0, Some("Extra"), "—"),
            row(0, Some("Notes"), "—"),
        ]
    );
}

#[test]
fn test_scalar_payload() {
    assert_eq!(json_rows(&json!("No ratings yet")), vec![row(0, None, "No ratings yet")]);
    assert_eq!(json_rows(&json!(null)), vec![row(0, None, "—")]);
}

#[test]
fn test_humanize_key() {
    assert_eq!(humanize_key("builderName"), "Builder name");
    assert_eq!(humanize_key("builder_name"), "Builder name");
    assert_eq!(humanize_key("loan-amount"), "Loan amount");
    assert_eq!(humanize_key("rera2Number"), "Rera2 number");
    assert_eq!(humanize_key(""), "");
}

// === render_page ===

#[test]
fn test_home_menu() {
    let output = render_to_string(&PageState::idle(Route::Home), 60, 12);
    assert!(output.contains("Property #42"));
    assert!(output.contains("1  About Property"));
    assert!(output.contains("5  Ratings"));
}

#[test]
fn test_loading_page() {
    let page = PageState {
        route: Route::page(PageKind::Amenities, 42),
        request_id: Some(1),
        status: PageStatus::Loading,
    };
    let output = render_to_string(&page, 60, 8);
    assert!(output.contains("Amenities · #42"));
    assert!(output.contains("Loading…"));
}

#[test]
fn test_failed_page_shows_fallback() {
    let page = PageState {
        route: Route::page(PageKind::BankInfo, 42),
        request_id: Some(1),
        status: PageStatus::Failed("Server returned 500".to_string()),
    };
    let output = render_to_string(&page, 60, 8);
    assert!(output.contains("Bank Info is unavailable right now."));
    assert!(output.contains("Server returned 500"));
}

#[test]
fn test_loaded_page_rows() {
    let page = PageState {
        route: Route::page(PageKind::Ratings, 42),
        request_id: Some(1),
        status: PageStatus::Loaded(json!({"average": 4.5, "reviews": ["Great view"]})),
    };
    let output = render_to_string(&page, 60, 10);
    assert!(output.contains("Average: 4.5"));
    assert!(output.contains("Reviews:"));
    assert!(output.contains("• Great view"));
}

#[test]
fn test_about_page_shows_stepper() {
    let page = PageState {
        route: Route::page(PageKind::AboutProperty, 42),
        request_id: Some(1),
        status: PageStatus::Loaded(json!({"name": "Skyline", "status": 2})),
    };
    let output = render_to_string(&page, 100, 10);
    assert!(output.contains("◉ Site Visit"));
    assert!(output.contains("Name: Skyline"));
}

#[test]
fn test_other_pages_do_not_show_stepper() {
    let page = PageState {
        route: Route::page(PageKind::Ratings, 42),
        request_id: Some(1),
        status: PageStatus::Loaded(json!({"status": 2})),
    };
    let output = render_to_string(&page, 100, 10);
    assert!(!output.contains("Site Visit"));
    assert!(output.contains("Status: 2"));
}
