use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::pages::render_page;
use crate::router::Route;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        render_page(frame, layout[0], &self.page, self.property_id);
        self.render_help_line(frame, layout[1]);

        // Drawn last so the card sits above the page
        render_notification(frame, &self.notification);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&'static str, &'static str)] = if self.notification.is_visible() {
            &[("Enter", "Action"), ("Esc", "Close"), ("Ctrl+C", "Quit")]
        } else if self.router.current() == &Route::Home {
            &[("1-5", "Open page"), ("q", "Quit")]
        } else {
            &[("Esc", "Back"), ("r", "Reload"), ("h", "Home"), ("q", "Quit")]
        };

        let line = theme::help_line::hints(hints);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use crate::notification::NotificationDescriptor;
    use crate::router::{PageKind, Route};
    use crate::test_utils::test_helpers::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &mut crate::app::App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_home_shows_menu_and_hints() {
        let mut app = test_app();
        let output = render(&mut app);

        assert!(output.contains("Property #1"));
        assert!(output.contains("3  Amenities"));
        assert!(output.contains("Open page"));
    }

    #[test]
    fn test_notification_drawn_over_page() {
        let mut app = test_app();
        app.notification.show_notification(
            NotificationDescriptor::success("Saved", "Lead updated").with_action_label("Done"),
        );
        let output = render(&mut app);

        assert!(output.contains("✓ Saved"));
        assert!(output.contains("[ Done ]"));
        assert!(output.contains("Close"));
    }

    #[test]
    fn test_page_hints() {
        let mut app = test_app();
        app.router.push(Route::page(PageKind::Ratings, 1));
        app.sync_route().unwrap();
        // No backend in tests, so the mount raised an error card
        app.presenter.close(&mut app.notification);
        let output = render(&mut app);

        assert!(output.contains("Ratings · #1"));
        assert!(output.contains("Reload"));
    }
}
