use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::error::LeadlineError;
use crate::notification::{NotificationError, NotificationScope};
use crate::router::{Navigator, PageKind, Route};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> Result<(), LeadlineError> {
        self.update(Instant::now())?;

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?;
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Advance timers and drain fetch responses
    pub fn update(&mut self, now: Instant) -> Result<(), NotificationError> {
        if self.presenter.tick_at(&mut self.notification, now) {
            self.mark_dirty();
        }

        let mut scope = NotificationScope::provided(&mut self.notification);
        if self.loader.poll(&mut self.page, &mut scope)? {
            self.mark_dirty();
        }

        // A failed fetch may have raised a notification; arm its timer now
        self.presenter.sync(&self.notification);
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), NotificationError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.notification.is_visible() && self.handle_notification_key(key) {
            self.mark_dirty();
            return self.sync_route();
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.router.back();
            }
            KeyCode::Char('r') => {
                let path = self.router.current().path();
                self.router.navigate(&path);
            }
            KeyCode::Char('h') => self.router.navigate("/"),
            KeyCode::Char(c @ '1'..='5') if self.router.current() == &Route::Home => {
                let index = c as usize - '1' as usize;
                let target = Route::page(PageKind::ALL[index], self.property_id);
                self.router.navigate(&target.path());
            }
            _ => return Ok(()),
        }

        self.mark_dirty();
        self.sync_route()
    }

    /// Returns true if the key was consumed by the notification card
    fn handle_notification_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.presenter
                    .invoke_action(&mut self.notification, &mut self.router);
                true
            }
            KeyCode::Esc => self.presenter.close(&mut self.notification),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
