use std::sync::mpsc::{Receiver, Sender};

use crate::api::{FetchRequest, FetchResponse};
use crate::config::Config;
use crate::notification::{
    NotificationDescriptor, NotificationError, NotificationPresenter, NotificationScope,
    NotificationStore,
};
use crate::pages::{PageLoader, PageState};
use crate::router::{Route, Router};

pub struct App {
    /// Property the home menu opens pages for
    pub property_id: u64,
    pub router: Router,
    pub page: PageState,
    pub loader: PageLoader,
    pub notification: NotificationStore,
    pub presenter: NotificationPresenter,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(property_id: u64, start: Route, config: &Config) -> Self {
        Self {
            property_id,
            page: PageState::idle(start.clone()),
            router: Router::new(start),
            loader: PageLoader::new(),
            notification: NotificationStore::new(),
            presenter: NotificationPresenter::new(config.notification.dismiss_delay()),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_fetch_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.loader.set_channels(request_tx, response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Scope handing the app's notification store to a view
    pub fn notifications(&mut self) -> NotificationScope<'_> {
        NotificationScope::provided(&mut self.notification)
    }

    /// Apply what the router recorded: warn about rejected targets and mount
    /// the current route if it changed.
    pub fn sync_route(&mut self) -> Result<(), NotificationError> {
        if let Some(rejected) = self.router.take_rejected() {
            self.notification.show_notification(NotificationDescriptor::warning(
                "Page not found",
                rejected.to_string(),
            ));
            self.dirty = true;
        }

        if self.router.take_mount_pending() {
            let route = self.router.current().clone();
            let mut scope = NotificationScope::provided(&mut self.notification);
            self.page = self.loader.mount(&route, &mut scope)?;
            self.dirty = true;
        }

        Ok(())
    }
}
