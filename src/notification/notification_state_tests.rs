//! Tests for notification_state

use super::*;
use crate::notification::NotificationKind;
use proptest::prelude::*;

#[test]
fn test_new_store_is_hidden() {
    let store = NotificationStore::new();
    assert!(!store.is_visible());
    assert!(store.descriptor().is_none());
    assert!(store.visible_descriptor().is_none());
    assert_eq!(store.generation(), 0);
    assert_eq!(store.shown_at(), None);
}

#[test]
fn test_show_sets_visible() {
    let mut store = NotificationStore::new();
    store.show_success("Saved", "Lead updated");

    assert!(store.is_visible());
    assert_eq!(store.current_title(), Some("Saved"));
    assert_eq!(store.generation(), 1);
    assert!(store.shown_at().is_some());
}

#[test]
fn test_show_records_instant() {
    let mut store = NotificationStore::new();
    let at = Instant::now();
    store.show_notification_at(NotificationDescriptor::info("Synced", "3 leads"), at);
    assert_eq!(store.shown_at(), Some(at));
}

#[test]
fn test_hide_keeps_descriptor() {
    let mut store = NotificationStore::new();
    store.show_notification(
        NotificationDescriptor::warning("Slow network", "Retrying later").with_redirect("/"),
    );
    store.hide_notification();

    assert!(!store.is_visible());
    assert!(store.visible_descriptor().is_none());

    let kept = store.descriptor().unwrap();
    assert_eq!(kept.title, "Slow network");
    assert_eq!(kept.redirect(), Some("/"));
}

#[test]
fn test_hide_when_hidden_is_noop() {
    let mut store = NotificationStore::new();
    store.hide_notification();
    assert!(!store.is_visible());
    assert_eq!(store.generation(), 0);

    store.show_info("Note", "Visit booked");
    store.hide_notification();
    store.hide_notification();
    assert!(!store.is_visible());
    assert_eq!(store.generation(), 1);
}

#[test]
fn test_show_replaces_visible_descriptor() {
    let mut store = NotificationStore::new();
    store.show_success("First", "one");
    store.show_error("Second", "two");

    assert_eq!(store.current_title(), Some("Second"));
    assert_eq!(store.descriptor().unwrap().kind, NotificationKind::Error);
    assert_eq!(store.generation(), 2);
}

#[test]
fn test_show_replaces_hidden_descriptor() {
    let mut store = NotificationStore::new();
    store.show_success("First", "one");
    store.hide_notification();
    store.show_warning("Second", "two");

    assert!(store.is_visible());
    assert_eq!(store.current_title(), Some("Second"));
}

#[test]
fn test_convenience_constructors_set_kind() {
    let mut store = NotificationStore::new();

    store.show_success("t", "m");
    assert_eq!(store.descriptor().unwrap().kind, NotificationKind::Success);
    store.show_error("t", "m");
    assert_eq!(store.descriptor().unwrap().kind, NotificationKind::Error);
    store.show_info("t", "m");
    assert_eq!(store.descriptor().unwrap().kind, NotificationKind::Info);
    store.show_warning("t", "m");
    assert_eq!(store.descriptor().unwrap().kind, NotificationKind::Warning);
}

#[test]
fn test_store_does_not_validate() {
    let mut store = NotificationStore::new();
    store.show_notification(NotificationDescriptor::info("", ""));
    assert!(store.is_visible());
    assert_eq!(store.current_title(), Some(""));
}

fn kind_strategy() -> impl Strategy<Value = NotificationKind> {
    prop::sample::select(NotificationKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any sequence of shows, only the most recent descriptor is current.
    #[test]
    fn prop_latest_show_wins(
        shows in prop::collection::vec((kind_strategy(), "[a-zA-Z0-9 ]{1,30}"), 1..12),
        hide_between in any::<bool>(),
    ) {
        let mut store = NotificationStore::new();

        for (kind, title) in &shows {
            store.show_notification(NotificationDescriptor::new(*kind, title.clone(), "body"));
            if hide_between {
                store.hide_notification();
                store.hide_notification();
            }
        }

        let (last_kind, last_title) = shows.last().unwrap();
        let current = store.descriptor().unwrap();
        prop_assert_eq!(&current.title, last_title);
        prop_assert_eq!(current.kind, *last_kind);
        prop_assert_eq!(store.generation(), shows.len() as u64);
        prop_assert_eq!(store.is_visible(), !hide_between);
    }
}
