//! # Notification feed
//!
//! [`FeedState`] is the local cache of the server-owned notification list.
//! The cache is only mutated after a server acknowledgment: a delete removes
//! the one acknowledged item without a re-fetch, clear-all empties it, and a
//! failed call leaves it untouched so the user can retry. Ordering is
//! server-defined and never re-sorted here.

use dioxus::prelude::*;

use api::{Notification, NotificationKind};

use crate::approvals::ApprovalPanel;
use crate::confirm::ConfirmDialog;
use crate::session::{use_api, use_session};
use store::UserRole;

/// Local cache of the notification list plus its error banner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub items: Vec<Notification>,
    pub error: Option<String>,
    pub loaded: bool,
}

impl FeedState {
    /// Replace the cache with a fresh server result.
    pub fn set_items(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.loaded = true;
        self.error = None;
    }

    /// A read failed: degrade to an empty list plus a non-fatal error.
    pub fn degrade(&mut self, message: String) {
        self.items.clear();
        self.loaded = true;
        self.error = Some(message);
    }

    /// Remove one acknowledged notification. Returns `false` (cache
    /// unchanged) if the id is not present.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Remove the registration-request notification for a student whose
    /// registration was just approved or rejected.
    pub fn remove_registration_request(&mut self, student_id: &str) {
        self.items
            .retain(|n| n.payload.student_id() != Some(student_id));
    }

    /// Empty the cache after an acknowledged clear-all. A successful clear
    /// also discards any error left by an earlier failed action.
    pub fn clear(&mut self) {
        self.items.clear();
        self.error = None;
    }
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notif-icon info",
        NotificationKind::Success => "notif-icon success",
        NotificationKind::Warning => "notif-icon warning",
        NotificationKind::RegistrationRequest => "notif-icon registration",
        NotificationKind::Other => "notif-icon other",
    }
}

fn kind_glyph(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "i",
        NotificationKind::Success => "\u{2713}",
        NotificationKind::Warning => "!",
        NotificationKind::RegistrationRequest => "+",
        NotificationKind::Other => "\u{2022}",
    }
}

/// The notifications page body: the feed, and for teacher sessions the
/// pending-registration approval panel above it. The two subsystems load and
/// fail independently; an approval resolution also removes the matching
/// registration-request notification from the feed.
#[component]
pub fn NotificationsPanel() -> Element {
    let auth = use_session();
    let client = use_api();
    let mut feed = use_signal(FeedState::default);
    let mut confirm_clear = use_signal(|| false);

    let user_id = auth().session.as_ref().map(|s| s.user_id.clone());
    let is_teacher = auth()
        .session
        .as_ref()
        .is_some_and(|s| s.role == UserRole::Teacher);

    // Initial fetch; a transport failure degrades to an empty list with a
    // visible, non-fatal error.
    let fetch_id = user_id.clone();
    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        let user_id = fetch_id.clone();
        async move {
            let Some(user_id) = user_id else { return };
            match client.notifications(&user_id).await {
                Ok(items) => feed.write().set_items(items),
                Err(e) => feed.write().degrade(e.to_string()),
            }
        }
    });

    let delete_id = user_id.clone();
    let delete_client = client.clone();
    let on_delete = move |notif_id: i64| {
        let client = delete_client.clone();
        let user_id = delete_id.clone();
        spawn(async move {
            let Some(user_id) = user_id else { return };
            // Local removal only after the server acknowledges; on failure
            // the item stays visible so the user can retry.
            match client.delete_notification(&user_id, notif_id).await {
                Ok(()) => {
                    if !feed.write().remove(notif_id) {
                        tracing::warn!("deleted notification {notif_id} was not in the cache");
                    }
                }
                Err(e) => feed.write().error = Some(e.to_string()),
            }
        });
    };

    let clear_id = user_id.clone();
    let clear_client = client.clone();
    let on_confirm_clear = move |_| {
        confirm_clear.set(false);
        let client = clear_client.clone();
        let user_id = clear_id.clone();
        spawn(async move {
            let Some(user_id) = user_id else { return };
            match client.clear_notifications(&user_id).await {
                Ok(()) => feed.write().clear(),
                Err(e) => feed.write().error = Some(e.to_string()),
            }
        });
    };

    let state = feed();

    rsx! {
        div {
            class: "notifications-panel",

            if is_teacher {
                ApprovalPanel {
                    on_resolved: move |student_id: String| {
                        feed.write().remove_registration_request(&student_id);
                    },
                }
            }

            header {
                class: "notifications-header",
                div {
                    h1 { "Notifications" }
                    p { "Stay updated with your placement journey" }
                }
                button {
                    class: "clear-all-btn",
                    disabled: state.items.is_empty(),
                    onclick: move |_| confirm_clear.set(true),
                    "Clear All"
                }
            }

            if let Some(err) = state.error.clone() {
                div { class: "inline-error", "{err}" }
            }

            if confirm_clear() {
                ConfirmDialog {
                    title: "Clear all notifications?",
                    message: "This removes every notification permanently.",
                    confirm_label: "Clear All",
                    on_confirm: on_confirm_clear,
                    on_cancel: move |_| confirm_clear.set(false),
                }
            }

            if !state.loaded {
                div { class: "loading-placeholder", "Loading notifications..." }
            } else if state.items.is_empty() {
                div { class: "empty-state", "You're all caught up!" }
            } else {
                div {
                    class: "notifications-list",
                    for notif in state.items.clone() {
                        NotificationItem {
                            key: "{notif.id}",
                            notification: notif.clone(),
                            on_delete: on_delete.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(notification: Notification, on_delete: EventHandler<i64>) -> Element {
    let read_class = if notification.is_read { "read" } else { "unread" };
    let when = notification.created_at.format("%b %d, %H:%M").to_string();

    rsx! {
        div {
            class: "notification-item {read_class}",
            div {
                class: kind_class(notification.kind),
                {kind_glyph(notification.kind)}
            }
            div {
                class: "notif-content",
                div {
                    class: "notif-top",
                    h3 { "{notification.title}" }
                    span { class: "notif-time", "{when}" }
                }
                p { "{notification.message}" }
            }
            if !notification.is_read {
                div { class: "unread-dot" }
            }
            button {
                class: "notif-delete-btn",
                onclick: move |_| on_delete.call(notification.id),
                "\u{00d7}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::NotificationPayload;
    use api::NotificationKind;

    fn notif(id: i64) -> Notification {
        Notification {
            id,
            kind: NotificationKind::Info,
            title: format!("Notification {id}"),
            message: "message".to_string(),
            is_read: false,
            created_at: "2026-02-20T10:15:00Z".parse().unwrap(),
            payload: NotificationPayload::None,
        }
    }

    fn registration_notif(id: i64, student_id: &str) -> Notification {
        Notification {
            kind: NotificationKind::RegistrationRequest,
            payload: NotificationPayload::RegistrationRequest {
                student_id: student_id.to_string(),
                full_name: "Ravi Kumar".to_string(),
                roll_no: "2026102400".to_string(),
            },
            ..notif(id)
        }
    }

    #[test]
    fn remove_acknowledged_item() {
        let mut feed = FeedState::default();
        feed.set_items(vec![notif(1), notif(2)]);
        assert!(feed.remove(1));
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].id, 2);
    }

    #[test]
    fn remove_unknown_id_leaves_cache_unchanged() {
        let mut feed = FeedState::default();
        feed.set_items(vec![notif(1), notif(2)]);
        assert!(!feed.remove(99));
        assert_eq!(feed.items.len(), 2);
    }

    #[test]
    fn clear_empties_cache_and_drops_stale_error() {
        let mut feed = FeedState::default();
        feed.set_items(vec![notif(1), notif(2)]);
        feed.error = Some("delete failed".to_string());
        feed.clear();
        assert!(feed.items.is_empty());
        assert_eq!(feed.error, None);
    }

    #[test]
    fn degrade_keeps_feed_usable() {
        let mut feed = FeedState::default();
        feed.degrade("could not reach the server".to_string());
        assert!(feed.loaded);
        assert!(feed.items.is_empty());
        assert!(feed.error.is_some());
    }

    #[test]
    fn resolved_registration_is_removed_from_feed() {
        let mut feed = FeedState::default();
        feed.set_items(vec![notif(1), registration_notif(2, "17"), notif(3)]);
        feed.remove_registration_request("17");
        assert_eq!(feed.items.len(), 2);
        assert!(feed.items.iter().all(|n| n.id != 2));
        // Unrelated student id removes nothing
        feed.remove_registration_request("99");
        assert_eq!(feed.items.len(), 2);
    }
}
