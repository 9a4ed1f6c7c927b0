//! # Registration approval workflow
//!
//! Teacher-role sessions act on pending student registrations. Approval is a
//! two-phase, non-idempotent action (the backend provisions a real account),
//! so the queue enforces **at most one in-flight mutating request across the
//! whole list**: [`ApprovalQueue::begin`] refuses while any approval or
//! rejection is outstanding. Local state is only mutated after the server
//! acknowledges — nothing changes before confirmation, so there is no
//! rollback path.

use dioxus::prelude::*;

use api::PendingRegistration;

use crate::confirm::ConfirmDialog;
use crate::session::{use_api, use_session};

/// Pending registrations plus the single global in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApprovalQueue {
    items: Vec<PendingRegistration>,
    in_flight: Option<String>,
    pub error: Option<String>,
    pub loaded: bool,
}

impl ApprovalQueue {
    pub fn set_items(&mut self, items: Vec<PendingRegistration>) {
        self.items = items;
        self.loaded = true;
        self.error = None;
    }

    /// A read failed: empty list, visible error, still usable.
    pub fn degrade(&mut self, message: String) {
        self.items.clear();
        self.loaded = true;
        self.error = Some(message);
    }

    pub fn items(&self) -> &[PendingRegistration] {
        &self.items
    }

    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    /// Claim the in-flight slot for `student_id`. Returns `false` — and the
    /// caller must not send anything — while any other action is in flight.
    pub fn begin(&mut self, student_id: &str) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(student_id.to_string());
        true
    }

    /// Server acknowledged: drop the item (terminal state) and release the
    /// flag.
    pub fn complete(&mut self, student_id: &str) {
        self.items.retain(|r| r.student_id() != student_id);
        self.in_flight = None;
    }

    /// Server rejected the call or transport failed: the item stays pending
    /// and the flag is released so the user can retry.
    pub fn abort(&mut self, message: String) {
        self.in_flight = None;
        self.error = Some(message);
    }
}

/// Panel listing pending student registrations with approve/reject actions.
/// Rendered only for teacher sessions. `on_resolved` fires with the student
/// id after a server-acknowledged approval or rejection, so the parent can
/// drop the matching notification.
#[component]
pub fn ApprovalPanel(on_resolved: EventHandler<String>) -> Element {
    let auth = use_session();
    let client = use_api();
    let mut queue = use_signal(ApprovalQueue::default);
    let mut confirm_reject = use_signal(|| Option::<PendingRegistration>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let user_id = auth().session.as_ref().map(|s| s.user_id.clone());

    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        let user_id = user_id.clone();
        async move {
            let Some(user_id) = user_id else { return };
            match client.pending_registrations(&user_id).await {
                Ok(items) => queue.write().set_items(items),
                Err(e) => queue.write().degrade(e.to_string()),
            }
        }
    });

    let approve_client = client.clone();
    let on_approve = move |reg: PendingRegistration| {
        let student_id = reg.student_id();
        // Claim the flag before spawning; a second click (or a click on any
        // other row) is ignored while this request is outstanding.
        if !queue.write().begin(&student_id) {
            return;
        }
        let client = approve_client.clone();
        spawn(async move {
            match client.approve_registration(&student_id).await {
                Ok(()) => {
                    queue.write().complete(&student_id);
                    status.set(Some(format!("Approved {}", reg.full_name)));
                    on_resolved.call(student_id);
                }
                Err(e) => queue.write().abort(e.to_string()),
            }
        });
    };

    let reject_client = client.clone();
    let on_confirm_reject = move |_| {
        let Some(reg) = confirm_reject.take() else {
            return;
        };
        let student_id = reg.student_id();
        if !queue.write().begin(&student_id) {
            return;
        }
        let client = reject_client.clone();
        spawn(async move {
            match client.reject_registration(&student_id).await {
                Ok(()) => {
                    queue.write().complete(&student_id);
                    status.set(Some(format!("Rejected {}", reg.full_name)));
                    on_resolved.call(student_id);
                }
                Err(e) => queue.write().abort(e.to_string()),
            }
        });
    };

    let state = queue();
    let busy = state.in_flight().is_some();

    rsx! {
        section {
            class: "approval-panel",

            header {
                class: "approval-header",
                h2 { "Pending Registrations" }
            }

            if let Some(msg) = status() {
                div { class: "inline-success", "{msg}" }
            }
            if let Some(err) = state.error.clone() {
                div { class: "inline-error", "{err}" }
            }

            if let Some(reg) = confirm_reject() {
                ConfirmDialog {
                    title: "Reject this registration?",
                    message: format!(
                        "Rejecting denies {}'s registration. This cannot be undone.",
                        reg.full_name
                    ),
                    confirm_label: "Reject",
                    on_confirm: on_confirm_reject,
                    on_cancel: move |_| confirm_reject.set(None),
                }
            }

            if !state.loaded {
                div { class: "loading-placeholder", "Loading pending registrations..." }
            } else if state.items().is_empty() {
                div { class: "empty-state", "No registrations waiting for approval." }
            } else {
                ul {
                    class: "approval-list",
                    for reg in state.items().to_vec() {
                        li {
                            key: "{reg.id}",
                            class: "approval-item",
                            div {
                                class: "approval-details",
                                strong { "{reg.full_name}" }
                                span { class: "approval-meta", "{reg.roll_no} \u{00b7} {reg.email}" }
                            }
                            div {
                                class: "approval-actions",
                                button {
                                    class: "approve-btn",
                                    disabled: busy,
                                    onclick: {
                                        let reg = reg.clone();
                                        let mut on_approve = on_approve.clone();
                                        move |_| on_approve(reg.clone())
                                    },
                                    "Approve"
                                }
                                button {
                                    class: "reject-btn",
                                    disabled: busy,
                                    onclick: {
                                        let reg = reg.clone();
                                        move |_| confirm_reject.set(Some(reg.clone()))
                                    },
                                    "Reject"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(id: i64, name: &str) -> PendingRegistration {
        PendingRegistration {
            id,
            full_name: name.to_string(),
            roll_no: format!("20261024{id:02}"),
            email: format!("student{id}@gmail.com"),
            created_at: "2026-02-19T08:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn begin_claims_the_flag() {
        let mut queue = ApprovalQueue::default();
        queue.set_items(vec![pending(1, "Ravi"), pending(2, "Meena")]);
        assert!(queue.begin("1"));
        assert_eq!(queue.in_flight(), Some("1"));
    }

    #[test]
    fn second_action_refused_while_first_in_flight() {
        let mut queue = ApprovalQueue::default();
        queue.set_items(vec![pending(1, "Ravi"), pending(2, "Meena")]);
        assert!(queue.begin("1"));
        // Different item, still refused: the flag is global to the list.
        assert!(!queue.begin("2"));
        // Same item double-click refused too.
        assert!(!queue.begin("1"));
    }

    #[test]
    fn complete_removes_item_and_clears_flag() {
        let mut queue = ApprovalQueue::default();
        queue.set_items(vec![pending(1, "Ravi"), pending(2, "Meena")]);
        assert!(queue.begin("1"));
        queue.complete("1");
        assert!(queue.in_flight().is_none());
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].full_name, "Meena");
        // Flag is free again for the next action.
        assert!(queue.begin("2"));
    }

    #[test]
    fn abort_keeps_item_pending_and_allows_retry() {
        let mut queue = ApprovalQueue::default();
        queue.set_items(vec![pending(1, "Ravi")]);
        assert!(queue.begin("1"));
        queue.abort("server error".to_string());
        assert_eq!(queue.items().len(), 1);
        assert!(queue.in_flight().is_none());
        assert!(queue.error.is_some());
        assert!(queue.begin("1"));
    }
}
