//! Blocking result messages (success / error) with an optional action
//! that runs when the user dismisses the message.

use crate::shared::i18n::ResourceBundle;
use crate::shared::modal::Modal;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;

/// Action run once when a message is dismissed
pub type OnClose = Box<dyn FnOnce()>;

/// Where view models send user-facing result messages.
pub trait MessageSink {
    fn success(&self, text: String, on_close: Option<OnClose>);
    fn error(&self, text: String);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

/// Queue of messages; the first one is on screen.
#[derive(Clone, Copy)]
pub struct MessageBoxService {
    queue: RwSignal<Vec<MessageEntry>>,
    next_id: RwSignal<u64>,
    actions: StoredValue<HashMap<u64, OnClose>, LocalStorage>,
}

impl MessageBoxService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            actions: StoredValue::new_local(HashMap::new()),
        }
    }

    fn push(&self, kind: MessageKind, text: String, on_close: Option<OnClose>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        if let Some(action) = on_close {
            self.actions.update_value(|actions| {
                actions.insert(id, action);
            });
        }
        self.queue.update(|q| q.push(MessageEntry { id, kind, text }));
    }

    pub fn current(&self) -> Option<MessageEntry> {
        self.queue.with(|q| q.first().cloned())
    }

    /// Dismiss the message on screen and run its action.
    ///
    /// The action runs on the next tick, after the click that closed the
    /// message has finished dispatching.
    pub fn close_current(&self) {
        let Some(entry) = self.queue.with_untracked(|q| q.first().cloned()) else {
            return;
        };
        self.queue.update(|q| {
            q.retain(|m| m.id != entry.id);
        });

        let mut action = None;
        self.actions.update_value(|actions| action = actions.remove(&entry.id));
        if let Some(action) = action {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                action();
            });
        }
    }
}

impl Default for MessageBoxService {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for MessageBoxService {
    fn success(&self, text: String, on_close: Option<OnClose>) {
        log::info!("message (success): {}", text);
        self.push(MessageKind::Success, text, on_close);
    }

    fn error(&self, text: String) {
        log::warn!("message (error): {}", text);
        self.push(MessageKind::Error, text, None);
    }
}

/// Renders the message at the head of the queue
#[component]
pub fn MessageBoxHost() -> impl IntoView {
    let service = expect_context::<MessageBoxService>();
    let bundle = ResourceBundle::default();
    let on_close = Callback::new(move |_| service.close_current());

    move || {
        service.current().map(|entry| {
            let (title, class) = match entry.kind {
                MessageKind::Success => (bundle.text("messageSuccessTitle"), "modal--success"),
                MessageKind::Error => (bundle.text("messageErrorTitle"), "modal--error"),
            };
            view! {
                <Modal title=title class=class on_close=on_close>
                    <p class="message-text">{entry.text}</p>
                    <div class="details-actions">
                        <button class="button button--primary" on:click=move |_| on_close.run(())>
                            {bundle.text("btnOk")}
                        </button>
                    </div>
                </Modal>
            }
        })
    }
}
