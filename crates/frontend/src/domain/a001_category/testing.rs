//! In-memory fakes for controller tests. Completions are parked until a test
//! resolves them, so request ordering can be driven step by step.

use super::model::{CategoryFacade, Completion, ElementEvents, FetchError, DEFAULT_SIZE_LIMIT};
use crate::routes::{Navigator, Route, Target};
use crate::shared::message_box::{MessageKind, MessageSink, OnClose};
use contracts::domain::a001_category::aggregate::Category;
use contracts::shared::filter::SearchFilter;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum FacadeCall {
    Create { collection: String, entity: Category },
    Update { key_path: String, entity: Category },
    Remove { key_path: String },
    SetUseBatch(bool),
    SetSizeLimit(usize),
    BindElement { key_path: String },
    ReadList { collection: String, filters: Vec<SearchFilter> },
}

/// Element binding waiting for its response; `data_requested` already fired.
struct PendingElement {
    data_received: Box<dyn FnOnce()>,
    change: Box<dyn FnOnce(Result<Option<Category>, FetchError>)>,
}

pub struct FakeFacade {
    calls: RefCell<Vec<FacadeCall>>,
    size_limit: Cell<usize>,
    writes: RefCell<VecDeque<Completion<()>>>,
    elements: RefCell<VecDeque<PendingElement>>,
    lists: RefCell<VecDeque<Completion<Vec<Category>>>>,
}

impl Default for FakeFacade {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            size_limit: Cell::new(DEFAULT_SIZE_LIMIT),
            writes: RefCell::new(VecDeque::new()),
            elements: RefCell::new(VecDeque::new()),
            lists: RefCell::new(VecDeque::new()),
        }
    }
}

impl FakeFacade {
    pub fn calls(&self) -> Vec<FacadeCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Filters of the most recent list fetch
    pub fn last_list_filters(&self) -> Option<Vec<SearchFilter>> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            FacadeCall::ReadList { filters, .. } => Some(filters.clone()),
            _ => None,
        })
    }

    pub fn pending_writes(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn pending_elements(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn pending_lists(&self) -> usize {
        self.lists.borrow().len()
    }

    /// Complete the oldest create/update/remove
    pub fn resolve_write(&self, result: Result<(), FetchError>) {
        let done = self.writes.borrow_mut().pop_front().expect("no pending write");
        done(result);
    }

    /// Complete the oldest element binding
    pub fn resolve_element(&self, result: Result<Option<Category>, FetchError>) {
        let pending = self
            .elements
            .borrow_mut()
            .pop_front()
            .expect("no pending element binding");
        (pending.data_received)();
        (pending.change)(result);
    }

    /// Complete the oldest list fetch
    pub fn resolve_list(&self, result: Result<Vec<Category>, FetchError>) {
        let done = self.lists.borrow_mut().pop_front().expect("no pending list fetch");
        done(result);
    }

    /// Complete the newest list fetch, leaving older ones pending
    pub fn resolve_latest_list(&self, result: Result<Vec<Category>, FetchError>) {
        let done = self.lists.borrow_mut().pop_back().expect("no pending list fetch");
        done(result);
    }

    fn record(&self, call: FacadeCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl CategoryFacade for FakeFacade {
    fn create(&self, collection: &str, entity: Category, done: Completion<()>) {
        self.record(FacadeCall::Create {
            collection: collection.to_string(),
            entity,
        });
        self.writes.borrow_mut().push_back(done);
    }

    fn update(&self, key_path: &str, entity: Category, done: Completion<()>) {
        self.record(FacadeCall::Update {
            key_path: key_path.to_string(),
            entity,
        });
        self.writes.borrow_mut().push_back(done);
    }

    fn remove(&self, key_path: &str, done: Completion<()>) {
        self.record(FacadeCall::Remove {
            key_path: key_path.to_string(),
        });
        self.writes.borrow_mut().push_back(done);
    }

    fn set_use_batch(&self, use_batch: bool) {
        self.record(FacadeCall::SetUseBatch(use_batch));
    }

    fn set_size_limit(&self, limit: usize) {
        self.record(FacadeCall::SetSizeLimit(limit));
        self.size_limit.set(limit);
    }

    fn size_limit(&self) -> usize {
        self.size_limit.get()
    }

    fn bind_element(&self, key_path: &str, events: ElementEvents) {
        self.record(FacadeCall::BindElement {
            key_path: key_path.to_string(),
        });
        (events.data_requested)();
        self.elements.borrow_mut().push_back(PendingElement {
            data_received: events.data_received,
            change: events.change,
        });
    }

    fn read_list(&self, collection: &str, filters: &[SearchFilter], done: Completion<Vec<Category>>) {
        self.record(FacadeCall::ReadList {
            collection: collection.to_string(),
            filters: filters.to_vec(),
        });
        self.lists.borrow_mut().push_back(done);
    }
}

pub struct FakeNavigator {
    pub navigations: RefCell<Vec<(Route, bool)>>,
    pub targets: RefCell<Vec<Target>>,
    pub backs: Cell<u32>,
    pub previous_entry: Cell<bool>,
}

impl Default for FakeNavigator {
    fn default() -> Self {
        Self {
            navigations: RefCell::new(Vec::new()),
            targets: RefCell::new(Vec::new()),
            backs: Cell::new(0),
            previous_entry: Cell::new(true),
        }
    }
}

impl Navigator for FakeNavigator {
    fn nav_to(&self, route: Route, replace_history: bool) {
        self.navigations.borrow_mut().push((route, replace_history));
    }

    fn display_target(&self, target: Target) {
        self.targets.borrow_mut().push(target);
    }

    fn history_back(&self) {
        self.backs.set(self.backs.get() + 1);
    }

    fn has_previous_entry(&self) -> bool {
        self.previous_entry.get()
    }

    fn location_href(&self) -> String {
        "http://localhost:8080/?route=worklist".to_string()
    }
}

#[derive(Default)]
pub struct FakeMessages {
    pub shown: RefCell<Vec<(MessageKind, String)>>,
    actions: RefCell<Vec<OnClose>>,
}

impl FakeMessages {
    pub fn kinds(&self) -> Vec<MessageKind> {
        self.shown.borrow().iter().map(|(k, _)| *k).collect()
    }

    /// Close every message on screen, running their on-close actions
    pub fn dismiss_all(&self) {
        let actions: Vec<OnClose> = self.actions.borrow_mut().drain(..).collect();
        for action in actions {
            action();
        }
    }
}

impl MessageSink for FakeMessages {
    fn success(&self, text: String, on_close: Option<OnClose>) {
        self.shown.borrow_mut().push((MessageKind::Success, text));
        if let Some(action) = on_close {
            self.actions.borrow_mut().push(action);
        }
    }

    fn error(&self, text: String) {
        self.shown.borrow_mut().push((MessageKind::Error, text));
    }
}
