use crate::domain::a001_category::model::{categories_path, CategoryFacade, ElementEvents, FetchError};
use crate::routes::{Navigator, Route, Target, NEW_OBJECT_ID};
use crate::shared::i18n::ResourceBundle;
use crate::shared::message_box::MessageSink;
use crate::shared::state::{Liveness, RequestScope, ViewStore};
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// Mode of the object page. Editability and buttons derive from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectMode {
    Creating,
    #[default]
    Viewing,
    Editing,
    NotFound,
}

/// Inputs of the object page state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeEvent {
    /// Route matched with the "new" id
    MatchedNew,
    /// Route matched with an entity id
    MatchedExisting,
    /// Element binding delivered an entity
    Resolved,
    /// Element binding delivered nothing
    Missing,
    Edit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldState {
    pub id_editable: bool,
    pub name_editable: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSet {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub save: bool,
}

impl ObjectMode {
    pub fn transition(self, event: ModeEvent) -> ObjectMode {
        match (self, event) {
            (_, ModeEvent::MatchedNew) => ObjectMode::Creating,
            (_, ModeEvent::MatchedExisting) => ObjectMode::Viewing,
            // re-fetch after save keeps the page in edit mode
            (ObjectMode::Editing, ModeEvent::Resolved) => ObjectMode::Editing,
            (_, ModeEvent::Resolved) => ObjectMode::Viewing,
            (_, ModeEvent::Missing) => ObjectMode::NotFound,
            (ObjectMode::Viewing, ModeEvent::Edit) => ObjectMode::Editing,
            (mode, ModeEvent::Edit) => mode,
        }
    }

    pub fn fields(self) -> FieldState {
        match self {
            ObjectMode::Creating => FieldState {
                id_editable: true,
                name_editable: true,
            },
            ObjectMode::Viewing | ObjectMode::Editing => FieldState {
                id_editable: false,
                name_editable: true,
            },
            ObjectMode::NotFound => FieldState {
                id_editable: false,
                name_editable: false,
            },
        }
    }

    pub fn buttons(self) -> ButtonSet {
        match self {
            ObjectMode::Creating => ButtonSet {
                create: true,
                ..Default::default()
            },
            ObjectMode::Viewing => ButtonSet {
                edit: true,
                ..Default::default()
            },
            ObjectMode::Editing => ButtonSet {
                delete: true,
                save: true,
                ..Default::default()
            },
            ObjectMode::NotFound => ButtonSet::default(),
        }
    }
}

/// Text of the two inputs, as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub id_text: String,
    pub name_text: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id_text: category.id.as_string(),
            name_text: category.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectViewState {
    pub mode: ObjectMode,
    pub busy: bool,
    /// Requests in flight
    pub pending: u32,
    pub form: CategoryForm,
    pub share_subject: String,
    pub share_message: String,
}

impl Default for ObjectViewState {
    fn default() -> Self {
        Self {
            mode: ObjectMode::default(),
            // busy until the first route match
            busy: true,
            pending: 0,
            form: CategoryForm::default(),
            share_subject: String::new(),
            share_message: String::new(),
        }
    }
}

impl ObjectViewState {
    fn begin_request(&mut self) {
        self.pending += 1;
        self.busy = true;
    }

    fn end_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        self.busy = self.pending > 0;
    }
}

pub fn create_state() -> RwSignal<ObjectViewState> {
    RwSignal::new(ObjectViewState::default())
}

/// Controller of the object page: bind, create, edit, save and delete one
/// category.
#[derive(Clone)]
pub struct ObjectViewModel<S: ViewStore<ObjectViewState>> {
    pub state: S,
    facade: Rc<dyn CategoryFacade>,
    navigator: Rc<dyn Navigator>,
    messages: Rc<dyn MessageSink>,
    bundle: ResourceBundle,
    scope: RequestScope,
}

impl<S: ViewStore<ObjectViewState>> ObjectViewModel<S> {
    pub fn new(
        state: S,
        facade: Rc<dyn CategoryFacade>,
        navigator: Rc<dyn Navigator>,
        messages: Rc<dyn MessageSink>,
    ) -> Self {
        Self {
            state,
            facade,
            navigator,
            messages,
            bundle: ResourceBundle::default(),
            scope: RequestScope::new(),
        }
    }

    pub fn scope(&self) -> &RequestScope {
        &self.scope
    }

    // ========================================================================
    // Route matching and element binding
    // ========================================================================

    pub fn on_object_matched(&self, object_id: &str) {
        log::info!("object page: matched '{}'", object_id);
        // requests of the previous match must not touch the new one
        self.scope.invalidate();

        if object_id == NEW_OBJECT_ID {
            self.state.modify(|s| {
                s.mode = s.mode.transition(ModeEvent::MatchedNew);
                s.form = CategoryForm::default();
                s.pending = 0;
                s.busy = false;
                s.share_subject.clear();
                s.share_message.clear();
            });
            return;
        }

        self.state.modify(|s| {
            s.mode = s.mode.transition(ModeEvent::MatchedExisting);
            s.pending = 0;
        });

        match CategoryId::from_string(object_id) {
            Ok(id) => {
                let key_path = self.facade.create_key(&categories_path(), id);
                self.bind_view(&key_path);
            }
            Err(e) => {
                log::warn!("object page: bad object id '{}': {}", object_id, e);
                self.on_binding_change(&self.scope.token(), Ok(None));
            }
        }
    }

    fn bind_view(&self, key_path: &str) {
        let token = self.scope.token();

        let requested = {
            let this = self.clone();
            let token = token.clone();
            move || {
                if token.is_live() {
                    this.state.modify(|s| s.begin_request());
                }
            }
        };
        let received = {
            let this = self.clone();
            let token = token.clone();
            move || {
                if token.is_live() {
                    this.state.modify(|s| s.end_request());
                }
            }
        };
        let change = {
            let this = self.clone();
            move |result| this.on_binding_change(&token, result)
        };

        self.facade.set_use_batch(false);
        self.facade.bind_element(
            key_path,
            ElementEvents {
                data_requested: Box::new(requested),
                data_received: Box::new(received),
                change: Box::new(change),
            },
        );
        self.facade.set_use_batch(true);
    }

    fn on_binding_change(&self, token: &Liveness, result: Result<Option<Category>, FetchError>) {
        if !token.is_live() {
            log::debug!("object page: dropping stale binding change");
            return;
        }
        match result {
            Ok(Some(category)) => {
                let subject = self
                    .bundle
                    .get_text("shareSendEmailObjectSubject", &[&category.id.as_string()]);
                let message = self.bundle.get_text(
                    "shareSendEmailObjectMessage",
                    &[
                        &category.name,
                        &category.id.as_string(),
                        &self.navigator.location_href(),
                    ],
                );
                self.state.modify(|s| {
                    s.mode = s.mode.transition(ModeEvent::Resolved);
                    s.busy = s.pending > 0;
                    s.form = CategoryForm::from_category(&category);
                    s.share_subject = subject;
                    s.share_message = message;
                });
            }
            Ok(None) => {
                self.state.modify(|s| {
                    s.mode = s.mode.transition(ModeEvent::Missing);
                    s.busy = s.pending > 0;
                });
                self.navigator.display_target(Target::ObjectNotFound);
            }
            Err(e) => {
                log::error!("object page: failed to load category: {}", e);
                self.state.modify(|s| s.busy = s.pending > 0);
                self.messages.error(self.bundle.text("msgError"));
            }
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub fn on_edit(&self) {
        self.state.modify(|s| s.mode = s.mode.transition(ModeEvent::Edit));
    }

    /// Read the form into an entity, or show the validation message
    fn read_form(&self) -> Option<Category> {
        let form = self.state.snapshot().form;
        match CategoryId::parse_input(&form.id_text) {
            Ok(id) => Some(Category::new(id, form.name_text)),
            Err(e) => {
                log::debug!("object page: invalid id '{}': {}", form.id_text, e);
                self.messages.error(self.bundle.text("msgOb"));
                None
            }
        }
    }

    /// Start a write request; returns its liveness token
    fn begin_write(&self) -> Liveness {
        self.state.modify(|s| s.begin_request());
        self.scope.token()
    }

    fn end_write(&self, token: &Liveness) {
        if token.is_live() {
            self.state.modify(|s| s.end_request());
        }
    }

    pub fn on_create(&self) {
        let Some(entity) = self.read_form() else {
            return;
        };
        log::info!("object page: create category {}", entity.id);

        let token = self.begin_write();
        let this = self.clone();
        self.facade.create(
            &categories_path(),
            entity,
            Box::new(move |result| {
                this.end_write(&token);
                match result {
                    Ok(()) => {
                        this.messages.success(this.bundle.text("msgSuc"), None);
                        if token.is_live() {
                            this.state.modify(|s| s.form = CategoryForm::default());
                        }
                    }
                    Err(e) => {
                        log::error!("object page: create failed: {}", e);
                        this.messages.error(this.bundle.text("msgError"));
                    }
                }
            }),
        );
    }

    pub fn on_save(&self) {
        let Some(entity) = self.read_form() else {
            return;
        };
        let key_path = self.facade.create_key(&categories_path(), entity.id);
        log::info!("object page: save {}", key_path);

        let token = self.begin_write();
        let this = self.clone();
        let rebind_path = key_path.clone();
        self.facade.update(
            &key_path,
            entity,
            Box::new(move |result| {
                this.end_write(&token);
                match result {
                    Ok(()) => {
                        this.messages.success(this.bundle.text("msgSuc"), None);
                        if token.is_live() {
                            this.bind_view(&rebind_path);
                        }
                    }
                    Err(e) => {
                        log::error!("object page: save failed: {}", e);
                        this.messages.error(this.bundle.text("msgError"));
                    }
                }
            }),
        );
    }

    pub fn on_delete(&self) {
        let Some(entity) = self.read_form() else {
            return;
        };
        let key_path = self.facade.create_key(&categories_path(), entity.id);
        log::info!("object page: delete {}", key_path);

        let token = self.begin_write();
        let this = self.clone();
        self.facade.remove(
            &key_path,
            Box::new(move |result| {
                this.end_write(&token);
                match result {
                    Ok(()) => {
                        let navigator = this.navigator.clone();
                        let leave = move || {
                            if token.is_live() {
                                navigator.history_back();
                            }
                        };
                        this.messages
                            .success(this.bundle.text("msgSuc"), Some(Box::new(leave)));
                    }
                    Err(e) => {
                        log::error!("object page: delete failed: {}", e);
                        this.messages.error(this.bundle.text("msgError"));
                    }
                }
            }),
        );
    }

    pub fn on_nav_back(&self) {
        if self.navigator.has_previous_entry() {
            self.navigator.history_back();
        } else {
            self.navigator.nav_to(Route::Worklist, true);
        }
    }

    pub fn set_id_text(&self, value: String) {
        self.state.modify(|s| s.form.id_text = value);
    }

    pub fn set_name_text(&self, value: String) {
        self.state.modify(|s| s.form.name_text = value);
    }
}
