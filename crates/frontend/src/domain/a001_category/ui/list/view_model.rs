use super::state::{WorklistViewState, WORKLIST_SIZE_LIMIT};
use crate::domain::a001_category::model::{categories_path, CategoryFacade, FetchError};
use crate::routes::{Navigator, Route, NEW_OBJECT_ID};
use crate::shared::i18n::ResourceBundle;
use crate::shared::state::{Liveness, RequestScope, ViewStore};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::strip_collection;
use contracts::shared::filter::{build_search_filter, FilterGroup, SearchFilter};
use std::rc::Rc;

/// Controller of the category worklist: search, value help and navigation
/// to the object page.
#[derive(Clone)]
pub struct WorklistViewModel<S: ViewStore<WorklistViewState>> {
    pub state: S,
    facade: Rc<dyn CategoryFacade>,
    navigator: Rc<dyn Navigator>,
    bundle: ResourceBundle,
    scope: RequestScope,
}

impl<S: ViewStore<WorklistViewState>> WorklistViewModel<S> {
    pub fn new(state: S, facade: Rc<dyn CategoryFacade>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            state,
            facade,
            navigator,
            bundle: ResourceBundle::default(),
            scope: RequestScope::new(),
        }
    }

    /// Texts, size limit and the first load
    pub fn initialize(&self) {
        let bundle = self.bundle;
        let href = self.navigator.location_href();
        self.state.modify(|s| {
            s.table_title = bundle.text("worklistTableTitle");
            s.no_data_text = bundle.text("tableNoDataText");
            s.share_subject = bundle.text("shareSendEmailWorklistSubject");
            s.share_message = bundle.get_text("shareSendEmailWorklistMessage", &[&href]);
        });
        self.facade.set_size_limit(WORKLIST_SIZE_LIMIT);
        self.load_table();
    }

    // ========================================================================
    // Table binding
    // ========================================================================

    fn load_table(&self) {
        let Some((generation, filters)) = self.state.modify(|s| {
            s.begin_request();
            (s.binding.begin_load(), s.binding.filters())
        }) else {
            return;
        };

        let token = self.scope.token();
        let this = self.clone();
        self.facade.read_list(
            &categories_path(),
            &filters,
            Box::new(move |result| this.on_table_loaded(token, generation, result)),
        );
    }

    fn on_table_loaded(
        &self,
        token: Liveness,
        generation: u64,
        result: Result<Vec<Category>, FetchError>,
    ) {
        if !token.is_live() {
            log::debug!("worklist: dropping list response of a closed view");
            return;
        }
        match result {
            Ok(items) => {
                let limit = self.facade.size_limit() as u64;
                let updated = self.state.modify(|s| {
                    s.end_request();
                    s.binding.finish_load(generation, items, limit).then(|| {
                        (s.binding.items().len(), s.binding.is_length_final())
                    })
                });
                match updated.flatten() {
                    Some((total, is_final)) => self.on_update_finished(total, is_final),
                    None => log::debug!("worklist: list load {} superseded", generation),
                }
            }
            Err(e) => {
                log::error!("worklist: failed to load categories: {}", e);
                self.state.modify(|s| {
                    s.end_request();
                    s.binding.fail_load(generation);
                });
            }
        }
    }

    /// Title follows the row count once the length is known
    pub fn on_update_finished(&self, total_items: usize, is_length_final: bool) {
        let title = if total_items > 0 && is_length_final {
            self.bundle
                .get_text("worklistTableTitleCount", &[&total_items.to_string()])
        } else {
            self.bundle.text("worklistTableTitle")
        };
        self.state.modify(|s| s.table_title = title);
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn on_search(&self, id_text: &str, name_text: &str) {
        let filter = build_search_filter(id_text, name_text);
        log::debug!("worklist: search filter {:?}", filter);

        let no_data_key = if filter.is_some() {
            "worklistNoDataWithSearchText"
        } else {
            "tableNoDataText"
        };
        let no_data_text = self.bundle.text(no_data_key);
        self.state.modify(|s| {
            s.search_id = id_text.to_string();
            s.search_name = name_text.to_string();
            s.binding
                .filter(filter.into_iter().collect(), FilterGroup::Application);
            s.no_data_text = no_data_text;
        });
        self.load_table();
    }

    /// Search with the current input values
    pub fn search_current(&self) {
        let s = self.state.snapshot();
        self.on_search(&s.search_id, &s.search_name);
    }

    /// Re-fetch with the filters already applied
    pub fn on_refresh(&self) {
        self.load_table();
    }

    pub fn set_search_id(&self, value: String) {
        self.state.modify(|s| s.search_id = value);
    }

    pub fn set_search_name(&self, value: String) {
        self.state.modify(|s| s.search_name = value);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Open the object page of a row addressed by its key path
    pub fn on_press(&self, entity_path: &str) {
        let Some(key) = strip_collection(&categories_path(), entity_path) else {
            log::warn!("worklist: '{}' is not a category path", entity_path);
            return;
        };
        let object_id = key.trim_start_matches('(').trim_end_matches(')').to_string();
        self.navigator.nav_to(Route::Object { object_id }, false);
    }

    pub fn on_create(&self) {
        self.navigator.nav_to(
            Route::Object {
                object_id: NEW_OBJECT_ID.to_string(),
            },
            false,
        );
    }

    pub fn on_nav_back(&self) {
        self.navigator.history_back();
    }

    // ========================================================================
    // Value help over Name
    // ========================================================================

    pub fn on_value_help_request(&self, input: &str) {
        self.state.modify(|s| s.value_help.open = true);
        self.filter_value_help(input);
    }

    pub fn on_value_help_search(&self, value: &str) {
        self.filter_value_help(value);
    }

    /// Close the picker; a selected Name goes into the Name search field
    pub fn on_value_help_close(&self, selected: Option<&str>) {
        self.state.modify(|s| {
            s.value_help.open = false;
            s.value_help.query.clear();
            s.value_help.binding.filter(Vec::new(), FilterGroup::Application);
            if let Some(name) = selected {
                s.search_name = name.to_string();
            }
        });
    }

    fn filter_value_help(&self, value: &str) {
        let filters = if value.is_empty() {
            Vec::new()
        } else {
            vec![SearchFilter::name_contains(value)]
        };
        let Some((generation, filters)) = self.state.modify(|s| {
            s.value_help.query = value.to_string();
            s.value_help.binding.filter(filters, FilterGroup::Application);
            (s.value_help.binding.begin_load(), s.value_help.binding.filters())
        }) else {
            return;
        };

        let token = self.scope.token();
        let this = self.clone();
        self.facade.read_list(
            &categories_path(),
            &filters,
            Box::new(move |result| {
                if !token.is_live() {
                    return;
                }
                let limit = this.facade.size_limit() as u64;
                this.state.modify(|s| match result {
                    Ok(items) => {
                        s.value_help.binding.finish_load(generation, items, limit);
                    }
                    Err(e) => {
                        log::error!("worklist: value help load failed: {}", e);
                        s.value_help.binding.fail_load(generation);
                    }
                });
            }),
        );
    }

    /// Invalidated when the view goes away
    pub fn scope(&self) -> &RequestScope {
        &self.scope
    }
}
