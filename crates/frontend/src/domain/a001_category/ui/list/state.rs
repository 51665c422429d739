use crate::shared::list_binding::ListBinding;
use leptos::prelude::*;

/// Row cap of the worklist; large enough to fetch the whole collection
pub const WORKLIST_SIZE_LIMIT: usize = 100_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorklistViewState {
    pub busy: bool,
    /// Fetches in flight
    pub pending: u32,
    pub table_title: String,
    pub no_data_text: String,
    pub share_subject: String,
    pub share_message: String,
    // Поля поиска
    pub search_id: String,
    pub search_name: String,
    pub binding: ListBinding,
    pub value_help: ValueHelpState,
}

/// Name picker opened from the Name search field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueHelpState {
    pub open: bool,
    pub query: String,
    pub binding: ListBinding,
}

impl WorklistViewState {
    pub fn begin_request(&mut self) {
        self.pending += 1;
        self.busy = true;
    }

    pub fn end_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        self.busy = self.pending > 0;
    }
}

pub fn create_state() -> RwSignal<WorklistViewState> {
    RwSignal::new(WorklistViewState::default())
}
