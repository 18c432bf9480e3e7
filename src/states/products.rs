//! Products State
//!
//! GPUI entity around the admin products [`TableController`]. Remote calls
//! run on tokio via [`run_in_tokio`]; their results are applied back on the
//! UI thread, so the controller is only ever touched from one place.

use std::collections::HashSet;
use std::sync::Arc;

use gpui::{Context, EventEmitter};
use tracing::debug;

use crate::api::{Product, StoreApi, parse_visibility_choice};
use crate::error::Result;
use crate::services::run_in_tokio;
use crate::states::{UIEvent, i18n_products};
use crate::table::{RecordId, TableController};

/// Products loading state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProductsLoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Failed with no prior list to show
    Error(Arc<str>),
}

impl ProductsLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Admin products table state
pub struct ProductsState {
    table: TableController<StoreApi>,
    load_state: ProductsLoadState,
    committing: bool,
    /// Records with a visibility call in flight
    updating_visibility: HashSet<RecordId>,
}

impl EventEmitter<UIEvent> for ProductsState {}

impl ProductsState {
    /// Create the state and start the initial load
    pub fn new(store: StoreApi, cx: &mut Context<Self>) -> Self {
        let mut state = Self {
            table: TableController::new(store),
            load_state: ProductsLoadState::Idle,
            committing: false,
            updating_visibility: HashSet::new(),
        };
        state.load(cx);
        state
    }

    // ==================== Getters ====================

    pub fn table(&self) -> &TableController<StoreApi> {
        &self.table
    }

    pub fn load_state(&self) -> &ProductsLoadState {
        &self.load_state
    }

    pub fn is_committing(&self) -> bool {
        self.committing
    }

    pub fn is_updating_visibility(&self, id: &RecordId) -> bool {
        self.updating_visibility.contains(id)
    }

    /// Last recoverable failure, until dismissed
    pub fn notice(&self) -> Option<&str> {
        self.table.notice().map(|notice| notice.as_ref())
    }

    /// Sorted and filtered rows, cloned for rendering
    pub fn rows(&self) -> Vec<Product> {
        self.table.derived_view().into_iter().cloned().collect()
    }

    // ==================== Local intents ====================

    pub fn set_sort(&mut self, key: &str, cx: &mut Context<Self>) {
        self.table.set_sort(key);
        cx.notify();
    }

    pub fn set_search(&mut self, text: String, cx: &mut Context<Self>) {
        if self.table.search() != text {
            self.table.set_search(text);
            cx.notify();
        }
    }

    pub fn begin_edit(&mut self, id: &RecordId, cx: &mut Context<Self>) {
        let result = self.table.begin_edit(id);
        self.report(result, cx);
        cx.notify();
    }

    pub fn stage_field(&mut self, field: &str, value: String, cx: &mut Context<Self>) {
        let result = self.table.stage_field(field, value);
        self.report(result, cx);
    }

    pub fn clear_notice(&mut self, cx: &mut Context<Self>) {
        self.table.clear_notice();
        cx.notify();
    }

    // ==================== Remote operations ====================

    /// Re-fetch the whole list
    pub fn load(&mut self, cx: &mut Context<Self>) {
        self.load_state = ProductsLoadState::Loading;
        cx.notify();

        let request = self.table.load_request();
        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(request).await;
            let _ = this.update(cx, |state, cx| state.finish_load(result, cx));
        })
        .detach();
    }

    fn finish_load(&mut self, result: Result<Vec<Product>>, cx: &mut Context<Self>) {
        let applied = self.table.apply_load(result);
        self.load_state = match &applied {
            Ok(()) => ProductsLoadState::Loaded,
            Err(e) if self.table.records().is_empty() => {
                ProductsLoadState::Error(e.to_string().into())
            }
            Err(_) => ProductsLoadState::Loaded,
        };
        self.report(applied, cx);
        cx.notify();
    }

    /// Commit the open edit session, then reload on success
    pub fn commit_edit(&mut self, cx: &mut Context<Self>) {
        if self.committing {
            return;
        }
        let (id, request) = match self.table.commit_request() {
            Ok(parts) => parts,
            Err(e) => {
                self.report(Err(e), cx);
                return;
            }
        };
        self.committing = true;
        cx.notify();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(request).await;
            let _ = this.update(cx, |state, cx| state.finish_commit(&id, result, cx));
        })
        .detach();
    }

    fn finish_commit(&mut self, id: &RecordId, result: Result<()>, cx: &mut Context<Self>) {
        self.committing = false;
        let applied = self.table.apply_commit(id, result);
        let committed = applied.is_ok();
        self.report(applied, cx);
        if committed {
            cx.emit(UIEvent::success(i18n_products(cx, "saved").to_string()));
            self.load(cx);
        }
        cx.notify();
    }

    /// Apply a dropdown choice; only `"true"` means visible
    pub fn set_visibility(&mut self, id: RecordId, choice: &str, cx: &mut Context<Self>) {
        let visible = parse_visibility_choice(choice);
        debug!(record = %id, visible, "Visibility change requested");
        self.updating_visibility.insert(id.clone());
        cx.notify();

        let request = self.table.visibility_request(&id, visible);
        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(request).await;
            let _ = this.update(cx, |state, cx| {
                state.updating_visibility.remove(&id);
                let applied = state.table.apply_visibility(&id, visible, result);
                if applied.is_ok() {
                    cx.emit(UIEvent::success(
                        i18n_products(cx, "visibility_updated").to_string(),
                    ));
                }
                state.report(applied, cx);
                cx.notify();
            });
        })
        .detach();
    }

    /// Surface a failure as a toast
    fn report(&self, result: Result<()>, cx: &mut Context<Self>) {
        if let Err(e) = result {
            cx.emit(UIEvent::error(e.to_string()));
        }
    }
}
