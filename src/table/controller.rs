//! Resource Table Controller
//!
//! Owns a record list plus its sort, search and edit state, and reconciles
//! remote results into it.
//!
//! ## Pattern
//!
//! ```text
//! intent ──► *_request()  ──► 'static future (run on tokio)
//!                                   │
//!                                   ▼
//!            apply_*(result) ◄── Result<T>
//! ```
//!
//! The async methods (`load`, `commit_edit`, `set_visibility`) chain both
//! phases for callers that can hold `&mut self` across an await. The GPUI
//! state layer drives the two phases separately so the UI thread never
//! blocks.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

use super::edit::EditSession;
use super::record::{RecordId, TableRecord};
use super::source::ResourceSource;
use super::view::{SortState, derive_view};

/// A detached remote call
pub type Request<T> = BoxFuture<'static, Result<T>>;

/// Controller for one resource table
pub struct TableController<S: ResourceSource> {
    source: S,
    records: Vec<S::Record>,
    sort: SortState,
    search: String,
    edit: Option<EditSession>,
    notice: Option<Arc<str>>,
}

impl<S: ResourceSource> TableController<S> {
    /// Create an empty controller. Call [`load`](Self::load) (or drive
    /// [`load_request`](Self::load_request)) right after creation.
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: Vec::new(),
            sort: SortState::default(),
            search: String::new(),
            edit: None,
            notice: None,
        }
    }

    /// Create a controller and perform the initial load.
    ///
    /// A failed initial load still yields a controller (empty list, notice set).
    pub async fn open(source: S) -> Self {
        let mut controller = Self::new(source);
        let _ = controller.load().await;
        controller
    }

    // ==================== Getters ====================

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Owned records in fetch order
    pub fn records(&self) -> &[S::Record] {
        &self.records
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Whether the given record is in edit mode
    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.edit.as_ref().is_some_and(|s| s.record_id() == id)
    }

    /// Last recoverable error, for display
    pub fn notice(&self) -> Option<&Arc<str>> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn find(&self, id: &RecordId) -> Option<&S::Record> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Sorted and filtered projection of the owned list
    pub fn derived_view(&self) -> Vec<&S::Record> {
        derive_view(&self.records, &self.sort, &self.search)
    }

    // ==================== Local intents ====================

    pub fn set_sort(&mut self, key: &str) {
        self.sort.select(key);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Open an edit session, replacing any other
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<()> {
        let Some(record) = self.find(id) else {
            return Err(Error::UnknownRecord { id: id.to_string() });
        };
        let session = EditSession::begin(record);
        debug!(record = %id, "Edit session opened");
        self.edit = Some(session);
        Ok(())
    }

    /// Update a staged value in the open session
    pub fn stage_field(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let Some(session) = self.edit.as_mut() else {
            return Err(Error::NoEditSession);
        };
        session.stage::<S::Record>(field, value)
    }

    // ==================== Load ====================

    pub fn load_request(&self) -> Request<Vec<S::Record>> {
        let source = self.source.clone();
        Box::pin(async move { source.fetch_all().await })
    }

    /// Replace the owned list on success; keep it on failure
    pub fn apply_load(&mut self, result: Result<Vec<S::Record>>) -> Result<()> {
        match result {
            Ok(records) => {
                self.records = dedupe(records);
                self.notice = None;
                info!(count = self.records.len(), "Records loaded");
                Ok(())
            }
            Err(e) => Err(self.record_failure("load", e)),
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let result = self.load_request().await;
        self.apply_load(result)
    }

    // ==================== Commit ====================

    /// Build the commit call for the open session
    pub fn commit_request(&self) -> Result<(RecordId, Request<()>)> {
        let Some(session) = self.edit.as_ref() else {
            return Err(Error::NoEditSession);
        };
        let source = self.source.clone();
        let id = session.record_id().clone();
        let staged = session.staged().clone();
        let request_id = id.clone();
        let request: Request<()> =
            Box::pin(async move { source.update_fields(&request_id, &staged).await });
        Ok((id, request))
    }

    /// Close the session on success; keep it (and its staged values) on failure.
    ///
    /// On `Ok` the caller must reload. A session that was reopened for a
    /// different record while the call was in flight stays open.
    pub fn apply_commit(&mut self, id: &RecordId, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                if self.is_editing(id) {
                    self.edit = None;
                }
                info!(record = %id, "Edit committed");
                Ok(())
            }
            Err(e) => Err(self.record_failure("commit", e)),
        }
    }

    pub async fn commit_edit(&mut self) -> Result<()> {
        let (id, request) = self.commit_request()?;
        let result = request.await;
        self.apply_commit(&id, result)?;
        self.load().await
    }

    // ==================== Visibility ====================

    pub fn visibility_request(&self, id: &RecordId, visible: bool) -> Request<()> {
        let source = self.source.clone();
        let id = id.clone();
        Box::pin(async move { source.update_visibility(&id, visible).await })
    }

    /// Patch the one record in place on success
    pub fn apply_visibility(
        &mut self,
        id: &RecordId,
        visible: bool,
        result: Result<()>,
    ) -> Result<()> {
        match result {
            Ok(()) => {
                if let Some(record) = self.records.iter_mut().find(|r| r.record_id() == id) {
                    record.set_visible(visible);
                }
                info!(record = %id, visible, "Visibility updated");
                Ok(())
            }
            Err(e) => Err(self.record_failure("visibility", e)),
        }
    }

    pub async fn set_visibility(&mut self, id: &RecordId, visible: bool) -> Result<()> {
        let result = self.visibility_request(id, visible).await;
        self.apply_visibility(id, visible, result)
    }

    fn record_failure(&mut self, operation: &'static str, error: Error) -> Error {
        warn!(operation, error = %error, "Table operation failed");
        self.notice = Some(error.to_string().into());
        error
    }
}

/// Keep the first record for each identifier
fn dedupe<R: TableRecord>(records: Vec<R>) -> Vec<R> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut unique = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(record.record_id().clone()) {
            unique.push(record);
        } else {
            warn!(record = %record.record_id(), "Dropping duplicate record");
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::{FakeSource, Item, item};

    fn names(view: &[&Item]) -> Vec<String> {
        view.iter().map(|i| i.name.clone().unwrap_or_default()).collect()
    }

    async fn loaded(items: Vec<Item>) -> TableController<FakeSource> {
        TableController::open(FakeSource::new(items)).await
    }

    #[tokio::test]
    async fn test_open_loads_records() {
        let controller = loaded(vec![item("1", "Mug", Some(5)), item("2", "Pen", Some(2))]).await;
        assert_eq!(controller.records().len(), 2);
        assert!(controller.notice().is_none());
        assert_eq!(controller.source().fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_sort_scenario_toggles_direction() {
        let mut controller =
            loaded(vec![item("1", "Mug", Some(5)), item("2", "Pen", Some(2))]).await;

        controller.set_sort("stock");
        assert_eq!(names(&controller.derived_view()), ["Pen", "Mug"]);

        controller.set_sort("stock");
        assert_eq!(names(&controller.derived_view()), ["Mug", "Pen"]);
    }

    #[tokio::test]
    async fn test_new_sort_key_resets_to_ascending() {
        let mut controller =
            loaded(vec![item("1", "Mug", Some(5)), item("2", "Pen", Some(2))]).await;
        controller.set_sort("stock");
        controller.set_sort("stock");
        controller.set_sort("name");
        assert_eq!(names(&controller.derived_view()), ["Mug", "Pen"]);
        assert_eq!(
            controller.sort().direction(),
            crate::table::SortDirection::Ascending
        );
    }

    #[tokio::test]
    async fn test_descending_mirrors_ascending_without_ties() {
        let items = vec![
            item("a", "Card", Some(9)),
            item("b", "Frame", Some(1)),
            item("c", "Diary", Some(4)),
            item("d", "Lamp", None),
        ];
        let mut controller = loaded(items).await;

        controller.set_sort("stock");
        let mut ascending = names(&controller.derived_view());
        controller.set_sort("stock");
        let descending = names(&controller.derived_view());

        assert_eq!(ascending.first().map(String::as_str), Some("Lamp"));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[tokio::test]
    async fn test_ties_keep_fetch_order_in_both_directions() {
        let items = vec![
            item("1", "First", Some(3)),
            item("2", "Second", Some(3)),
            item("3", "Low", Some(1)),
        ];
        let mut controller = loaded(items).await;

        controller.set_sort("stock");
        assert_eq!(names(&controller.derived_view()), ["Low", "First", "Second"]);
        controller.set_sort("stock");
        assert_eq!(names(&controller.derived_view()), ["First", "Second", "Low"]);
    }

    #[tokio::test]
    async fn test_search_matches_id_or_name_case_insensitively() {
        let items = vec![
            item("MB-100", "Coffee Mug", Some(1)),
            item("MB-200", "Gel Pen", Some(1)),
            item("XY-300", "Photo Frame", Some(1)),
        ];
        let mut controller = loaded(items).await;

        controller.set_search("mug");
        assert_eq!(names(&controller.derived_view()), ["Coffee Mug"]);

        controller.set_search("mb-");
        assert_eq!(names(&controller.derived_view()), ["Coffee Mug", "Gel Pen"]);

        controller.set_search("");
        assert_eq!(controller.derived_view().len(), 3);

        controller.set_search("nothing");
        let view = controller.derived_view();
        assert!(view.is_empty());
        for record in controller.records() {
            assert!(!record.id.to_string().to_lowercase().contains("nothing"));
        }
    }

    #[tokio::test]
    async fn test_begin_edit_replaces_previous_session() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5)), item("2", "Pen", None)]).await;

        controller.begin_edit(&"1".into()).expect("begin edit");
        controller.stage_field("stock", "99").expect("stage");
        controller.begin_edit(&"2".into()).expect("begin edit");

        let session = controller.edit_session().expect("session");
        assert_eq!(session.record_id(), &RecordId::from("2"));
        assert_eq!(session.staged().text("stock"), Some("0"));
        assert!(!controller.is_editing(&"1".into()));
    }

    #[tokio::test]
    async fn test_begin_edit_unknown_record_keeps_session() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        controller.begin_edit(&"1".into()).expect("begin edit");

        let err = controller.begin_edit(&"404".into()).expect_err("unknown id");
        assert!(matches!(err, Error::UnknownRecord { .. }));
        assert!(controller.is_editing(&"1".into()));
    }

    #[tokio::test]
    async fn test_stage_field_requires_session_and_known_field() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        assert!(matches!(
            controller.stage_field("stock", "1"),
            Err(Error::NoEditSession)
        ));

        controller.begin_edit(&"1".into()).expect("begin edit");
        assert!(matches!(
            controller.stage_field("name", "Cup"),
            Err(Error::UnknownField { .. })
        ));
    }

    #[tokio::test]
    async fn test_commit_success_closes_session_and_reloads() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        controller.begin_edit(&"1".into()).expect("begin edit");
        controller.stage_field("stock", "12").expect("stage");

        controller.commit_edit().await.expect("commit");

        assert!(controller.edit_session().is_none());
        assert_eq!(controller.source().fetch_count(), 2);
        assert_eq!(controller.find(&"1".into()).and_then(|i| i.stock), Some(12));
    }

    #[tokio::test]
    async fn test_commit_coerces_blank_to_zero() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        controller.begin_edit(&"1".into()).expect("begin edit");
        controller.stage_field("stock", "").expect("stage");

        controller.commit_edit().await.expect("commit");
        assert_eq!(controller.find(&"1".into()).and_then(|i| i.stock), Some(0));
    }

    #[tokio::test]
    async fn test_commit_failure_keeps_staged_values() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        controller.begin_edit(&"1".into()).expect("begin edit");
        controller.stage_field("stock", "8").expect("stage");
        controller.source().fail_updates(true);

        let err = controller.commit_edit().await.expect_err("commit fails");
        assert!(err.is_remote());

        let session = controller.edit_session().expect("session kept");
        assert_eq!(session.staged().text("stock"), Some("8"));
        assert!(controller.notice().is_some());
        assert_eq!(controller.source().fetch_count(), 1);
        assert_eq!(controller.find(&"1".into()).and_then(|i| i.stock), Some(5));
    }

    #[tokio::test]
    async fn test_commit_without_session_is_an_error() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        assert!(matches!(
            controller.commit_edit().await,
            Err(Error::NoEditSession)
        ));
    }

    #[tokio::test]
    async fn test_stale_commit_keeps_newer_session() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5)), item("2", "Pen", Some(2))]).await;
        controller.begin_edit(&"1".into()).expect("begin edit");
        let (id, request) = controller.commit_request().expect("request");

        controller.begin_edit(&"2".into()).expect("begin edit");
        let result = request.await;
        controller.apply_commit(&id, result).expect("apply");

        assert!(controller.is_editing(&"2".into()));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        controller.source().fail_fetches(true);

        assert!(controller.load().await.is_err());
        assert_eq!(controller.records().len(), 1);
        assert!(controller.notice().is_some());

        controller.source().fail_fetches(false);
        controller.load().await.expect("reload");
        assert!(controller.notice().is_none());
    }

    #[tokio::test]
    async fn test_set_visibility_updates_only_target() {
        let mut controller = loaded(vec![
            item("1", "Mug", Some(5)),
            item("2", "Pen", Some(2)),
            item("3", "Lamp", Some(1)),
        ])
        .await;
        let before: Vec<Item> = controller.records().to_vec();

        controller
            .set_visibility(&"2".into(), true)
            .await
            .expect("visibility");

        let after = controller.records();
        assert!(after[1].visible);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(controller.source().fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_set_visibility_failure_leaves_state() {
        let mut controller = loaded(vec![item("1", "Mug", Some(5))]).await;
        controller.source().fail_updates(true);

        assert!(controller.set_visibility(&"1".into(), true).await.is_err());
        assert!(!controller.records()[0].visible);
        assert!(controller.notice().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_first() {
        let controller = loaded(vec![item("1", "Mug", Some(5)), item("1", "Copy", Some(1))]).await;
        assert_eq!(names(&controller.derived_view()), ["Mug"]);
    }
}
