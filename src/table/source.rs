//! Resource Source
//!
//! The remote side of a resource table: one best-effort round trip per call,
//! no retries and no caching.

use async_trait::async_trait;

use crate::error::Result;

use super::edit::StagedValues;
use super::record::{RecordId, TableRecord};

/// Read/write access to a remote collection of records
#[async_trait]
pub trait ResourceSource: Clone + Send + Sync + 'static {
    type Record: TableRecord;

    /// Fetch the full collection
    async fn fetch_all(&self) -> Result<Vec<Self::Record>>;

    /// Commit staged editable fields for one record
    async fn update_fields(&self, id: &RecordId, values: &StagedValues) -> Result<()>;

    /// Change the visibility flag of one record
    async fn update_visibility(&self, id: &RecordId, visible: bool) -> Result<()>;
}
