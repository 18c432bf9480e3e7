//! Resource Tables
//!
//! The fetch → local sort/filter/edit → confirmed mutation → re-sync pattern
//! behind the admin pages. This layer has no GPUI dependency; the state
//! layer wraps a [`TableController`] in an entity.

mod controller;
mod edit;
mod record;
mod source;
mod view;

pub use controller::*;
pub use edit::*;
pub use record::*;
pub use source::*;
pub use view::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{Error, Result};

    #[derive(Clone, Debug, PartialEq)]
    pub struct Item {
        pub id: RecordId,
        pub name: Option<String>,
        pub stock: Option<i64>,
        pub visible: bool,
    }

    pub fn item(id: &str, name: &str, stock: Option<i64>) -> Item {
        Item {
            id: id.into(),
            name: Some(name.to_string()),
            stock,
            visible: false,
        }
    }

    impl TableRecord for Item {
        const EDITABLE_FIELDS: &'static [&'static str] = &["stock"];

        fn record_id(&self) -> &RecordId {
            &self.id
        }

        fn display_name(&self) -> Option<&str> {
            self.name.as_deref()
        }

        fn field(&self, key: &str) -> FieldValue {
            match key {
                "name" => self.name.as_deref().into(),
                "stock" => self.stock.into(),
                "visible" => self.visible.into(),
                _ => FieldValue::Missing,
            }
        }

        fn editable_value(&self, field: &str) -> Option<i64> {
            match field {
                "stock" => self.stock,
                _ => None,
            }
        }

        fn is_visible(&self) -> bool {
            self.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    /// In-memory source that behaves like the remote service
    #[derive(Clone, Default)]
    pub struct FakeSource {
        items: Arc<Mutex<Vec<Item>>>,
        fetches: Arc<AtomicUsize>,
        fail_fetch: Arc<AtomicBool>,
        fail_update: Arc<AtomicBool>,
    }

    impl FakeSource {
        pub fn new(items: Vec<Item>) -> Self {
            Self {
                items: Arc::new(Mutex::new(items)),
                ..Default::default()
            }
        }

        pub fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }

        pub fn fail_fetches(&self, fail: bool) {
            self.fail_fetch.store(fail, Ordering::SeqCst);
        }

        pub fn fail_updates(&self, fail: bool) {
            self.fail_update.store(fail, Ordering::SeqCst);
        }

        fn rejected(&self, endpoint: &str) -> Result<()> {
            if self.fail_update.load(Ordering::SeqCst) {
                return Err(Error::Rejected {
                    endpoint: endpoint.to_string(),
                    status: 500,
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ResourceSource for FakeSource {
        type Record = Item;

        async fn fetch_all(&self) -> Result<Vec<Item>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Error::Rejected {
                    endpoint: "/items".to_string(),
                    status: 503,
                });
            }
            Ok(self.items.lock().expect("items lock").clone())
        }

        async fn update_fields(&self, id: &RecordId, values: &StagedValues) -> Result<()> {
            self.rejected("/items/update")?;
            let mut items = self.items.lock().expect("items lock");
            if let Some(item) = items.iter_mut().find(|i| &i.id == id) {
                item.stock = Some(values.number("stock"));
            }
            Ok(())
        }

        async fn update_visibility(&self, id: &RecordId, visible: bool) -> Result<()> {
            self.rejected("/items/visibility")?;
            let mut items = self.items.lock().expect("items lock");
            if let Some(item) = items.iter_mut().find(|i| &i.id == id) {
                item.visible = visible;
            }
            Ok(())
        }
    }
}
