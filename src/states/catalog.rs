//! Catalog State
//!
//! Products shown on the storefront: the visible subset of `/get-product`,
//! fetched once on first view.

use std::sync::Arc;

use gpui::{Context, EventEmitter};
use tracing::{info, warn};

use crate::api::Product;
use crate::error::Result;
use crate::services::run_in_tokio;
use crate::states::{BestieGlobalStore, UIEvent};
use crate::table::TableRecord;

/// Catalog loading state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogLoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(Arc<str>),
}

/// Keep only products shoppers may see, in fetch order
pub fn visible_products(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(Product::is_visible).collect()
}

#[derive(Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    load_state: CatalogLoadState,
}

impl EventEmitter<UIEvent> for CatalogState {}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn load_state(&self) -> &CatalogLoadState {
        &self.load_state
    }

    /// Fetch on first call only; a failed fetch may be retried
    pub fn ensure_loaded(&mut self, cx: &mut Context<Self>) {
        if matches!(
            self.load_state,
            CatalogLoadState::Idle | CatalogLoadState::Error(_)
        ) {
            self.reload(cx);
        }
    }

    pub fn reload(&mut self, cx: &mut Context<Self>) {
        self.load_state = CatalogLoadState::Loading;
        cx.notify();

        let store = cx.global::<BestieGlobalStore>().services().store().clone();
        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { store.fetch_products().await }).await;
            let _ = this.update(cx, |state, cx| state.finish_load(result, cx));
        })
        .detach();
    }

    fn finish_load(&mut self, result: Result<Vec<Product>>, cx: &mut Context<Self>) {
        match result {
            Ok(products) => {
                self.products = visible_products(products);
                self.load_state = CatalogLoadState::Loaded;
                info!(count = self.products.len(), "Catalog loaded");
            }
            Err(e) => {
                warn!(error = %e, "Failed to load catalog");
                self.load_state = CatalogLoadState::Error(e.to_string().into());
                cx.emit(UIEvent::error(e.to_string()));
            }
        }
        cx.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_visible_products_remain() {
        let products: Vec<Product> = serde_json::from_value(json!([
            { "productId": 1, "name": "Mug", "visibility": true },
            { "productId": 2, "name": "Pen", "visibility": "false" },
            { "productId": 3, "name": "Card" },
            { "productId": 4, "name": "Lamp", "visibility": "true" }
        ]))
        .expect("products");

        let names: Vec<_> = visible_products(products)
            .into_iter()
            .filter_map(|p| p.name)
            .collect();
        assert_eq!(names, ["Mug", "Lamp"]);
    }
}
