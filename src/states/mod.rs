//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI intent → State method → spawn store call on tokio → apply result → notify → UI refresh
//! ```

mod app;
mod catalog;
mod i18n;
mod products;
mod session;
mod ui_event;

pub use app::*;
pub use catalog::*;
pub use i18n::*;
pub use products::*;
pub use session::*;
pub use ui_event::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use gpui::{App, AppContext};

    use super::*;
    use crate::services::{ServiceConfig, ServiceHub};

    /// Install a global store with default state and an unreachable backend
    pub fn install_store(cx: &mut App) -> BestieGlobalStore {
        let store = BestieGlobalStore::new(
            cx.new(|_| BestieAppState::new()),
            cx.new(|_| SessionState::new()),
            cx.new(|_| CatalogState::new()),
            ServiceHub::new(&ServiceConfig {
                api_base_url: Some("http://127.0.0.1:9".to_string()),
            }),
        );
        cx.set_global(store.clone());
        store
    }
}
