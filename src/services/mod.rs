//! Service Layer
//!
//! Access to the remote shop backend and the tokio bridge used to drive its
//! futures from GPUI tasks.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               ServiceHub                 │
//! │   ┌──────────────┐   ┌──────────────┐    │
//! │   │   StoreApi   │   │ tokio bridge │    │
//! │   │  (reqwest)   │   │ run_in_tokio │    │
//! │   └──────────────┘   └──────────────┘    │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼ Result<T>
//! ┌──────────────────────────────────────────┐
//! │               State Layer                │
//! │  (SessionState, ProductsState, ...)      │
//! └──────────────────────────────────────────┘
//! ```

mod hub;
mod runtime;

pub use hub::*;
pub use runtime::*;
