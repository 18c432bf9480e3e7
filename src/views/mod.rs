//! View Components
//!
//! UI components for the Mera Bestie console.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │          TitleBar (brand, greeting, settings, logout)        │
//! ├────────┬────────────────────────────────────────────────────┤
//! │        │                                                     │
//! │ Side   │         Content (Home | Login | Products)           │
//! │ bar    │                                                     │
//! │ (80px) │                                                     │
//! │        │                                                     │
//! └────────┴────────────────────────────────────────────────────┘
//! ```

mod app_root;
mod content;
mod home;
mod login;
mod products_table;
mod sidebar;
mod title_bar;

pub use app_root::*;
pub use content::*;
pub use home::*;
pub use login::*;
pub use products_table::*;
pub use sidebar::*;
pub use title_bar::*;
