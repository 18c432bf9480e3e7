//! Bestie GUI Library
//!
//! Native storefront and admin console for the Mera Bestie shop. All
//! business logic lives in the remote shop backend; this crate renders
//! views, collects input and issues REST calls.

rust_i18n::i18n!("locales", fallback = "en");

pub mod api;
pub mod assets;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod services;
pub mod states;
pub mod table;
pub mod views;
