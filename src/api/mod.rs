//! Remote Store API
//!
//! Typed access to the shop's REST backend: product listing and admin
//! mutations, login and user lookup.

mod auth;
mod client;
mod product;
pub(crate) mod wire;

pub use auth::*;
pub use client::*;
pub use product::*;
