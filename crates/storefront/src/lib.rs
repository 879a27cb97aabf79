//! Cake Shop Storefront library.
//!
//! Holds the whole stateful core of the shop behind [`state::AppState`]:
//!
//! - [`cart`] - Cart lines, mutation rules and local persistence
//! - [`catalog`] - The in-memory catalog, admin CRUD and the built-in seed set
//! - [`projection`] - Search + sort view over the catalog
//! - [`intake`] - The admin cake form, including image file intake
//! - [`storage`] - Key-value storage standing in for per-browser storage
//! - [`prompt`] - Confirmation and acknowledgment collaborators
//!
//! Front ends (the `cake-shop` CLI) only talk to `AppState`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod projection;
pub mod prompt;
pub mod state;
pub mod storage;

pub use error::{AppError, Result};
pub use state::{AppState, View};
