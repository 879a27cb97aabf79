//! Cake Shop Core - Shared domain types.
//!
//! This crate provides the types used across all cake shop components:
//! - `storefront` - Cart, catalog and projection state management
//! - `cli` - Terminal front end for browsing, the cart and catalog admin
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no prompts.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices and image references, plus
//!   the `Cake` and `CartLine` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
