//! Core types for the cake shop.
//!
//! This module provides type-safe wrappers for the shop's domain concepts.

pub mod cake;
pub mod cart;
pub mod id;
pub mod image;
pub mod price;

pub use cake::{Cake, CakeDraft};
pub use cart::CartLine;
pub use id::*;
pub use image::ImageRef;
pub use price::{Price, PriceError};
