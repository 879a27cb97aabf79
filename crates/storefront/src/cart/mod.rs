//! Shopping cart.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s with at most one line per
//! cake and no line ever at quantity zero. All mutation rules live here; the
//! application state decides when to persist (see [`persistence`]).

pub mod persistence;

use cake_shop_core::{Cake, CakeId, CartLine, Price};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use persistence::{CART_STORAGE_KEY, CartPersistError};

/// The shopper's cart, in the order lines were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw lines, repairing anything that breaks the cart's
    /// invariants: zero-quantity lines are dropped and repeated identifiers
    /// are merged into the first occurrence.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                warn!(cake_id = %line.id, "Dropping cart line with zero quantity");
                continue;
            }
            match cart.line_mut(line.id) {
                Some(existing) => {
                    warn!(cake_id = %line.id, "Merging duplicate cart line");
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// All lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: CakeId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn line_mut(&mut self, id: CakeId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Number of distinct cakes in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one of `cake`. A new line snapshots the cake's name, price and image.
    pub fn add(&mut self, cake: &Cake) {
        match self.line_mut(cake.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::for_cake(cake)),
        }
    }

    /// Add one more of an existing line, for when only the line is at hand
    /// (the cake may no longer be in the catalog).
    ///
    /// Returns false if the cart has no line with that identifier.
    pub fn increment(&mut self, line: &CartLine) -> bool {
        self.line_mut(line.id).is_some_and(|existing| {
            existing.quantity = existing.quantity.saturating_add(1);
            true
        })
    }

    /// Take one away; a line at quantity one is removed entirely.
    ///
    /// Returns false if the cart has no line with that identifier.
    pub fn decrement(&mut self, id: CakeId) -> bool {
        let Some(line) = self.line_mut(id) else {
            return false;
        };
        if line.quantity > 1 {
            line.quantity -= 1;
            return true;
        }
        self.remove(id)
    }

    /// Remove the line for `id` regardless of quantity.
    ///
    /// Returns false if there was nothing to remove.
    pub fn remove(&mut self, id: CakeId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Drop the line for a cake that has left the catalog.
    pub fn cascade_delete(&mut self, id: CakeId) -> bool {
        self.remove(id)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |total, line| total.saturating_add(line.quantity))
    }

    /// Sum of `price × quantity` over all lines, rounded to cents.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum::<Price>().rounded()
    }
}
