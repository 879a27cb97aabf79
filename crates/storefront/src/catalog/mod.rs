//! Catalog of cakes and its admin operations.
//!
//! The catalog lives only in memory. Every process starts from the built-in
//! [`seed`] set; admin edits last until exit.

pub mod seed;

use cake_shop_core::{Cake, CakeDraft, CakeId};
use tracing::warn;

/// Ordered collection of cakes with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cakes: Vec<Cake>,
    revision: u64,
}

impl Catalog {
    /// Create a catalog from `cakes`, keeping the first of any repeated id.
    #[must_use]
    pub fn new(cakes: impl IntoIterator<Item = Cake>) -> Self {
        let mut catalog = Self::default();
        for cake in cakes {
            if catalog.get(cake.id).is_some() {
                warn!(cake_id = %cake.id, "Skipping cake with duplicate id");
                continue;
            }
            catalog.cakes.push(cake);
        }
        catalog
    }

    /// The built-in catalog every session starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::cakes())
    }

    /// All cakes in catalog order.
    #[must_use]
    pub fn cakes(&self) -> &[Cake] {
        &self.cakes
    }

    /// The cake with `id`, if present.
    #[must_use]
    pub fn get(&self, id: CakeId) -> Option<&Cake> {
        self.cakes.iter().find(|cake| cake.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cakes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cakes.is_empty()
    }

    /// Bumped on every mutation, for memoizing derived views.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Identifier the next created cake will get: one past the largest
    /// existing identifier, or 1 for an empty catalog.
    #[must_use]
    pub fn next_id(&self) -> CakeId {
        self.cakes
            .iter()
            .map(|cake| cake.id)
            .max()
            .map_or(CakeId::new(1), |max| max.next())
    }

    /// Append a new cake and return its identifier.
    pub fn create(&mut self, draft: CakeDraft) -> CakeId {
        let id = self.next_id();
        self.cakes.push(draft.with_id(id));
        self.revision += 1;
        id
    }

    /// Replace the cake with the same identifier.
    ///
    /// Returns false (and changes nothing) if no cake has that identifier.
    pub fn update(&mut self, cake: Cake) -> bool {
        let Some(slot) = self.cakes.iter_mut().find(|c| c.id == cake.id) else {
            return false;
        };
        *slot = cake;
        self.revision += 1;
        true
    }

    /// Remove the cake with `id`, returning it if it existed.
    pub fn delete(&mut self, id: CakeId) -> Option<Cake> {
        let index = self.cakes.iter().position(|cake| cake.id == id)?;
        self.revision += 1;
        Some(self.cakes.remove(index))
    }
}
