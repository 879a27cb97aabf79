//! Application state.
//!
//! [`AppState`] owns everything the shop knows at runtime: the catalog, the
//! cart, the local storage the cart is mirrored to, and the view selection.
//! Front ends drive it through command methods and read derived views back;
//! nothing outside this module mutates its fields.
//!
//! Every cart command writes the whole cart to storage before returning.
//! Storage failures are logged and otherwise ignored: the in-memory change
//! always stands.

use std::fmt;

use cake_shop_core::{Cake, CakeDraft, CakeId, CartLine, Price};
use tracing::{debug, error, info, instrument};

use crate::cart::Cart;
use crate::cart::persistence::{load_cart, save_cart};
use crate::catalog::Catalog;
use crate::intake::{CakeForm, CakeSubmission};
use crate::projection::{ProjectionMemo, SortKey};
use crate::prompt::Prompt;
use crate::storage::LocalStorage;

/// Question asked before a cake is removed from the catalog.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this cake?";

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Shop,
    Admin,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shop => "shop",
            Self::Admin => "admin",
        })
    }
}

/// The shop's runtime state.
#[derive(Debug)]
pub struct AppState<S> {
    catalog: Catalog,
    cart: Cart,
    storage: S,
    view: View,
    selected: Option<CakeId>,
    cart_open: bool,
    search_term: String,
    sort_key: SortKey,
    projection: ProjectionMemo,
}

impl<S: LocalStorage> AppState<S> {
    /// Start a session on the built-in catalog, restoring the stored cart.
    pub fn new(storage: S) -> Self {
        Self::with_catalog(Catalog::seeded(), storage)
    }

    /// Start a session on `catalog`, restoring the stored cart.
    ///
    /// A cart that cannot be read or parsed is logged and replaced by an
    /// empty one.
    pub fn with_catalog(catalog: Catalog, storage: S) -> Self {
        let cart = load_cart(&storage).unwrap_or_else(|e| {
            error!(error = %e, "Could not load cart from local storage");
            Cart::new()
        });
        info!(
            cakes = catalog.len(),
            cart_lines = cart.len(),
            "Storefront state ready"
        );

        Self {
            catalog,
            cart,
            storage,
            view: View::default(),
            selected: None,
            cart_open: false,
            search_term: String::new(),
            sort_key: SortKey::default(),
            projection: ProjectionMemo::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give up the state, keeping its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    // =========================================================================
    // Cart commands
    // =========================================================================

    /// Add one of the catalog cake `id` to the cart.
    ///
    /// Returns false if the catalog has no such cake.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: CakeId) -> bool {
        let Some(cake) = self.catalog.get(id) else {
            debug!("Cake not in catalog");
            return false;
        };
        self.cart.add(cake);
        self.persist_cart();
        true
    }

    /// Add one more of an existing cart line.
    #[instrument(skip_all, fields(cake_id = %line.id))]
    pub fn increment_line(&mut self, line: &CartLine) -> bool {
        let changed = self.cart.increment(line);
        self.persist_cart();
        changed
    }

    /// Take one away from a cart line, removing it at quantity one.
    #[instrument(skip(self))]
    pub fn decrement_line(&mut self, id: CakeId) -> bool {
        let changed = self.cart.decrement(id);
        self.persist_cart();
        changed
    }

    /// Remove a cart line outright.
    #[instrument(skip(self))]
    pub fn remove_line(&mut self, id: CakeId) -> bool {
        let changed = self.cart.remove(id);
        self.persist_cart();
        changed
    }

    /// Show the checkout acknowledgment with the cart total.
    ///
    /// Nothing is charged or recorded and the cart is left as it is. Returns
    /// the total, or `None` for an empty cart (there is nothing to check out).
    #[instrument(skip_all)]
    pub fn checkout(&self, prompt: &mut impl Prompt) -> Option<Price> {
        if self.cart.is_empty() {
            debug!("Checkout with empty cart");
            return None;
        }
        let total = self.cart.total_price();
        prompt.acknowledge(&format!(
            "Thank you for your order! Your total is {total}."
        ));
        info!(%total, items = self.cart.total_item_count(), "Checkout acknowledged");
        Some(total)
    }

    fn persist_cart(&mut self) {
        if let Err(e) = save_cart(&mut self.storage, &self.cart) {
            error!(error = %e, "Could not save cart to local storage");
        }
    }

    // =========================================================================
    // Catalog commands
    // =========================================================================

    /// Add a new cake to the catalog.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub fn create_cake(&mut self, draft: CakeDraft) -> CakeId {
        let id = self.catalog.create(draft);
        info!(cake_id = %id, "Cake created");
        id
    }

    /// Replace a catalog cake. Unknown identifiers are ignored.
    ///
    /// Cart lines keep the snapshot taken when they were added.
    #[instrument(skip_all, fields(cake_id = %cake.id))]
    pub fn update_cake(&mut self, cake: Cake) -> bool {
        let updated = self.catalog.update(cake);
        if updated {
            info!("Cake updated");
        } else {
            debug!("Update ignored, cake not in catalog");
        }
        updated
    }

    /// Apply a form submission: creates when it has no identifier, updates
    /// otherwise. Returns the affected identifier, or `None` if an update
    /// targeted a cake that no longer exists.
    pub fn save_submission(&mut self, submission: CakeSubmission) -> Option<CakeId> {
        match submission {
            CakeSubmission::Create(draft) => Some(self.create_cake(draft)),
            CakeSubmission::Update(cake) => {
                let id = cake.id;
                self.update_cake(cake).then_some(id)
            }
        }
    }

    /// Submit the cake form. A rejected form is reported through `prompt`
    /// and changes nothing.
    pub fn submit_form(&mut self, form: &CakeForm, prompt: &mut impl Prompt) -> Option<CakeId> {
        match form.submit() {
            Ok(submission) => self.save_submission(submission),
            Err(rejection) => {
                debug!(%rejection, "Cake form rejected");
                prompt.acknowledge(&rejection.to_string());
                None
            }
        }
    }

    /// Delete a cake after the user confirms, and drop its cart line.
    ///
    /// Returns true if the user confirmed (whether or not the cake existed).
    #[instrument(skip(self, prompt))]
    pub fn delete_cake(&mut self, id: CakeId, prompt: &mut impl Prompt) -> bool {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            debug!("Deletion cancelled");
            return false;
        }

        match self.catalog.delete(id) {
            Some(cake) => info!(name = %cake.name, "Cake deleted"),
            None => debug!("Delete ignored, cake not in catalog"),
        }
        if self.selected == Some(id) {
            self.selected = None;
        }

        self.cart.cascade_delete(id);
        self.persist_cart();
        true
    }

    // =========================================================================
    // View commands
    // =========================================================================

    /// Switch screens. Any open detail view is closed.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.selected = None;
    }

    /// Open the detail view for a catalog cake.
    ///
    /// Returns false if the catalog has no such cake.
    pub fn view_details(&mut self, id: CakeId) -> bool {
        if self.catalog.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Close the detail view.
    pub const fn back_to_shop(&mut self) {
        self.selected = None;
    }

    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub const fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The cake open in the detail view, if any.
    #[must_use]
    pub fn selected_cake(&self) -> Option<&Cake> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    /// Catalog cakes matching the search term, in sort order.
    pub fn visible_cakes(&mut self) -> Vec<&Cake> {
        if !self
            .projection
            .is_cached(&self.catalog, &self.search_term, self.sort_key)
        {
            debug!(search = %self.search_term, sort = %self.sort_key, "Recomputing visible cakes");
        }
        let ids = self
            .projection
            .ids(&self.catalog, &self.search_term, self.sort_key);
        ids.iter().filter_map(|id| self.catalog.get(*id)).collect()
    }

    /// Total number of items in the cart.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.total_item_count()
    }

    /// Cart total, rounded to cents.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total_price()
    }
}
