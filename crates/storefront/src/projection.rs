//! Search and sort view over the catalog.
//!
//! [`project`] is a pure function of the catalog, a search term and a
//! [`SortKey`]. [`ProjectionMemo`] remembers the last result so repeated
//! reads with unchanged inputs skip the work.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use cake_shop_core::{Cake, CakeId};
use thiserror::Error;

use crate::catalog::Catalog;

/// Error for an unrecognised sort key string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key {0:?} (expected name-asc, name-desc, price-asc or price-desc)")]
pub struct ParseSortKeyError(String);

/// How the visible cakes are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// Every sort key, in menu order.
    pub const ALL: [Self; 4] = [Self::NameAsc, Self::NameDesc, Self::PriceAsc, Self::PriceDesc];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Menu label for the key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::PriceAsc => "Price (Low to High)",
            Self::PriceDesc => "Price (High to Low)",
        }
    }

    const fn is_descending(self) -> bool {
        matches!(self, Self::NameDesc | Self::PriceDesc)
    }

    /// Compare two cakes under this key.
    #[must_use]
    pub fn compare(self, a: &Cake, b: &Cake) -> Ordering {
        let ascending = match self {
            Self::NameAsc | Self::NameDesc => compare_names(&a.name, &b.name),
            Self::PriceAsc | Self::PriceDesc => a.price.cmp(&b.price),
        };
        if self.is_descending() {
            ascending.reverse()
        } else {
            ascending
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Collation for cake names.
///
/// Letters compare case-insensitively first; only when two names are equal
/// ignoring case does lowercase sort before uppercase (`"apple" < "Apple"`).
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

/// Case-insensitive substring match; an empty term matches everything.
#[must_use]
pub fn matches_search(name: &str, search_term: &str) -> bool {
    search_term.is_empty() || name.to_lowercase().contains(&search_term.to_lowercase())
}

/// Cakes whose names contain `search_term`, ordered by `sort_key`.
///
/// The sort is stable: cakes that compare equal keep their catalog order.
#[must_use]
pub fn project<'a>(cakes: &'a [Cake], search_term: &str, sort_key: SortKey) -> Vec<&'a Cake> {
    let mut visible: Vec<&Cake> = cakes
        .iter()
        .filter(|cake| matches_search(&cake.name, search_term))
        .collect();
    visible.sort_by(|a, b| sort_key.compare(a, b));
    visible
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectionKey {
    revision: u64,
    search_term: String,
    sort_key: SortKey,
}

/// Single-entry memo of the last projection, keyed on its three inputs.
#[derive(Debug, Clone, Default)]
pub struct ProjectionMemo {
    entry: Option<(ProjectionKey, Vec<CakeId>)>,
}

impl ProjectionMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of the visible cakes, recomputed only if the catalog
    /// revision, search term or sort key changed since the last call.
    pub fn ids(&mut self, catalog: &Catalog, search_term: &str, sort_key: SortKey) -> &[CakeId] {
        let key = ProjectionKey {
            revision: catalog.revision(),
            search_term: search_term.to_string(),
            sort_key,
        };
        let stale = self.entry.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            let ids = project(catalog.cakes(), search_term, sort_key)
                .into_iter()
                .map(|cake| cake.id)
                .collect();
            self.entry = Some((key, ids));
        }
        match &self.entry {
            Some((_, ids)) => ids.as_slice(),
            None => &[],
        }
    }

    /// Whether a result is cached for exactly these inputs.
    #[must_use]
    pub fn is_cached(&self, catalog: &Catalog, search_term: &str, sort_key: SortKey) -> bool {
        self.entry.as_ref().is_some_and(|(key, _)| {
            key.revision == catalog.revision()
                && key.search_term == search_term
                && key.sort_key == sort_key
        })
    }
}
