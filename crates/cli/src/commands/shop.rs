//! Catalog browsing: the projected list and the detail view.

use std::io::Write;

use cake_shop_core::CakeId;
use cake_shop_storefront::projection::SortKey;
use cake_shop_storefront::storage::LocalStorage;
use cake_shop_storefront::{AppError, AppState};

use super::CommandError;
use crate::render;

/// Update the search and sort if given, then print the visible cakes.
pub fn list<S: LocalStorage>(
    shop: &mut AppState<S>,
    search: Option<String>,
    sort: Option<SortKey>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if let Some(term) = search {
        shop.set_search_term(term);
    }
    if let Some(key) = sort {
        shop.set_sort_key(key);
    }
    shop.back_to_shop();

    let search_term = shop.search_term().to_string();
    let sort_key = shop.sort_key();
    let cart = shop.cart().clone();
    let visible = shop.visible_cakes();

    render::write_listing_header(out, visible.len(), &search_term, sort_key)?;
    render::write_cake_list(out, &visible, &cart)?;
    Ok(())
}

/// Open the detail view for `id` and print it.
pub fn show<S: LocalStorage>(
    shop: &mut AppState<S>,
    id: CakeId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if !shop.view_details(id) {
        return Err(AppError::CakeNotFound(id).into());
    }
    let Some(cake) = shop.selected_cake() else {
        return Err(AppError::CakeNotFound(id).into());
    };
    let in_cart = shop.cart().line(id).map_or(0, |line| line.quantity);
    render::write_cake_detail(out, cake, in_cart)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cake_shop_storefront::storage::MemoryStorage;

    use super::*;

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_list_keeps_search_between_calls() {
        let mut shop = AppState::new(MemoryStorage::new());
        let mut out = Vec::new();

        list(&mut shop, Some("cream".to_string()), None, &mut out).unwrap();
        let first = output(std::mem::take(&mut out));
        assert!(first.contains("Coconut Cream Cloud"));
        assert!(!first.contains("Velvet Dream"));

        list(&mut shop, None, Some(SortKey::PriceDesc), &mut out).unwrap();
        let second = output(out);
        assert!(second.contains("Coconut Cream Cloud"));
        assert!(!second.contains("Velvet Dream"));
        assert_eq!(shop.sort_key(), SortKey::PriceDesc);
    }

    #[test]
    fn test_show_unknown_cake() {
        let mut shop = AppState::new(MemoryStorage::new());
        let err = show(&mut shop, CakeId::new(99), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::App(AppError::CakeNotFound(id)) if id == CakeId::new(99)
        ));
    }

    #[test]
    fn test_show_prints_long_description() {
        let mut shop = AppState::new(MemoryStorage::new());
        let mut out = Vec::new();
        show(&mut shop, CakeId::new(1), &mut out).unwrap();

        let text = output(out);
        let cake = shop.catalog().get(CakeId::new(1)).unwrap();
        assert!(text.contains(&cake.name));
        assert!(text.contains(&cake.long_description));
        assert_eq!(shop.selected_cake().map(|c| c.id), Some(CakeId::new(1)));
    }
}
