//! Cart persistence in local storage.
//!
//! The cart is stored as a JSON array of lines under [`CART_STORAGE_KEY`]:
//!
//! ```json
//! [{"id":1,"name":"Velvet Dream","price":24.99,"imageUrl":"https://...","quantity":2}]
//! ```
//!
//! Saving rewrites the whole array. Loading happens once at startup.

use thiserror::Error;
use tracing::{debug, instrument};

use cake_shop_core::CartLine;

use super::Cart;
use crate::storage::{LocalStorage, StorageError};

/// Fixed key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "cake-shop-cart";

/// Errors reading or writing the stored cart.
#[derive(Debug, Error)]
pub enum CartPersistError {
    #[error("cart storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("stored cart is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read the stored cart. A missing key is an empty cart.
///
/// # Errors
///
/// Returns `CartPersistError` if storage cannot be read or holds something
/// other than a list of cart lines.
#[instrument(skip(storage))]
pub fn load_cart(storage: &impl LocalStorage) -> Result<Cart, CartPersistError> {
    let Some(raw) = storage.get_item(CART_STORAGE_KEY)? else {
        debug!("No stored cart");
        return Ok(Cart::new());
    };
    let lines: Vec<CartLine> = serde_json::from_str(&raw)?;
    let cart = Cart::from_lines(lines);
    debug!(lines = cart.len(), "Loaded stored cart");
    Ok(cart)
}

/// Overwrite the stored cart with `cart`.
///
/// # Errors
///
/// Returns `CartPersistError` if the cart cannot be written.
pub fn save_cart(storage: &mut impl LocalStorage, cart: &Cart) -> Result<(), CartPersistError> {
    let raw = serde_json::to_string(cart)?;
    storage.set_item(CART_STORAGE_KEY, &raw)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cake_shop_core::{Cake, CakeId, ImageRef};

    use super::*;
    use crate::storage::MemoryStorage;

    fn sample_cart() -> Cart {
        let cake = Cake {
            id: CakeId::new(1),
            name: "Velvet Dream".to_string(),
            description: String::new(),
            long_description: String::new(),
            price: "24.99".parse().unwrap(),
            image_url: ImageRef::new("https://example.com/v.jpg"),
        };
        let mut cart = Cart::new();
        cart.add(&cake);
        cart.add(&cake);
        cart
    }

    #[test]
    fn test_missing_key_is_empty_cart() {
        let storage = MemoryStorage::new();
        assert!(load_cart(&storage).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let cart = sample_cart();

        save_cart(&mut storage, &cart).unwrap();
        assert_eq!(load_cart(&storage).unwrap(), cart);
    }

    #[test]
    fn test_stored_format() {
        let mut storage = MemoryStorage::new();
        save_cart(&mut storage, &sample_cart()).unwrap();

        let raw = storage.get_item(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":1,"name":"Velvet Dream","price":24.99,"imageUrl":"https://example.com/v.jpg","quantity":2}]"#
        );
    }

    #[test]
    fn test_malformed_value() {
        let storage = MemoryStorage::new().with_item(CART_STORAGE_KEY, "{not json");
        assert!(matches!(
            load_cart(&storage),
            Err(CartPersistError::Malformed(_))
        ));

        let storage = MemoryStorage::new().with_item(CART_STORAGE_KEY, r#"{"id":1}"#);
        assert!(matches!(
            load_cart(&storage),
            Err(CartPersistError::Malformed(_))
        ));
    }

    #[test]
    fn test_storage_failures_surface() {
        let mut storage = MemoryStorage::disabled();
        assert!(matches!(
            load_cart(&storage),
            Err(CartPersistError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            save_cart(&mut storage, &sample_cart()),
            Err(CartPersistError::Storage(StorageError::Unavailable))
        ));
    }
}
