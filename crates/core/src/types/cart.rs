//! Cart line records.

use serde::{Deserialize, Serialize};

use super::cake::Cake;
use super::id::CakeId;
use super::image::ImageRef;
use super::price::Price;

/// A quantity of one cake in the shopper's cart.
///
/// Name, price and image are snapshots taken when the cake was first added;
/// later catalog edits do not change them. The `id` is not checked against the
/// catalog, so a line can outlive its cake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CakeId,
    pub name: String,
    pub price: Price,
    pub image_url: ImageRef,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    /// Start a line for `cake` with a quantity of one.
    #[must_use]
    pub fn for_cake(cake: &Cake) -> Self {
        Self {
            id: cake.id,
            name: cake.name.clone(),
            price: cake.price,
            image_url: cake.image_url.clone(),
            quantity: 1,
        }
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}
