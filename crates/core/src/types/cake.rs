//! Catalog records.

use serde::{Deserialize, Serialize};

use super::id::CakeId;
use super::image::ImageRef;
use super::price::Price;

/// A cake offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    /// Unique within the catalog.
    pub id: CakeId,
    pub name: String,
    /// One-line blurb shown on cards.
    pub description: String,
    /// Full text shown on the detail view.
    pub long_description: String,
    pub price: Price,
    pub image_url: ImageRef,
}

/// A cake that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeDraft {
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub price: Price,
    pub image_url: ImageRef,
}

impl CakeDraft {
    /// Attach an identifier, producing a catalog record.
    #[must_use]
    pub fn with_id(self, id: CakeId) -> Cake {
        Cake {
            id,
            name: self.name,
            description: self.description,
            long_description: self.long_description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cake_uses_camel_case_fields() {
        let cake = CakeDraft {
            name: "Velvet Dream".to_string(),
            description: "Red velvet".to_string(),
            long_description: "Layers of red velvet".to_string(),
            price: "24.99".parse().unwrap(),
            image_url: ImageRef::new("https://example.com/velvet.jpg"),
        }
        .with_id(CakeId::new(1));

        let json = serde_json::to_value(&cake).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["longDescription"], "Layers of red velvet");
        assert_eq!(json["imageUrl"], "https://example.com/velvet.jpg");
    }
}
