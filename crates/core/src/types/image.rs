//! Image reference type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a cake image: either a URL or a self-contained `data:` URL.
///
/// Embedded references carry the whole image inline, so they can be large.
/// Callers that persist them should bound their size at intake.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Prefix shared by all embedded image references.
    pub const DATA_URL_PREFIX: &'static str = "data:";

    /// Wrap a URL or data URL. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(reference: impl AsRef<str>) -> Self {
        Self(reference.as_ref().trim().to_owned())
    }

    /// Build an embedded reference from an already base64-encoded payload.
    #[must_use]
    pub fn embedded(mime_type: &str, base64_payload: &str) -> Self {
        Self(format!(
            "{}{mime_type};base64,{base64_payload}",
            Self::DATA_URL_PREFIX
        ))
    }

    /// Returns true if no image is referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the image data is carried inline.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.0.starts_with(Self::DATA_URL_PREFIX)
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the reference in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_embedded() {
            // Printing a multi-megabyte payload helps nobody.
            let header = self.0.split(',').next().unwrap_or_default();
            write!(f, "{header},<{} bytes>", self.0.len())
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ImageRef {
    fn from(reference: String) -> Self {
        Self::new(reference)
    }
}
