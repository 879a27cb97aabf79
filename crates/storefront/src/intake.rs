//! The admin cake form.
//!
//! [`CakeForm`] holds free-text field values the way an HTML form does and
//! turns them into a [`CakeSubmission`] on submit. Price text is parsed
//! leniently; the only hard requirement is an image.
//!
//! # Image intake
//!
//! An image is either a pasted URL or a local file. Files are read with
//! `tokio::fs` and embedded as a base64 `data:` URL, so the cake carries its
//! image inline. Only that embedded form is kept; nothing else about the file
//! is stored.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cake_shop_core::{Cake, CakeDraft, CakeId, ImageRef, Price};
use thiserror::Error;
use tracing::{debug, instrument};

/// Alert shown when a form is submitted without an image.
pub const MISSING_IMAGE_MESSAGE: &str = "Please upload an image for the cake.";

/// Errors reading a selected image file.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("could not read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image {path} is {size} bytes, more than the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// Why a submit did not produce a cake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormRejection {
    #[error("{}", MISSING_IMAGE_MESSAGE)]
    MissingImage,
}

/// A well-formed cake produced by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CakeSubmission {
    /// No identifier yet: add to the catalog.
    Create(CakeDraft),
    /// Carries the identifier of the cake being edited.
    Update(Cake),
}

/// Field values of the add/edit cake form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CakeForm {
    editing: Option<CakeId>,
    pub name: String,
    pub description: String,
    pub long_description: String,
    /// Raw price text as typed.
    pub price: String,
    /// URL or `data:` URL; empty until an image is chosen.
    pub image_url: String,
}

impl CakeForm {
    /// A blank form for adding a new cake.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from `cake`, for editing it.
    #[must_use]
    pub fn editing(cake: &Cake) -> Self {
        Self {
            editing: Some(cake.id),
            name: cake.name.clone(),
            description: cake.description.clone(),
            long_description: cake.long_description.clone(),
            price: cake.price.amount().to_string(),
            image_url: cake.image_url.as_str().to_string(),
        }
    }

    /// Use a pasted URL as the image.
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
    }

    /// Read `path` and use it as the embedded image.
    ///
    /// On error the previous image is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError` if the file cannot be read or is larger than
    /// `max_bytes`.
    pub async fn attach_image_file(
        &mut self,
        path: impl AsRef<Path>,
        max_bytes: u64,
    ) -> Result<(), IntakeError> {
        let image = read_image_file(path.as_ref(), max_bytes).await?;
        self.image_url = image.as_str().to_string();
        Ok(())
    }

    /// Validate the fields and build the cake they describe.
    ///
    /// # Errors
    ///
    /// Returns `FormRejection::MissingImage` if no image has been chosen.
    pub fn submit(&self) -> Result<CakeSubmission, FormRejection> {
        let image_url = ImageRef::new(&self.image_url);
        if image_url.is_empty() {
            return Err(FormRejection::MissingImage);
        }

        let draft = CakeDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            long_description: self.long_description.clone(),
            price: Price::parse_lenient(&self.price),
            image_url,
        };

        Ok(match self.editing {
            Some(id) => CakeSubmission::Update(draft.with_id(id)),
            None => CakeSubmission::Create(draft),
        })
    }
}

/// Read an image file into an embedded `data:` reference.
///
/// # Errors
///
/// Returns `IntakeError` if the file cannot be read or is larger than
/// `max_bytes`.
#[instrument]
pub async fn read_image_file(path: &Path, max_bytes: u64) -> Result<ImageRef, IntakeError> {
    let io_error = |source: std::io::Error| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = tokio::fs::metadata(path).await.map_err(io_error)?.len();
    if size > max_bytes {
        return Err(IntakeError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }

    let bytes = tokio::fs::read(path).await.map_err(io_error)?;
    let image = ImageRef::embedded(mime_type_for(path), &STANDARD.encode(&bytes));
    debug!(bytes = bytes.len(), encoded = image.len(), "Embedded image file");
    Ok(image)
}

/// Media type for the data URL, from the file extension.
fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
