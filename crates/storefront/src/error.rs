//! Unified error handling.
//!
//! Provides a unified `AppError` type for front ends. The state commands
//! themselves never fail: storage problems are logged and absorbed, and form
//! problems are reported through a prompt. What remains is bad input at the
//! front end's edge: an identifier that names nothing, or an image file that
//! cannot be used.

use cake_shop_core::CakeId;
use thiserror::Error;

use crate::intake::IntakeError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Selected image could not be taken in.
    #[error("Image error: {0}")]
    Intake(#[from] IntakeError),

    /// No cake with this identifier in the catalog.
    #[error("Not found: cake {0}")]
    CakeNotFound(CakeId),

    /// No cart line for this identifier.
    #[error("Not found: no cake {0} in the cart")]
    LineNotFound(CakeId),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::CakeNotFound(CakeId::new(12));
        assert_eq!(err.to_string(), "Not found: cake 12");

        let err = AppError::LineNotFound(CakeId::new(3));
        assert_eq!(err.to_string(), "Not found: no cake 3 in the cart");
    }

    #[test]
    fn test_intake_error_converts() {
        let err: AppError = IntakeError::TooLarge {
            path: PathBuf::from("big.png"),
            size: 10,
            limit: 4,
        }
        .into();
        assert!(matches!(err, AppError::Intake(IntakeError::TooLarge { .. })));
        assert!(err.to_string().starts_with("Image error: image big.png is 10 bytes"));
    }
}
