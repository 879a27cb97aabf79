//! Integration tests for the cake shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cake-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_scenarios` - Whole sessions against file-backed storage,
//!   including restarts
//! - `cart_properties` - Cart invariants under arbitrary command sequences
//!
//! Nothing here needs a network or a running service; each test gets its own
//! temporary data directory.

use std::path::PathBuf;

use cake_shop_core::CartLine;
use cake_shop_storefront::AppState;
use cake_shop_storefront::cart::CART_STORAGE_KEY;
use cake_shop_storefront::prompt::Prompt;
use cake_shop_storefront::storage::FileStorage;
use tempfile::TempDir;

/// A data directory that outlives individual sessions.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary data directory"),
        }
    }

    /// Start a session on the seeded catalog, as a fresh page load would.
    #[must_use]
    pub fn open(&self) -> AppState<FileStorage> {
        AppState::new(FileStorage::new(self.dir.path()))
    }

    /// Path of the file holding the stored cart.
    #[must_use]
    pub fn cart_file(&self) -> PathBuf {
        self.dir.path().join(format!("{CART_STORAGE_KEY}.json"))
    }

    /// Lines as they are currently written on disk.
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or does not hold cart lines.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn stored_lines(&self) -> Vec<CartLine> {
        let raw = std::fs::read_to_string(self.cart_file()).expect("Cart file should exist");
        serde_json::from_str(&raw).expect("Cart file should hold cart lines")
    }

    /// Overwrite the stored cart with arbitrary text.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_raw_cart(&self, raw: &str) {
        std::fs::write(self.cart_file(), raw).expect("Failed to write cart file");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompt with canned answers that records everything it is shown.
#[derive(Debug, Default)]
pub struct RecordingPrompt {
    answers: Vec<bool>,
    pub confirmations: Vec<String>,
    pub acknowledgments: Vec<String>,
}

impl RecordingPrompt {
    /// Answer confirmations in order; once the answers run out, say no.
    #[must_use]
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().rev().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompt for RecordingPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop().unwrap_or(false)
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }
}
