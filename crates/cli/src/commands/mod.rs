//! Command handlers shared by one-shot invocations and the shell.
//!
//! Each handler drives [`AppState`] and writes its result to `out`. State
//! commands report "nothing happened" as `false`/`None`; the handlers turn
//! the cases a user should hear about into [`AppError`]s.

pub mod admin;
pub mod cart;
pub mod shell;
pub mod shop;

use std::io::Write;

use cake_shop_storefront::config::StorefrontConfig;
use cake_shop_storefront::prompt::Prompt;
use cake_shop_storefront::storage::{FileStorage, LocalStorage};
use cake_shop_storefront::{AppError, AppState, View};
use thiserror::Error;

use crate::ShopCommand;

/// Errors a command can end with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Shop backed by the configured data directory.
pub type Shop = AppState<FileStorage>;

/// Open the shop on the built-in catalog, restoring the stored cart.
pub fn open_shop(config: &StorefrontConfig) -> Shop {
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening shop");
    AppState::new(FileStorage::new(config.data_dir.clone()))
}

/// Run one command against `shop`.
///
/// # Errors
///
/// Returns `CommandError` if the command names something that does not exist,
/// an image file cannot be used, or output cannot be written.
pub async fn dispatch<S: LocalStorage>(
    shop: &mut AppState<S>,
    command: ShopCommand,
    prompt: &mut impl Prompt,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match command {
        ShopCommand::List { search, sort } => {
            shop.set_view(View::Shop);
            shop::list(shop, search, sort, out)
        }
        ShopCommand::Show { id } => {
            shop.set_view(View::Shop);
            shop::show(shop, id, out)
        }
        ShopCommand::Cart { action } => cart::run(shop, action, out),
        ShopCommand::Checkout => cart::checkout(shop, prompt, out),
        ShopCommand::Admin { action } => {
            shop.set_view(View::Admin);
            admin::run(shop, action, prompt, config, out).await
        }
    }
}
