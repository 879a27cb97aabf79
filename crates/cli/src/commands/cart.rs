//! Cart commands and checkout.

use std::io::Write;

use cake_shop_core::CakeId;
use cake_shop_storefront::prompt::Prompt;
use cake_shop_storefront::storage::LocalStorage;
use cake_shop_storefront::{AppError, AppState};

use super::CommandError;
use crate::{CartAction, render};

/// Run a `cart` subcommand.
pub fn run<S: LocalStorage>(
    shop: &mut AppState<S>,
    action: CartAction,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match action {
        CartAction::Show => {
            shop.open_cart();
        }
        CartAction::Add { id } => {
            if !shop.add_to_cart(id) {
                return Err(AppError::CakeNotFound(id).into());
            }
        }
        CartAction::Inc { id } => {
            let line = shop
                .cart()
                .line(id)
                .cloned()
                .ok_or(AppError::LineNotFound(id))?;
            shop.increment_line(&line);
        }
        CartAction::Dec { id } => require_line(shop.decrement_line(id), id)?,
        CartAction::Remove { id } => require_line(shop.remove_line(id), id)?,
    }

    render::write_cart(out, shop.cart())?;
    Ok(())
}

fn require_line(changed: bool, id: CakeId) -> Result<(), AppError> {
    if changed {
        Ok(())
    } else {
        Err(AppError::LineNotFound(id))
    }
}

/// Show the order total. The cart is left as it is.
pub fn checkout<S: LocalStorage>(
    shop: &AppState<S>,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if shop.checkout(prompt).is_none() {
        writeln!(out, "Your cart is empty.")?;
    }
    Ok(())
}
