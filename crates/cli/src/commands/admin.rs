//! Catalog administration commands.
//!
//! # Usage
//!
//! ```bash
//! # Add a cake with an embedded image
//! cake-shop admin add --name "Honey Cake" --price 19.50 --image-file honey.png
//!
//! # Change just the price of cake 3
//! cake-shop admin edit 3 --price 17
//!
//! # Delete cake 3 (asks first unless --yes)
//! cake-shop admin delete 3
//! ```
//!
//! Catalog changes live in memory only; run them inside `cake-shop shell` to
//! keep working with the edited catalog.

use std::io::Write;

use cake_shop_core::CakeId;
use cake_shop_storefront::config::StorefrontConfig;
use cake_shop_storefront::intake::CakeForm;
use cake_shop_storefront::prompt::Prompt;
use cake_shop_storefront::storage::LocalStorage;
use cake_shop_storefront::{AppError, AppState};

use super::CommandError;
use crate::{AdminAction, CakeFields, render};

/// Run an `admin` subcommand.
pub async fn run<S: LocalStorage>(
    shop: &mut AppState<S>,
    action: AdminAction,
    prompt: &mut impl Prompt,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match action {
        AdminAction::List => {
            render::write_admin_table(out, shop.catalog().cakes())?;
        }
        AdminAction::Add(fields) => {
            let mut form = CakeForm::new();
            fill_form(&mut form, fields, config).await?;
            if let Some(id) = shop.submit_form(&form, prompt) {
                writeln!(out, "Added cake {id}.")?;
            }
        }
        AdminAction::Edit { id, fields } => {
            let cake = shop.catalog().get(id).ok_or(AppError::CakeNotFound(id))?;
            let mut form = CakeForm::editing(cake);
            fill_form(&mut form, fields, config).await?;
            if let Some(id) = shop.submit_form(&form, prompt) {
                writeln!(out, "Updated cake {id}.")?;
            }
        }
        AdminAction::Delete { id } => delete(shop, id, prompt, out)?,
    }
    Ok(())
}

fn delete<S: LocalStorage>(
    shop: &mut AppState<S>,
    id: CakeId,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let existed = shop.catalog().get(id).is_some();
    if !shop.delete_cake(id, prompt) {
        writeln!(out, "Kept cake {id}.")?;
    } else if existed {
        writeln!(out, "Deleted cake {id}.")?;
    } else {
        writeln!(out, "No cake {id} in the catalog; nothing deleted.")?;
    }
    Ok(())
}

/// Copy the given fields onto the form. An image file wins over the current
/// image; omitted fields are left alone.
async fn fill_form(
    form: &mut CakeForm,
    fields: CakeFields,
    config: &StorefrontConfig,
) -> cake_shop_storefront::Result<()> {
    let CakeFields {
        name,
        description,
        long_description,
        price,
        image_url,
        image_file,
    } = fields;

    if let Some(name) = name {
        form.name = name;
    }
    if let Some(description) = description {
        form.description = description;
    }
    if let Some(long_description) = long_description {
        form.long_description = long_description;
    }
    if let Some(price) = price {
        form.price = price;
    }
    if let Some(url) = image_url {
        form.set_image_url(url);
    }
    if let Some(path) = image_file {
        form.attach_image_file(&path, config.max_image_bytes).await?;
    }
    Ok(())
}
