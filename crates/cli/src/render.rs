//! Plain-text rendering of storefront views.

use std::io::{self, Write};

use cake_shop_core::{Cake, ImageRef};
use cake_shop_storefront::cart::Cart;
use cake_shop_storefront::projection::SortKey;

/// Longest image reference printed before it is shortened.
const MAX_IMAGE_WIDTH: usize = 48;

/// One line describing the current listing.
pub fn write_listing_header(
    out: &mut impl Write,
    count: usize,
    search_term: &str,
    sort_key: SortKey,
) -> io::Result<()> {
    let noun = if count == 1 { "cake" } else { "cakes" };
    if search_term.is_empty() {
        writeln!(out, "{count} {noun}, sorted by {}", sort_key.label())
    } else {
        writeln!(
            out,
            "{count} {noun} matching \"{search_term}\", sorted by {}",
            sort_key.label()
        )
    }
}

/// Shop cards: name, price, short description and how many are in the cart.
pub fn write_cake_list(out: &mut impl Write, cakes: &[&Cake], cart: &Cart) -> io::Result<()> {
    if cakes.is_empty() {
        return writeln!(out, "  No cakes found.");
    }
    for cake in cakes {
        write!(out, "  #{:<3} {}  {}", cake.id.as_u32(), cake.name, cake.price)?;
        if let Some(line) = cart.line(cake.id) {
            write!(out, "  ({} in cart)", line.quantity)?;
        }
        writeln!(out)?;
        if !cake.description.is_empty() {
            writeln!(out, "        {}", cake.description)?;
        }
    }
    Ok(())
}

/// Detail view for one cake.
pub fn write_cake_detail(out: &mut impl Write, cake: &Cake, in_cart: u32) -> io::Result<()> {
    writeln!(out, "{} (#{})", cake.name, cake.id)?;
    writeln!(out, "{}", cake.price)?;
    writeln!(out, "Image: {}", short_image(&cake.image_url))?;
    writeln!(out)?;
    let text = if cake.long_description.is_empty() {
        &cake.description
    } else {
        &cake.long_description
    };
    writeln!(out, "{text}")?;
    if in_cart > 0 {
        writeln!(out)?;
        writeln!(out, "{in_cart} in your cart")?;
    }
    Ok(())
}

/// Cart lines with line totals, then the item count and order total.
pub fn write_cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is empty.");
    }
    for line in cart.lines() {
        writeln!(
            out,
            "  #{:<3} {}  {} x {} = {}",
            line.id.as_u32(),
            line.name,
            line.price,
            line.quantity,
            line.line_total()
        )?;
    }
    writeln!(
        out,
        "Items: {}  Total: {}",
        cart.total_item_count(),
        cart.total_price()
    )
}

/// Admin table of the whole catalog, in catalog order.
pub fn write_admin_table(out: &mut impl Write, cakes: &[Cake]) -> io::Result<()> {
    writeln!(out, "{:<4} {:<24} {:>9}  Image", "ID", "Name", "Price")?;
    for cake in cakes {
        writeln!(
            out,
            "{:<4} {:<24} {:>9}  {}",
            cake.id.as_u32(),
            cake.name,
            cake.price.to_string(),
            short_image(&cake.image_url)
        )?;
    }
    Ok(())
}

/// Image references can be whole files as data URLs; keep them to one line.
fn short_image(image: &ImageRef) -> String {
    let text = image.as_str();
    if image.is_embedded() {
        let header = text.split(',').next().unwrap_or(text);
        return format!("{header},... ({} bytes)", text.len());
    }
    if text.chars().count() <= MAX_IMAGE_WIDTH {
        return text.to_string();
    }
    let prefix: String = text.chars().take(MAX_IMAGE_WIDTH - 3).collect();
    format!("{prefix}...")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cake_shop_core::CakeId;
    use cake_shop_storefront::catalog::Catalog;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cart_lines_and_totals() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        let velvet = catalog.get(CakeId::new(1)).unwrap();
        cart.add(velvet);
        cart.add(velvet);

        let text = render(|out| write_cart(out, &cart));
        let total = velvet.price * 2;
        assert!(text.contains(&format!("{} x 2 = {total}", velvet.price)));
        assert!(text.ends_with(&format!("Items: 2  Total: {total}\n")));
    }

    #[test]
    fn test_empty_views() {
        assert_eq!(render(|out| write_cart(out, &Cart::new())), "Your cart is empty.\n");
        assert_eq!(
            render(|out| write_cake_list(out, &[], &Cart::new())),
            "  No cakes found.\n"
        );
    }

    #[test]
    fn test_listing_header() {
        let text = render(|out| write_listing_header(out, 1, "cream", SortKey::PriceAsc));
        assert_eq!(text, "1 cake matching \"cream\", sorted by Price (Low to High)\n");

        let text = render(|out| write_listing_header(out, 6, "", SortKey::NameAsc));
        assert_eq!(text, "6 cakes, sorted by Name (A-Z)\n");
    }

    #[test]
    fn test_list_marks_cart_quantity() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add(catalog.get(CakeId::new(2)).unwrap());
        let cakes: Vec<&Cake> = catalog.cakes().iter().collect();

        let text = render(|out| write_cake_list(out, &cakes, &cart));
        assert_eq!(text.matches("(1 in cart)").count(), 1);
        assert!(text.contains("Chocolate Decadence"));
    }

    #[test]
    fn test_embedded_image_is_shortened() {
        let image = ImageRef::embedded("image/png", &"A".repeat(400));
        let short = short_image(&image);
        assert!(short.starts_with("data:image/png;base64,..."));
        assert!(short.len() < 60);

        let long = ImageRef::new(format!("https://example.com/{}", "x".repeat(80)));
        assert_eq!(short_image(&long).chars().count(), MAX_IMAGE_WIDTH);
    }

    #[test]
    fn test_admin_table_lists_every_cake() {
        let catalog = Catalog::seeded();
        let text = render(|out| write_admin_table(out, catalog.cakes()));
        assert_eq!(text.lines().count(), 1 + catalog.len());
        for cake in catalog.cakes() {
            assert!(text.contains(&cake.name));
            assert!(text.contains(&cake.price.to_string()));
        }
    }
}
