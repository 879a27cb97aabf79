//! Built-in cakes every session starts with.

use cake_shop_core::{Cake, CakeId, ImageRef, Price};

struct SeedCake {
    id: u32,
    name: &'static str,
    description: &'static str,
    long_description: &'static str,
    price_cents: u32,
    image_url: &'static str,
}

const SEED: &[SeedCake] = &[
    SeedCake {
        id: 1,
        name: "Velvet Dream",
        description: "A rich red velvet cake with a smooth cream cheese frosting.",
        long_description: "Indulge in our signature Velvet Dream cake. Layers of moist, scarlet-hued red velvet sponge are perfectly balanced with a luxurious, tangy cream cheese frosting. A classic reborn, perfect for any celebration.",
        price_cents: 2499,
        image_url: "https://bakeido.com/cdn/shop/files/Bakeido_Redvelvet_Cake_4_cd5dd747-6c02-44f0-ad6b-267f2ed80afd.jpg?v=1722530072",
    },
    SeedCake {
        id: 2,
        name: "Chocolate Decadence",
        description: "An intense dark chocolate cake for the true chocoholic.",
        long_description: "Experience pure chocolate bliss with our Chocolate Decadence. This cake features a deep, dark chocolate sponge, a silky chocolate ganache filling, and is enrobed in a glossy chocolate glaze. It's a truly unforgettable experience for any chocolate lover.",
        price_cents: 2850,
        image_url: "https://www.eatwicked.com/wp-content/uploads/2025/02/eat-wicked-cakes-sin-desserts-035.jpg",
    },
    SeedCake {
        id: 3,
        name: "Lemon Zest Delight",
        description: "A light and fluffy lemon cake with a tangy lemon glaze.",
        long_description: "Brighten your day with our Lemon Zest Delight. This cake is made with fresh lemons, giving it a wonderfully fragrant and zesty flavor. The light sponge is soaked in a lemon syrup and topped with a sweet and tangy glaze.",
        price_cents: 2200,
        image_url: "https://trivandrumcakehouse.com/wp-content/uploads/2019/11/Lemon-delight-cake-.jpeg",
    },
    SeedCake {
        id: 4,
        name: "Strawberry Shortcake",
        description: "Classic vanilla sponge layered with fresh strawberries and cream.",
        long_description: "A timeless classic, our Strawberry Shortcake is the epitome of summer. Fluffy vanilla sponge cake is layered with freshly whipped cream and sweet, juicy strawberries. It's simple, elegant, and utterly delicious.",
        price_cents: 2675,
        image_url: "https://www.piesandtacos.com/wp-content/uploads/2024/02/Strawberry-Shortcake-Cake-10-scaled.jpg",
    },
    SeedCake {
        id: 5,
        name: "Carrot Patch Classic",
        description: "A moist carrot cake packed with nuts and spices, topped with cream cheese frosting.",
        long_description: "Our Carrot Patch Classic is a fan favorite for a reason. This incredibly moist cake is packed with grated carrots, crunchy walnuts, and a perfect blend of warm spices. It's all topped off with our signature, not-too-sweet cream cheese frosting.",
        price_cents: 2500,
        image_url: "https://www.bakewithstork.com/-/media/Project/Upfield/Whitelabels/Bake-With-Stork-UK/Assets/Recipes/Sync-Recipes/6f622117-ac83-4823-a582-269978cfbf97.jpg?rev=1c3fa86954d7410c9132e5c391f13d24&w=1600",
    },
    SeedCake {
        id: 6,
        name: "Coconut Cream Cloud",
        description: "A dreamy coconut cake with a light coconut cream filling.",
        long_description: "Float away on our Coconut Cream Cloud cake. This delicate cake features layers of coconut-infused sponge, a light and airy coconut cream filling, and is covered in toasted coconut flakes. A tropical paradise in every bite.",
        price_cents: 2700,
        image_url: "https://yeyfood.com/wp-content/uploads/2025/08/WEB1A_close-up_view_of_a_slice_of_coconut_cloud_cake.__6c6090c3-2537-4be0-86fb-7c1b34b154ea_3.jpg",
    },
];

/// The seed cakes, in catalog order.
#[must_use]
pub fn cakes() -> Vec<Cake> {
    SEED.iter()
        .map(|seed| Cake {
            id: CakeId::new(seed.id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            long_description: seed.long_description.to_string(),
            price: Price::from_cents(seed.price_cents),
            image_url: ImageRef::new(seed.image_url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_is_well_formed() {
        let cakes = cakes();
        assert_eq!(cakes.len(), 6);

        let ids: HashSet<_> = cakes.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), cakes.len());
        assert!(cakes.iter().all(|c| !c.image_url.is_empty()));
        assert!(cakes.iter().all(|c| c.price > Price::ZERO));
    }
}
