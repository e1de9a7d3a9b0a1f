//! Product catalogue and random item generation.

use hv_core::{HiveRng, Item, ItemId, Rgb};

/// Shelf products the load generator draws from.
pub const PRODUCTS: &[&str] = &[
    "Spring water",
    "Hazelnut cocoa spread 400 g",
    "Chocolate sandwich biscuits",
    "Cola",
    "Cola zero",
    "Muesli raisin fig apricot",
    "Sesame biscuits",
    "Wholemeal sandwich loaf",
    "Three-fish seaweed soup",
    "Chocolate cereal",
    "Cocoa hazelnut spread",
    "White sandwich loaf",
    "Cocoa drink powder",
    "Rolled oats",
    "Dark chocolate 70%",
    "Dark chocolate filled biscuits",
    "Fruit and nut muesli",
    "Milk bread rolls",
    "Milk chocolate biscuits",
    "Mineral water 1.5 L",
    "Dark chocolate 85%",
    "Nut crunch cereal",
    "Wholemeal flour loaf",
    "Country crisp cereal",
    "Rusks",
    "Apple hazelnut biscuits",
    "Organic spread",
    "Peanut butter",
    "American sandwich loaf",
    "Organic chocolate cereal",
    "Peach iced tea",
    "Wholegrain crackers",
    "Chocolate nut cereal",
    "Reduced sugar cocoa powder",
    "Unsweetened cocoa powder",
    "Chocolate chip snacks",
    "Seeded sandwich loaf",
    "Natural yoghurt",
];

/// Hands out items with unique ids, random products, colors and quantities.
pub struct Catalogue {
    rng:     HiveRng,
    next_id: u32,
}

impl Catalogue {
    pub fn new(rng: HiveRng) -> Self {
        Self { rng, next_id: 0 }
    }

    /// A fresh item with the next id.
    pub fn next_item(&mut self) -> anyhow::Result<Item> {
        let name = self.rng.choose(PRODUCTS).copied().unwrap_or("Unlabelled crate");
        let quantity = self.rng.gen_range(1..=20);
        let color = Rgb::new(self.rng.random(), self.rng.random(), self.rng.random());
        let item = Item::new(ItemId(self.next_id), quantity, name, color)?;
        self.next_id += 1;
        Ok(item)
    }

    /// Number of items handed out so far.
    pub fn issued(&self) -> u32 {
        self.next_id
    }

    pub fn rng(&mut self) -> &mut HiveRng {
        &mut self.rng
    }
}
