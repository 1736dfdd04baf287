//! Catalog Defaults
//!
//! The menu that ships with the app. Seeds first run and reset.

use crate::domain::{MenuItem, MenuSnapshot};

pub const THICK_SHAKES: &str = "Thick Shakes";
pub const WAFFLES: &str = "Waffles";
pub const MILK_SHAKES: &str = "Milk Shakes";
pub const ICE_CREAMS: &str = "Ice Creams";
pub const BROWNIES: &str = "Brownies";
pub const HOT_BREW: &str = "Hot Brew";
pub const COLD_BREW: &str = "Cold Brew";
pub const JAMUN_SHOTS: &str = "Jamun Shots";
pub const HOT_CHOCOLATE: &str = "Hot Chocolate";

/// Default categories in display order
pub const DEFAULT_CATEGORIES: &[&str] = &[
    THICK_SHAKES,
    WAFFLES,
    MILK_SHAKES,
    ICE_CREAMS,
    BROWNIES,
    HOT_BREW,
    COLD_BREW,
    JAMUN_SHOTS,
    HOT_CHOCOLATE,
];

/// (id, name, description, price, category, image)
type SeedRow = (&'static str, &'static str, &'static str, f64, &'static str, &'static str);

const SEED_ITEMS: &[SeedRow] = &[
    ("1", "Belgian Dark Chocolate", "Rich and creamy dark chocolate blend", 220.0, THICK_SHAKES, "images/thick-shake.jpg"),
    ("2", "Strawberry Cheesecake", "Real strawberries with cheesecake bits", 240.0, THICK_SHAKES, "images/thick-shake.jpg"),
    ("3", "Nutella Overload", "Crispy waffle topped with Nutella", 180.0, WAFFLES, "images/waffel.jpg"),
    ("4", "Red Velvet", "Red velvet base with white chocolate", 190.0, WAFFLES, "images/waffel.jpg"),
    ("5", "Classic Vanilla", "Smooth vanilla bean shake", 150.0, MILK_SHAKES, "images/milk-shake.jpg"),
    ("6", "Oreo Crunch", "Crunchy Oreos blended to perfection", 170.0, MILK_SHAKES, "images/milk-shake.jpg"),
    ("7", "French Vanilla Scoop", "Classic creamy vanilla", 90.0, ICE_CREAMS, "images/ice-cream.jpg"),
    ("8", "Butterscotch", "Crunchy praline butterscotch", 100.0, ICE_CREAMS, "images/ice-cream.jpg"),
    ("9", "Walnut Fudge Brownie", "Warm gooey fudge with walnuts", 120.0, BROWNIES, "images/brownie.jpg"),
    ("10", "Sizzling Brownie", "Served with vanilla ice cream", 180.0, BROWNIES, "images/brownie.jpg"),
    ("11", "Cappuccino", "Espresso with steamed milk foam", 140.0, HOT_BREW, "images/hot-brew.jpg"),
    ("12", "Americano", "Double shot espresso with hot water", 110.0, HOT_BREW, "images/hot-brew.jpg"),
    ("13", "Classic Cold Brew", "Steeped for 18 hours", 160.0, COLD_BREW, "images/cold-brew.jpg"),
    ("14", "Vietnam Cold Coffee", "Cold brew with condensed milk", 180.0, COLD_BREW, "images/cold-brew.jpg"),
    ("15", "Classic Jamun Shot", "Pure jamun pulp with spice mix", 80.0, JAMUN_SHOTS, "images/jamun-shot.jpg"),
    ("16", "Classic Hot Cocoa", "Rich cocoa with marshmallows", 190.0, HOT_CHOCOLATE, "images/hot-chocolate.jpg"),
    ("17", "Spiced Hot Chocolate", "Cocoa with a hint of cinnamon", 210.0, HOT_CHOCOLATE, "images/hot-chocolate.jpg"),
];

/// Default items in display order
pub fn default_items() -> Vec<MenuItem> {
    SEED_ITEMS
        .iter()
        .map(|&(id, name, description, price, category, image)| MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            image: image.to_string(),
        })
        .collect()
}

/// Default categories as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// The full default menu with no image overrides
pub fn default_snapshot() -> MenuSnapshot {
    MenuSnapshot {
        items: default_items(),
        categories: default_categories(),
        category_images: Default::default(),
    }
}

/// Image of the first default item in `category`, if any
pub fn default_image_for(category: &str) -> Option<&'static str> {
    SEED_ITEMS
        .iter()
        .find(|row| row.4 == category)
        .map(|row| row.5)
}
