//! Cart State
//!
//! The customer's in-progress order. Lives for one session, never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::{find_by_id_mut, Entity, MenuItem};

/// One product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Copy of the item at the time it was added
    pub item: MenuItem,
    /// Always at least 1 while the line exists
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = str;

    fn id(&self) -> &str {
        &self.item.id
    }
}

/// Lines keyed by item ID, in first-insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one of `item`
    pub fn add_item(&mut self, item: &MenuItem) {
        match find_by_id_mut(&mut self.lines, item.id()) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Change a line's quantity by `delta`, dropping it when it reaches zero
    ///
    /// Unknown IDs are ignored.
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        let Some(index) = self.lines.iter().position(|line| line.id() == id) else {
            return;
        };
        let quantity = (i64::from(self.lines[index].quantity) + delta).clamp(0, i64::from(u32::MAX));
        if quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity as u32;
        }
    }

    /// Sum of price x quantity
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of units across all lines
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Names of the products in the cart, in cart order
    pub fn item_names(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.item.name.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "Drinks".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_item_increments_existing_line() {
        let latte = item("1", "Latte", 150.0);
        let brownie = item("2", "Brownie", 120.0);
        let mut cart = Cart::new();

        cart.add_item(&latte);
        cart.add_item(&brownie);
        cart.add_item(&latte);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].item.name, "Latte");
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), 420.0);
    }

    #[test]
    fn test_update_quantity_removes_at_zero() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", "Latte", 150.0));
        cart.add_item(&item("1", "Latte", 150.0));

        cart.update_quantity("1", -1);
        assert_eq!(cart.count(), 1);

        cart.update_quantity("1", -5);
        assert!(cart.is_empty());

        // the line is gone, further updates do nothing
        cart.update_quantity("1", 3);
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", "Latte", 150.0));
        let before = cart.clone();
        cart.update_quantity("nope", 1);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_removal_keeps_order_of_remaining_lines() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", "Latte", 150.0));
        cart.add_item(&item("2", "Brownie", 120.0));
        cart.add_item(&item("3", "Waffle", 180.0));

        cart.update_quantity("2", -1);
        assert_eq!(cart.item_names(), vec!["Latte", "Waffle"]);
    }

    #[test]
    fn test_count_matches_quantities_for_mixed_sequences() {
        let menu = [item("a", "A", 10.0), item("b", "B", 20.5), item("c", "C", 3.0)];
        let mut cart = Cart::new();

        // deterministic pseudo-random walk over adds and updates
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let target = &menu[(seed % 3) as usize];
            if seed % 2 == 0 {
                cart.add_item(target);
            } else {
                let delta = (seed % 7) as i64 - 4;
                cart.update_quantity(&target.id, delta);
            }

            let sum: u32 = cart.lines().iter().map(|l| l.quantity).sum();
            assert_eq!(cart.count(), sum);
            assert!(cart.lines().iter().all(|l| l.quantity > 0));
        }
    }
}
