//! Shopping cart store.
//!
//! Items are keyed by [`ProductId`], so a product can be in the cart at most
//! once. Insertion order is tracked separately for display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// A line in the cart, captured from a [`Product`] when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub title: String,
    pub price: Price,
    pub category: String,
}

impl From<&Product> for CartItem {
    /// A product without a price is carried at zero.
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price.unwrap_or(Price::ZERO),
            category: product.category.clone(),
        }
    }
}

/// The items selected in the current session.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: HashMap<ProductId, CartItem>,
    order: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns `false` (and changes nothing) if an item with the
    /// same product id is already present.
    pub fn add(&mut self, item: CartItem) -> bool {
        if self.items.contains_key(&item.product_id) {
            return false;
        }
        self.order.push(item.product_id.clone());
        self.items.insert(item.product_id.clone(), item);
        true
    }

    /// Remove the item for `product_id`. Returns `false` if it was not present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        if self.items.remove(product_id).is_none() {
            return false;
        }
        self.order.retain(|id| id != product_id);
        true
    }

    /// Sum of item prices, recomputed on every call. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.values().map(|item| item.price).sum()
    }

    /// A copy of the items in the order they were added.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }

    /// Product ids in the order they were added.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.order.clone()
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains_key(product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn item(id: &str, price: i64) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            title: format!("Item {id}"),
            price: Price::from_units(price),
            category: "другое".to_string(),
        }
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let mut cart = Cart::new();
        assert!(cart.add(item("p1", 100)));
        assert!(!cart.add(item("p1", 999)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_units(100));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("p1", 100));
        assert!(!cart.remove(&ProductId::new("nope")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_tracks_items() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Price::ZERO);

        cart.add(item("p1", 100));
        cart.add(item("p2", 50));
        assert_eq!(cart.total(), Price::from_units(150));

        cart.remove(&ProductId::new("p1"));
        assert_eq!(cart.total(), Price::from_units(50));

        cart.remove(&ProductId::new("p2"));
        assert_eq!(cart.total(), Price::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(item("c", 1));
        cart.add(item("a", 2));
        cart.add(item("b", 3));
        cart.remove(&ProductId::new("a"));
        cart.add(item("a", 2));

        let ids: Vec<_> = cart.items().into_iter().map(|i| i.product_id).collect();
        assert_eq!(
            ids,
            vec![ProductId::new("c"), ProductId::new("b"), ProductId::new("a")]
        );
        assert_eq!(cart.product_ids(), ids);
    }

    #[test]
    fn test_items_is_a_copy() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10));
        let mut snapshot = cart.items();
        snapshot.clear();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10));
        cart.add(item("p2", 20));
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_from_product_normalizes_missing_price() {
        let product = Product {
            id: ProductId::new("p1"),
            title: "Мамка-таймер".to_string(),
            description: String::new(),
            price: None,
            image: String::new(),
            category: "софт-скил".to_string(),
        };
        let item = CartItem::from(&product);
        assert_eq!(item.price, Price::ZERO);
        assert_eq!(item.product_id, product.id);
    }

    #[test]
    fn test_no_duplicates_under_mixed_operations() {
        let mut cart = Cart::new();
        let ops: &[(bool, &str)] = &[
            (true, "a"),
            (true, "b"),
            (true, "a"),
            (false, "b"),
            (true, "b"),
            (true, "b"),
            (false, "z"),
            (true, "c"),
            (false, "a"),
            (true, "a"),
        ];

        for (add, id) in ops {
            if *add {
                cart.add(item(id, 1));
            } else {
                cart.remove(&ProductId::new(*id));
            }

            let ids: Vec<_> = cart.items().into_iter().map(|i| i.product_id).collect();
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(ids.len(), unique.len());
            assert_eq!(ids.len(), cart.len());
            assert_eq!(cart.total(), Price::from_units(i64::try_from(ids.len()).unwrap()));
        }
    }
}
