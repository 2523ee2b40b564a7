//! Product catalog store.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product as returned by the catalog API.
///
/// Products are immutable once fetched. A `null` price marks a product that
/// cannot be bought ("priceless").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<Price>,
    /// Image path relative to the CDN root.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Whether the product can be added to the cart.
    ///
    /// Products without a price, or with a zero price, are display-only.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some_and(|p| !p.is_zero())
    }
}

/// The list of products loaded for the current session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Replace the catalog contents.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// All products in API order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price: price.map(Price::from_units),
            image: format!("{id}.svg"),
            category: "софт-скил".to_string(),
        }
    }

    #[test]
    fn test_set_and_find() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.set_products(vec![product("p1", Some(100)), product("p2", None)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.find(&ProductId::new("p2")).unwrap().title,
            "Product p2"
        );
        assert!(catalog.find(&ProductId::new("p3")).is_none());
    }

    #[test]
    fn test_set_products_replaces() {
        let mut catalog = Catalog::new();
        catalog.set_products(vec![product("p1", Some(100))]);
        catalog.set_products(vec![product("p2", Some(5))]);
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products().first().unwrap().id, ProductId::new("p2"));
    }

    #[test]
    fn test_is_purchasable() {
        assert!(product("p1", Some(100)).is_purchasable());
        assert!(!product("p2", None).is_purchasable());
        assert!(!product("p3", Some(0)).is_purchasable());
    }

    #[test]
    fn test_deserialize_null_price() {
        let json = r#"{
            "id": "b06cde61-912f-4663-9751-09956c0eed67",
            "description": "Будет стоять над душой и не давать прокрастинировать.",
            "image": "/Asterisk_2.svg",
            "title": "Мамка-таймер",
            "category": "софт-скил",
            "price": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, None);
        assert!(!product.is_purchasable());
    }
}
