//! Product detail screen.

use askama::Template;
use larek_core::Product;
use url::Url;

use super::catalog::price_label;
use super::{category_class, image_url};

/// Product shown in the modal.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_class: String,
    pub image_url: String,
    pub price: String,
    /// The product has a non-zero price.
    pub purchasable: bool,
    pub in_cart: bool,
}

impl ProductDetailView {
    #[must_use]
    pub fn new(product: &Product, in_cart: bool, cdn: &Url) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            category_class: category_class(&product.category),
            image_url: image_url(cdn, &product.image),
            price: price_label(product),
            purchasable: product.is_purchasable(),
            in_cart,
        }
    }
}

#[derive(Template)]
#[template(path = "screens/product.html")]
pub struct ProductTemplate {
    pub product: ProductDetailView,
}
