//! Catalog page and grid cards.

use askama::Template;
use askama_web::WebTemplate;
use larek_core::Product;
use url::Url;

use super::{category_class, image_url};
use crate::filters;

/// Label shown for products without a price.
pub const PRICELESS: &str = "Priceless";

/// One card in the catalog grid.
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub category_class: String,
    pub image_url: String,
    pub price: String,
}

impl CardView {
    #[must_use]
    pub fn new(product: &Product, cdn: &Url) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            category_class: category_class(&product.category),
            image_url: image_url(cdn, &product.image),
            price: price_label(product),
        }
    }
}

pub(super) fn price_label(product: &Product) -> String {
    product
        .price
        .map_or_else(|| PRICELESS.to_string(), |price| price.display())
}

/// Header basket counter.
///
/// Rendered inside the page and on its own for `GET /cart/count`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/basket_counter.html")]
pub struct CounterTemplate {
    pub count: usize,
}

/// The storefront page: header, catalog grid, and the modal.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cards: Vec<CardView>,
    /// Items in the cart, for the header counter.
    pub count: usize,
    /// Rendered body of the open screen; `None` when the modal is closed.
    pub modal: Option<String>,
}
