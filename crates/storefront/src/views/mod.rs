//! View models and askama templates.
//!
//! Views read the coordinator's state through [`CheckoutState`] and turn it
//! into display strings. They never mutate anything: user actions travel
//! back to the coordinator as [`UiEvent`](crate::checkout::UiEvent)s via
//! the routes.

mod cart;
mod catalog;
mod forms;
mod product;
mod success;

pub use cart::{CartLineView, CartTemplate, CartView};
pub use catalog::{CardView, CounterTemplate, IndexTemplate};
pub use forms::{ContactTemplate, ContactView, PaymentOption, PaymentTemplate, PaymentView};
pub use product::{ProductDetailView, ProductTemplate};
pub use success::SuccessTemplate;

use askama::Template;
use url::Url;

use crate::checkout::{CheckoutState, Screen};

/// Everything a view needs to render.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub state: CheckoutState<'a>,
    /// Base URL product images are served from.
    pub cdn: &'a Url,
}

impl<'a> ViewContext<'a> {
    #[must_use]
    pub const fn new(state: CheckoutState<'a>, cdn: &'a Url) -> Self {
        Self { state, cdn }
    }

    /// Render the full catalog page, including the open modal screen.
    ///
    /// # Errors
    ///
    /// Returns the template error if a screen fails to render.
    pub fn index(&self) -> askama::Result<IndexTemplate> {
        let modal = self
            .state
            .modal
            .screen()
            .map(|screen| self.render_screen(screen))
            .transpose()?;

        Ok(IndexTemplate {
            cards: self
                .state
                .catalog
                .products()
                .iter()
                .map(|p| CardView::new(p, self.cdn))
                .collect(),
            count: self.state.cart.len(),
            modal,
        })
    }

    /// Render the modal body for `screen`.
    ///
    /// # Errors
    ///
    /// Returns the template error.
    pub fn render_screen(&self, screen: &Screen) -> askama::Result<String> {
        match screen {
            Screen::Product(id) => self.state.catalog.find(id).map_or_else(
                || Ok(String::new()),
                |product| {
                    ProductTemplate {
                        product: ProductDetailView::new(
                            product,
                            self.state.cart.contains(id),
                            self.cdn,
                        ),
                    }
                    .render()
                },
            ),
            Screen::Cart => CartTemplate {
                cart: CartView::from(self.state.cart),
            }
            .render(),
            Screen::Payment(form) => PaymentTemplate {
                form: PaymentView::new(self.state.draft, form),
            }
            .render(),
            Screen::Contact(form) => ContactTemplate {
                form: ContactView::new(self.state.draft, form),
            }
            .render(),
            Screen::Success { total } => SuccessTemplate {
                total: total.display(),
            }
            .render(),
        }
    }
}

/// Absolute URL of a product image.
///
/// The image path from the API starts with `/`; it is resolved under the
/// CDN base rather than the host root.
#[must_use]
pub fn image_url(cdn: &Url, image: &str) -> String {
    let path = image.trim_start_matches('/');
    cdn.join(path)
        .map_or_else(|_| format!("{cdn}{path}"), String::from)
}

/// CSS modifier for a category badge.
#[must_use]
pub fn category_class(category: &str) -> String {
    let name = category.trim().to_lowercase();
    match name.as_str() {
        "софт-скил" => "soft".to_string(),
        "хард-скил" => "hard".to_string(),
        "дополнительное" => "additional".to_string(),
        "кнопка" => "button".to_string(),
        "другое" => "other".to_string(),
        _ => name,
    }
}
