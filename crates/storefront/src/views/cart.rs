//! Cart screen.

use askama::Template;
use larek_core::Cart;

/// One cart line.
#[derive(Debug, Clone)]
pub struct CartLineView {
    /// 1-based position in the list.
    pub index: usize,
    pub id: String,
    pub title: String,
    pub price: String,
}

#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    /// Checkout is only offered for a non-empty cart.
    pub can_checkout: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let lines = cart
            .items()
            .into_iter()
            .enumerate()
            .map(|(i, item)| CartLineView {
                index: i + 1,
                id: item.product_id.to_string(),
                title: item.title,
                price: item.price.display(),
            })
            .collect();

        Self {
            lines,
            total: cart.total().display(),
            can_checkout: !cart.is_empty(),
        }
    }
}

#[derive(Template)]
#[template(path = "screens/cart.html")]
pub struct CartTemplate {
    pub cart: CartView,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use larek_core::{CartItem, Price, ProductId};

    use super::*;

    fn item(id: &str, price: i64) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            title: id.to_uppercase(),
            price: Price::from_units(price),
            category: String::new(),
        }
    }

    #[test]
    fn test_cart_view_numbers_lines_in_order() {
        let mut cart = Cart::new();
        cart.add(item("b", 2500));
        cart.add(item("a", 100));

        let view = CartView::from(&cart);
        let positions: Vec<_> = view
            .lines
            .iter()
            .map(|l| (l.index, l.id.as_str()))
            .collect();
        assert_eq!(positions, vec![(1, "b"), (2, "a")]);
        assert_eq!(view.total, "2 600 synapses");
        assert!(view.can_checkout);
    }

    #[test]
    fn test_empty_cart_disables_checkout() {
        let html = CartTemplate {
            cart: CartView::from(&Cart::new()),
        }
        .render()
        .unwrap();
        assert!(html.contains("0 synapses"));
        assert!(html.contains("disabled"));
    }
}
