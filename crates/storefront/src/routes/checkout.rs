//! Checkout route handlers.
//!
//! Two form steps: payment method plus address, then email plus phone.
//! The contact step is also validated live through a JSON endpoint that the
//! page script calls on every keystroke.

use axum::{Form, Json, response::Redirect};
use larek_core::PaymentMethod;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{back_to_page, log_outcome};
use crate::checkout::{Screen, UiEvent};
use crate::error::{AppError, Result};
use crate::sessions::Checkout;

/// Payment method button. The button shares the address form, so whatever
/// was typed there comes along.
#[derive(Debug, Deserialize)]
pub struct PaymentMethodForm {
    pub payment: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Payment step submit.
#[derive(Debug, Deserialize)]
pub struct AddressForm {
    #[serde(default)]
    pub address: String,
}

/// Contact step fields.
#[derive(Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

// Keep customer contact data out of spans.
impl std::fmt::Debug for ContactFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactFields").finish_non_exhaustive()
    }
}

/// Live validation result for the contact step.
#[derive(Debug, Serialize)]
pub struct ContactValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub invalid_fields: Vec<&'static str>,
}

/// Start checkout from the cart.
#[instrument(skip(checkout))]
pub async fn start(Checkout(checkout): Checkout) -> Redirect {
    let outcome = checkout
        .lock()
        .await
        .dispatch(UiEvent::CheckoutRequested)
        .await;
    back_to_page(outcome)
}

/// Select a payment method.
#[instrument(skip(checkout))]
pub async fn payment(
    Checkout(checkout): Checkout,
    Form(form): Form<PaymentMethodForm>,
) -> Result<Redirect> {
    let method =
        PaymentMethod::parse(&form.payment).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let mut coordinator = checkout.lock().await;
    if let Some(address) = form.address {
        log_outcome(&coordinator.dispatch(UiEvent::AddressInput(address)).await);
    }
    let outcome = coordinator
        .dispatch(UiEvent::PaymentMethodSelected(method))
        .await;
    Ok(back_to_page(outcome))
}

/// Submit the payment step.
#[instrument(skip(checkout))]
pub async fn address(Checkout(checkout): Checkout, Form(form): Form<AddressForm>) -> Redirect {
    let outcome = checkout
        .lock()
        .await
        .dispatch(UiEvent::PaymentSubmitted {
            address: form.address,
        })
        .await;
    back_to_page(outcome)
}

/// Live-validate the contact step.
#[instrument(skip(checkout))]
pub async fn contact_input(
    Checkout(checkout): Checkout,
    Form(form): Form<ContactFields>,
) -> Result<Json<ContactValidation>> {
    let mut coordinator = checkout.lock().await;
    coordinator
        .dispatch(UiEvent::ContactInput {
            email: form.email,
            phone: form.phone,
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let Some(Screen::Contact(contact)) = coordinator.modal().screen() else {
        return Err(AppError::BadRequest("contact step is not open".to_string()));
    };

    Ok(Json(ContactValidation {
        valid: contact.submit_enabled,
        errors: contact.errors.iter().map(ToString::to_string).collect(),
        invalid_fields: contact.errors.iter().map(larek_core::FieldError::field).collect(),
    }))
}

/// Submit the order.
#[instrument(skip(checkout))]
pub async fn contact(Checkout(checkout): Checkout, Form(form): Form<ContactFields>) -> Redirect {
    let outcome = checkout
        .lock()
        .await
        .dispatch(UiEvent::ContactSubmitted {
            email: form.email,
            phone: form.phone,
        })
        .await;
    back_to_page(outcome)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::super::test_support::{Client, body};

    async fn at_contact_step() -> Client {
        let mut client = Client::new().await;
        client.submit("/cart/add", "product_id=p2").await;
        client.submit("/checkout", "").await;
        client.submit("/checkout/payment", "payment=card").await;
        client
            .submit("/checkout/address", "address=123+Main+St")
            .await;
        client
    }

    #[tokio::test]
    async fn test_checkout_with_empty_cart_stays_on_cart() {
        let mut client = Client::new().await;
        client.submit("/checkout", "").await;

        let html = client.page().await;
        assert!(html.contains("basket__list"));
        assert!(!html.contains("/checkout/address"));
    }

    #[tokio::test]
    async fn test_payment_step_requires_method() {
        let mut client = Client::new().await;
        client.submit("/cart/add", "product_id=p1").await;
        client.submit("/checkout", "").await;
        client
            .submit("/checkout/address", "address=123+Main+St")
            .await;

        let html = client.page().await;
        assert!(html.contains("Select a payment method."));
        assert!(!html.contains("Enter a delivery address."));
        assert!(html.contains(r#"value="123 Main St""#));
    }

    #[tokio::test]
    async fn test_selecting_method_keeps_typed_address() {
        let mut client = Client::new().await;
        client.submit("/cart/add", "product_id=p1").await;
        client.submit("/checkout", "").await;
        client
            .submit("/checkout/payment", "address=1+Road&payment=cash")
            .await;

        let html = client.page().await;
        assert!(html.contains(r#"value="1 Road""#));
        assert!(html.contains("button_alt-active"));
        assert!(!html.contains("Enter a delivery address."));
    }

    #[tokio::test]
    async fn test_contact_submit_before_payment_step_shows_payment_errors() {
        let mut client = Client::new().await;
        client.submit("/cart/add", "product_id=p1").await;
        client.submit("/checkout", "").await;
        client
            .submit(
                "/checkout/contact",
                "email=a%40b.co&phone=%2B1+555-123-4567",
            )
            .await;

        let html = client.page().await;
        assert!(!html.contains(r#"id="contact-form""#));
        assert!(html.contains("Select a payment method."));
        assert!(html.contains(r#"class="header__basket-counter">1<"#));
    }

    #[tokio::test]
    async fn test_unknown_payment_method_is_rejected() {
        let mut client = Client::new().await;
        let response = client.post("/checkout/payment", "payment=crypto").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_payment_step_advances_to_contact() {
        let mut client = at_contact_step().await;
        let html = client.page().await;
        assert!(html.contains(r#"id="contact-form""#));
    }

    #[tokio::test]
    async fn test_contact_input_reports_validity() {
        let mut client = at_contact_step().await;

        let response = client
            .post("/checkout/contact/input", "email=bad%40&phone=12345")
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body(response).await).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["invalid_fields"], serde_json::json!(["phone", "email"]));

        let response = client
            .post(
                "/checkout/contact/input",
                "email=a%40b.co&phone=%2B1+555-123-4567",
            )
            .await;
        let json: serde_json::Value = serde_json::from_str(&body(response).await).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_contact_input_outside_contact_step_is_rejected() {
        let mut client = Client::new().await;
        client.submit("/cart/add", "product_id=p1").await;
        client.submit("/checkout", "").await;

        let response = client
            .post(
                "/checkout/contact/input",
                "email=a%40b.co&phone=%2B1+555-123-4567",
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!client.page().await.contains(r#"id="contact-form""#));
    }

    #[tokio::test]
    async fn test_failed_order_keeps_cart_and_shows_alert() {
        // The API client points at a closed port, so the order call fails.
        let mut client = at_contact_step().await;
        client
            .submit(
                "/checkout/contact",
                "email=a%40b.co&phone=%2B1+555-123-4567",
            )
            .await;

        let html = client.page().await;
        assert!(html.contains("Order failed: HTTP error"));
        assert!(html.contains(r#"class="header__basket-counter">1<"#));
        assert!(html.contains(r#"value="a@b.co""#));
    }
}
