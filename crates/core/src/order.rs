//! Order draft and the two checkout validation gates.
//!
//! A checkout runs in two steps:
//!
//! 1. [`CheckoutStep::Payment`] - payment method and delivery address
//! 2. [`CheckoutStep::Contact`] - phone and email
//!
//! The draft only moves to step 2 once step 1 validates, and an
//! [`OrderRequest`] can only be built once both steps validate.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::define_id;
use crate::types::{Email, PaymentMethod, Phone, Price, ProductId};

define_id!(OrderId);

/// Which part of the checkout form the customer is filling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckoutStep {
    #[default]
    Payment,
    Contact,
}

/// A single field-level validation failure.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    #[error("Select a payment method.")]
    MissingPaymentMethod,
    #[error("Enter a delivery address.")]
    MissingAddress,
    #[error("Enter a valid phone number.")]
    InvalidPhone,
    #[error("Enter a valid email.")]
    InvalidEmail,
}

impl FieldError {
    /// Name of the form field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingPaymentMethod => "payment",
            Self::MissingAddress => "address",
            Self::InvalidPhone => "phone",
            Self::InvalidEmail => "email",
        }
    }
}

/// One or more fields failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// The failing fields, in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// User-facing messages, in form order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether `field` has an error.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

impl std::error::Error for ValidationError {}

/// Body of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub payment: PaymentMethod,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub total: Price,
    pub items: Vec<ProductId>,
}

/// Response of a successful `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub id: OrderId,
    pub total: Price,
}

/// In-progress checkout form state.
///
/// Fields hold raw user input; they are checked by the step validators.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    payment_method: Option<PaymentMethod>,
    delivery_address: String,
    phone: String,
    email: String,
    step: CheckoutStep,
}

impl OrderDraft {
    /// Create an empty draft on the payment step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = address.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    #[must_use]
    pub const fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    #[must_use]
    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Check payment method and delivery address.
    ///
    /// # Errors
    ///
    /// Lists `MissingPaymentMethod` and/or `MissingAddress`.
    pub fn validate_first_step(&self) -> Result<(), ValidationError> {
        self.parse_first_step().map(|_| ())
    }

    /// Check phone and email formats.
    ///
    /// # Errors
    ///
    /// Lists `InvalidPhone` and/or `InvalidEmail`.
    pub fn validate_second_step(&self) -> Result<(), ValidationError> {
        self.parse_second_step().map(|_| ())
    }

    /// Move to the contact step if the payment step validates.
    ///
    /// # Errors
    ///
    /// Returns the step 1 errors and stays on the payment step.
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        self.validate_first_step()?;
        self.step = CheckoutStep::Contact;
        Ok(())
    }

    /// Build the order request for the current cart.
    ///
    /// # Errors
    ///
    /// Returns the step 1 errors if the draft never passed the payment step,
    /// otherwise the step 2 errors.
    pub fn to_request(&self, cart: &Cart) -> Result<OrderRequest, ValidationError> {
        let (payment, address) = self.parse_first_step()?;
        let (phone, email) = self.parse_second_step()?;

        Ok(OrderRequest {
            payment,
            email,
            phone,
            address: address.to_owned(),
            total: cart.total(),
            items: cart.product_ids(),
        })
    }

    fn parse_first_step(&self) -> Result<(PaymentMethod, &str), ValidationError> {
        let address = self.delivery_address.trim();
        match self.payment_method {
            Some(method) if !address.is_empty() => Ok((method, address)),
            method => {
                let mut errors = Vec::new();
                if method.is_none() {
                    errors.push(FieldError::MissingPaymentMethod);
                }
                if address.is_empty() {
                    errors.push(FieldError::MissingAddress);
                }
                Err(ValidationError { errors })
            }
        }
    }

    fn parse_second_step(&self) -> Result<(Phone, Email), ValidationError> {
        match (Phone::parse(&self.phone), Email::parse(&self.email)) {
            (Ok(phone), Ok(email)) => Ok((phone, email)),
            (phone, email) => {
                let mut errors = Vec::new();
                if phone.is_err() {
                    errors.push(FieldError::InvalidPhone);
                }
                if email.is_err() {
                    errors.push(FieldError::InvalidEmail);
                }
                Err(ValidationError { errors })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn filled_draft() -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.set_payment_method(PaymentMethod::Online);
        draft.set_delivery_address("123 Main St");
        draft.set_phone("+1 555-123-4567");
        draft.set_email("a@b.co");
        draft
    }

    #[test]
    fn test_first_step_missing_payment_only() {
        let mut draft = OrderDraft::new();
        draft.set_delivery_address("123 Main St");
        let err = draft.validate_first_step().unwrap_err();
        assert_eq!(err.errors(), &[FieldError::MissingPaymentMethod]);
    }

    #[test]
    fn test_first_step_missing_both() {
        let mut draft = OrderDraft::new();
        draft.set_delivery_address("   ");
        let err = draft.validate_first_step().unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::MissingPaymentMethod, FieldError::MissingAddress]
        );
        assert!(err.has_field("address"));
        assert_eq!(
            err.to_string(),
            "Select a payment method. Enter a delivery address."
        );
    }

    #[test]
    fn test_second_step_short_phone() {
        let mut draft = filled_draft();
        draft.set_phone("12345");
        let err = draft.validate_second_step().unwrap_err();
        assert_eq!(err.errors(), &[FieldError::InvalidPhone]);
    }

    #[test]
    fn test_second_step_bad_email() {
        let mut draft = filled_draft();
        draft.set_email("bad@");
        let err = draft.validate_second_step().unwrap_err();
        assert_eq!(err.errors(), &[FieldError::InvalidEmail]);
        assert!(err.has_field("email"));
        assert!(!err.has_field("phone"));
    }

    #[test]
    fn test_second_step_valid() {
        assert!(filled_draft().validate_second_step().is_ok());
    }

    #[test]
    fn test_second_step_empty_fields() {
        let draft = OrderDraft::new();
        let err = draft.validate_second_step().unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::InvalidPhone, FieldError::InvalidEmail]
        );
    }

    #[test]
    fn test_advance_requires_first_step() {
        let mut draft = OrderDraft::new();
        assert!(draft.advance().is_err());
        assert_eq!(draft.step(), CheckoutStep::Payment);

        draft.set_payment_method(PaymentMethod::OnReceipt);
        draft.set_delivery_address("Moscow");
        draft.advance().unwrap();
        assert_eq!(draft.step(), CheckoutStep::Contact);
    }

    #[test]
    fn test_to_request() {
        let mut cart = Cart::new();
        cart.add(CartItem {
            product_id: ProductId::new("p2"),
            title: "Item".to_string(),
            price: Price::from_units(50),
            category: "кнопка".to_string(),
        });

        let request = filled_draft().to_request(&cart).unwrap();
        assert_eq!(request.payment, PaymentMethod::Online);
        assert_eq!(request.address, "123 Main St");
        assert_eq!(request.total, Price::from_units(50));
        assert_eq!(request.items, vec![ProductId::new("p2")]);
    }

    #[test]
    fn test_to_request_rejects_incomplete_draft() {
        let cart = Cart::new();
        let mut draft = filled_draft();
        draft.set_email("nope");
        let err = draft.to_request(&cart).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::InvalidEmail]);

        let err = OrderDraft::new().to_request(&cart).unwrap_err();
        assert!(err.has_field("payment"));
    }

    #[test]
    fn test_request_wire_format() {
        let mut cart = Cart::new();
        cart.add(CartItem {
            product_id: ProductId::new("p1"),
            title: "Item".to_string(),
            price: Price::from_units(750),
            category: "хард-скил".to_string(),
        });
        let request = filled_draft().to_request(&cart).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["payment"], "card");
        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["phone"], "+1 555-123-4567");
        assert_eq!(json["address"], "123 Main St");
        assert!(json["total"].is_number());
        assert_eq!(json["items"], serde_json::json!(["p1"]));
    }

    #[test]
    fn test_confirmation_from_json() {
        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"id":"28c57cb4-3002-4445-8aa1-2a06a5055ae5","total":2200}"#)
                .unwrap();
        assert_eq!(confirmation.total, Price::from_units(2_200));
        assert_eq!(confirmation.id.as_str(), "28c57cb4-3002-4445-8aa1-2a06a5055ae5");
    }
}
