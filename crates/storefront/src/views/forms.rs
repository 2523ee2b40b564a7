//! Payment and contact form screens.

use askama::Template;
use larek_core::{FieldError, OrderDraft, PaymentMethod};

use crate::checkout::{ContactForm, PaymentForm};

/// A payment method button.
#[derive(Debug, Clone)]
pub struct PaymentOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Step 1: payment method and delivery address.
#[derive(Debug, Clone)]
pub struct PaymentView {
    pub options: Vec<PaymentOption>,
    pub address: String,
    pub errors: Vec<String>,
    pub payment_invalid: bool,
    pub address_invalid: bool,
}

impl PaymentView {
    #[must_use]
    pub fn new(draft: &OrderDraft, form: &PaymentForm) -> Self {
        let selected = draft.payment_method();
        Self {
            options: PaymentMethod::ALL
                .iter()
                .map(|method| PaymentOption {
                    value: method.as_str(),
                    label: method.label(),
                    selected: selected == Some(*method),
                })
                .collect(),
            address: draft.delivery_address().to_string(),
            errors: messages(&form.errors),
            payment_invalid: form.errors.contains(&FieldError::MissingPaymentMethod),
            address_invalid: form.errors.contains(&FieldError::MissingAddress),
        }
    }
}

#[derive(Template)]
#[template(path = "screens/payment.html")]
pub struct PaymentTemplate {
    pub form: PaymentView,
}

/// Step 2: email and phone.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub email: String,
    pub phone: String,
    pub errors: Vec<String>,
    pub email_invalid: bool,
    pub phone_invalid: bool,
    pub submit_enabled: bool,
    /// Blocking notification after a failed order call.
    pub alert: Option<String>,
}

impl ContactView {
    #[must_use]
    pub fn new(draft: &OrderDraft, form: &ContactForm) -> Self {
        Self {
            email: draft.email().to_string(),
            phone: draft.phone().to_string(),
            errors: messages(&form.errors),
            email_invalid: form.is_invalid("email"),
            phone_invalid: form.is_invalid("phone"),
            submit_enabled: form.submit_enabled,
            alert: form.alert.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "screens/contact.html")]
pub struct ContactTemplate {
    pub form: ContactView,
}

fn messages(errors: &[FieldError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
