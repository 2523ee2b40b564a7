//! Modal screens and the per-screen form state pushed into views.

use larek_core::{FieldError, Price, ProductId, ValidationError};

/// Payment/address form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    /// Errors from the last submit, shown under the form.
    pub errors: Vec<FieldError>,
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Errors from the last input or submit.
    pub errors: Vec<FieldError>,
    /// Whether the "Pay" button is enabled.
    pub submit_enabled: bool,
    /// Blocking notification from a failed submission.
    pub alert: Option<String>,
}

impl ContactForm {
    /// Record a validation outcome. New input dismisses any alert.
    pub fn apply(&mut self, outcome: Result<(), &ValidationError>) {
        self.alert = None;
        match outcome {
            Ok(()) => {
                self.errors.clear();
                self.submit_enabled = true;
            }
            Err(err) => {
                self.errors = err.errors().to_vec();
                self.submit_enabled = false;
            }
        }
    }

    /// Whether `field` should be highlighted as invalid.
    #[must_use]
    pub fn is_invalid(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

/// What the modal is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Product(ProductId),
    Cart,
    Payment(PaymentForm),
    Contact(ContactForm),
    /// Order accepted; `total` is what the cart held at submission.
    Success { total: Price },
}

/// Payload-free discriminant of [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Product,
    Cart,
    Payment,
    Contact,
    Success,
}

impl Screen {
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Product(_) => ScreenKind::Product,
            Self::Cart => ScreenKind::Cart,
            Self::Payment(_) => ScreenKind::Payment,
            Self::Contact(_) => ScreenKind::Contact,
            Self::Success { .. } => ScreenKind::Success,
        }
    }
}

/// The modal container. Closed when it holds no screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    screen: Option<Screen>,
}

impl Modal {
    /// Show `screen`, opening the modal if needed.
    pub fn show(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }

    pub fn close(&mut self) {
        self.screen = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.screen.is_some()
    }

    #[must_use]
    pub const fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    #[must_use]
    pub fn screen_mut(&mut self) -> Option<&mut Screen> {
        self.screen.as_mut()
    }

    /// Kind of the current screen, if open.
    #[must_use]
    pub fn kind(&self) -> Option<ScreenKind> {
        self.screen.as_ref().map(Screen::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_open_close() {
        let mut modal = Modal::default();
        assert!(!modal.is_open());

        modal.show(Screen::Cart);
        assert_eq!(modal.kind(), Some(ScreenKind::Cart));

        modal.show(Screen::Success {
            total: Price::from_units(50),
        });
        assert_eq!(modal.kind(), Some(ScreenKind::Success));

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.kind(), None);
    }

    #[test]
    fn test_contact_form_highlights_fields() {
        let form = ContactForm {
            errors: vec![FieldError::InvalidEmail],
            submit_enabled: false,
            alert: None,
        };
        assert!(form.is_invalid("email"));
        assert!(!form.is_invalid("phone"));
    }

    #[test]
    fn test_apply_dismisses_alert() {
        let mut form = ContactForm {
            alert: Some("Order failed: HTTP error".to_string()),
            ..ContactForm::default()
        };
        form.apply(Ok(()));
        assert_eq!(form.alert, None);
        assert!(form.submit_enabled);
    }
}
