//! Payment method selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a payment method name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct PaymentMethodError(pub String);

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay online by card.
    #[serde(rename = "card", alias = "online")]
    Online,
    /// Pay on receipt.
    #[serde(rename = "cash")]
    OnReceipt,
}

impl PaymentMethod {
    /// All selectable methods, in display order.
    pub const ALL: [Self; 2] = [Self::Online, Self::OnReceipt];

    /// Wire name sent to the order API and used as the form button name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "card",
            Self::OnReceipt => "cash",
        }
    }

    /// Human-readable label for the payment form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::OnReceipt => "On receipt",
        }
    }

    /// Parse a form or wire name.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError`] for anything other than `card`,
    /// `online` or `cash`.
    pub fn parse(s: &str) -> Result<Self, PaymentMethodError> {
        match s.trim() {
            "card" | "online" => Ok(Self::Online),
            "cash" => Ok(Self::OnReceipt),
            other => Err(PaymentMethodError(other.to_owned())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = PaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
