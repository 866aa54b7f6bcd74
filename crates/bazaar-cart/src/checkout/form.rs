//! Checkout form data and validation.

use serde::{Deserialize, Serialize};

/// Customer billing details carried into the order snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Billing address.
    pub address: String,
}

/// Raw checkout form fields, as submitted.
///
/// All four fields are required; none of them is validated beyond being
/// non-blank (a whitespace-only value counts as blank).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    /// Billing name field.
    pub name: String,
    /// Billing email field.
    pub email: String,
    /// Billing address field.
    pub address: String,
    /// Payment method label (e.g. "COD").
    pub payment: String,
}

impl CheckoutForm {
    /// Create a filled-in form.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        payment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            payment: payment.into(),
        }
    }

    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.payment.trim().is_empty() {
            missing.push("payment method");
        }
        missing
    }

    /// Check that every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The customer details as they will appear on the order.
    pub fn customer(&self) -> CustomerInfo {
        CustomerInfo {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form() {
        let form = CheckoutForm::new("A", "a@x.com", "Addr", "COD");
        assert!(form.is_complete());
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let form = CheckoutForm::new("A", "", "Addr", "");
        assert_eq!(form.missing_fields(), vec!["email", "payment method"]);
        assert!(!form.is_complete());
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let form = CheckoutForm::new("   ", "a@x.com", "Addr", "COD");
        assert_eq!(form.missing_fields(), vec!["name"]);
    }

    #[test]
    fn test_empty_form_missing_everything() {
        let form = CheckoutForm::default();
        assert_eq!(
            form.missing_fields(),
            vec!["name", "email", "address", "payment method"]
        );
    }

    #[test]
    fn test_customer_carries_fields_verbatim() {
        let form = CheckoutForm::new("A. Customer", "a@x.com", "1 High St", "COD");
        let customer = form.customer();

        assert_eq!(customer.name, "A. Customer");
        assert_eq!(customer.email, "a@x.com");
        assert_eq!(customer.address, "1 High St");
    }
}
