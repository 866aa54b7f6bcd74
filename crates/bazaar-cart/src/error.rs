//! Checkout error types.

use thiserror::Error;

/// Errors that can reject a checkout submission.
///
/// A rejection leaves the cart untouched and the checkout in its editing
/// state; the `Display` message is suitable for showing to the user.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The cart has nothing in it.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Required form fields are missing or blank.
    #[error("Checkout incomplete: missing {0}")]
    MissingFields(String),

    /// An order was already produced for this cart lifecycle.
    #[error("Checkout already completed")]
    AlreadyCompleted,

    /// The order record could not be written.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<bazaar_kv::KvError> for CheckoutError {
    fn from(e: bazaar_kv::KvError) -> Self {
        CheckoutError::Storage(e.to_string())
    }
}
