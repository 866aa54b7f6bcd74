//! Store configuration.

/// Configuration for the cart store and checkout flow.
///
/// The cart core has no process boundary of its own, so configuration is
/// code-level: construct one of these and hand it to [`CartStore::open`]
/// and [`Checkout::new`].
///
/// [`CartStore::open`]: crate::cart::CartStore::open
/// [`Checkout::new`]: crate::checkout::Checkout::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name of the slot holding the serialized cart.
    pub cart_slot: String,
    /// Name of the slot receiving the order snapshot at checkout.
    pub order_slot: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cart_slot: "cart".to_string(),
            order_slot: "lastOrder".to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a configuration with the default slot names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cart slot name.
    pub fn with_cart_slot(mut self, name: impl Into<String>) -> Self {
        self.cart_slot = name.into();
        self
    }

    /// Set the order slot name.
    pub fn with_order_slot(mut self, name: impl Into<String>) -> Self {
        self.order_slot = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let config = StoreConfig::default();
        assert_eq!(config.cart_slot, "cart");
        assert_eq!(config.order_slot, "lastOrder");
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new()
            .with_cart_slot("basket")
            .with_order_slot("receipt");

        assert_eq!(config.cart_slot, "basket");
        assert_eq!(config.order_slot, "receipt");
    }
}
