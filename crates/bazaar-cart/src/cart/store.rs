//! The cart store: owned cart state, persistence, change notification.
//!
//! All reads and writes of cart data go through [`CartStore`]. Collaborators
//! (a renderer, the checkout flow) hold a reference to the one store
//! instance; none of them touch the cart or the storage slot directly.

use bazaar_kv::KvStore;

use crate::cart::{quantity, Cart, LineItem, ProductRef};
use crate::config::StoreConfig;

/// Callback invoked with the cart after every mutation.
type CartListener = Box<dyn Fn(&Cart)>;

/// Sole owner of cart state.
///
/// Each mutation runs one full cycle: the change is applied, the whole cart
/// is written to its storage slot, and every subscriber is called with the
/// new state. The store is single-threaded; there is never a second mutation
/// in flight.
pub struct CartStore {
    cart: Cart,
    kv: KvStore,
    slot: String,
    listeners: Vec<CartListener>,
}

impl CartStore {
    /// Open the store, hydrating the cart from its storage slot.
    ///
    /// Hydration fails soft: a missing slot, invalid JSON, or a value of the
    /// wrong shape all yield an empty cart rather than an error. Quantities
    /// read from storage are pulled up to the floor of 1.
    pub fn open(kv: KvStore, config: &StoreConfig) -> Self {
        let cart = match kv.get::<Cart>(&config.cart_slot) {
            Ok(Some(mut cart)) => {
                cart.normalize();
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("Discarding unreadable cart data: {e}");
                Cart::new()
            }
        };

        Self {
            cart,
            kv,
            slot: config.cart_slot.clone(),
            listeners: Vec::new(),
        }
    }

    /// Add one of the given product and return the new item count.
    ///
    /// Same product ID already in the cart: its quantity increments by 1.
    /// Otherwise the product is appended with quantity 1. The returned count
    /// feeds the caller's badge/confirmation surface.
    pub fn add(&mut self, product: ProductRef) -> u32 {
        self.cart.add(product);
        self.commit();
        self.cart.item_count()
    }

    /// Remove the line item at `index` (0-based, current iteration order).
    ///
    /// Out-of-range indices are a no-op and return `false`; nothing else
    /// shifts and nothing is persisted.
    pub fn remove_at(&mut self, index: usize) -> bool {
        let removed = self.cart.remove_at(index);
        if removed {
            self.commit();
        }
        removed
    }

    /// Set the quantity of the line item at `index` from raw field input.
    ///
    /// The input goes through [`quantity::parse_raw`]: non-numeric or
    /// below-1 values coerce to 1. Out-of-range indices are a no-op and
    /// return `false`.
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> bool {
        let updated = self.cart.set_quantity_at(index, quantity::parse_raw(raw));
        if updated {
            self.commit();
        }
        updated
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Total item count (sum of quantities), for the badge display.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Cart total (sum of `price * quantity`). No rounding is applied.
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// The line items, in insertion order, for rendering.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Serialize the full cart into its slot, overwriting any prior value.
    ///
    /// Every mutation calls this; it is public so callers can force a write.
    /// A failed write is logged and swallowed: the in-memory cart stays
    /// usable and the next successful write supersedes the loss.
    pub fn save(&self) {
        if let Err(e) = self.kv.set(&self.slot, &self.cart) {
            tracing::error!("Failed to persist cart: {e}");
        }
    }

    /// Register a callback invoked with the cart after every mutation.
    ///
    /// This is the renderer seam: subscribers redraw from the data they are
    /// handed and call back into the store through its mutation methods.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn cart(&self) -> &Cart {
        &self.cart
    }

    fn commit(&self) {
        self.save();
        for listener in &self.listeners {
            listener(&self.cart);
        }
    }
}
