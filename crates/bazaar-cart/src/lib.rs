//! Cart and checkout domain logic for Bazaar.
//!
//! This crate is the core of a demonstration storefront:
//!
//! - **Cart**: line items with the one-entry-per-product invariant, counts,
//!   and totals
//! - **CartStore**: the sole owner of cart state; every mutation persists to
//!   a named storage slot and notifies subscribers
//! - **Checkout**: form validation and the order snapshot written at
//!   completion
//!
//! Rendering, navigation, and account handling live outside this crate; they
//! call in through [`CartStore`](cart::CartStore) and read its derived
//! values.
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar_cart::prelude::*;
//! use bazaar_kv::KvStore;
//!
//! let kv = KvStore::open("storefront.json")?;
//! let config = StoreConfig::default();
//!
//! // Hydrate the cart from storage (an empty cart if there is none)
//! let mut store = CartStore::open(kv.clone(), &config);
//! store.add(ProductRef::new("tea-001", "Green Tea", 4.50));
//!
//! // Finalize the order
//! let mut checkout = Checkout::new(kv, &config);
//! let form = CheckoutForm::new("A. Customer", "a@example.com", "1 High St", "COD");
//! let snapshot = checkout.submit(&mut store, &form)?;
//! println!("Placed {}", snapshot.order_number);
//! ```

pub mod error;
pub mod ids;
pub mod config;

pub mod cart;
pub mod checkout;

pub use config::StoreConfig;
pub use error::CheckoutError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CheckoutError;
    pub use crate::ids::*;

    // Cart
    pub use crate::cart::{Cart, CartStore, LineItem, ProductRef};

    // Checkout
    pub use crate::checkout::{
        Checkout, CheckoutForm, CheckoutState, CustomerInfo, OrderSnapshot,
    };
}
