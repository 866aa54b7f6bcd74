//! Named-slot Key-Value storage layer for Bazaar.
//!
//! Provides a simple, ergonomic API for persisting data in named slots with
//! automatic JSON serialization. A slot holds one JSON value and is
//! overwritten wholesale on every write; last write wins.
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar_kv::KvStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! // Durable store backed by a JSON file
//! let kv = KvStore::open("storefront.json")?;
//!
//! // Store a value
//! kv.set("cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = kv.get("cart")?;
//!
//! // Delete a value
//! kv.delete("cart")?;
//! ```

mod error;
mod store;

pub use error::KvError;
pub use store::KvStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KvError, KvStore};
}
