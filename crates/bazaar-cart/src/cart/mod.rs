//! Shopping cart module.
//!
//! Contains the cart and line item types, quantity coercion, and the
//! owning store.

mod cart;
pub mod quantity;
mod store;

pub use cart::{Cart, LineItem, ProductRef, PLACEHOLDER_IMAGE};
pub use store::CartStore;
