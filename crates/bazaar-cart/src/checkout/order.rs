//! Order snapshot types.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineItem};
use crate::checkout::CustomerInfo;
use crate::ids::OrderId;

/// Immutable record of a completed checkout.
///
/// Owns a deep copy of the line items taken before the cart was cleared;
/// later cart mutations never reach into a snapshot. Written once to the
/// order slot and consumed by the order-confirmation view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Human-readable order number.
    pub order_number: OrderId,
    /// Customer billing details.
    pub customer: CustomerInfo,
    /// Line items at the time of checkout.
    pub items: Vec<LineItem>,
    /// Payment method label.
    pub payment: String,
    /// Unix timestamp of checkout.
    pub date: i64,
}

impl OrderSnapshot {
    /// Capture a snapshot of the given cart.
    pub(crate) fn capture(cart: &Cart, customer: CustomerInfo, payment: impl Into<String>) -> Self {
        Self {
            order_number: generate_order_number(),
            customer,
            items: cart.items().to_vec(),
            payment: payment.into(),
            date: current_timestamp(),
        }
    }

    /// Total item count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Order total at the time of checkout.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

/// Generate a new order number.
fn generate_order_number() -> OrderId {
    OrderId::new(format!("ORD-{}", current_timestamp()))
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
