//! Checkout flow state machine.

use bazaar_kv::KvStore;

use crate::cart::CartStore;
use crate::checkout::{CheckoutForm, OrderSnapshot};
use crate::config::StoreConfig;
use crate::error::CheckoutError;

/// States of the checkout flow.
///
/// Validation runs transiently inside [`Checkout::submit`]; a rejected
/// submission drops straight back to `Editing` with nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutState {
    /// Cart is mutable, awaiting submission.
    Editing,
    /// An order snapshot has been produced and the cart cleared. Terminal
    /// for this cart's lifetime.
    Completed,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Editing => "editing",
            CheckoutState::Completed => "completed",
        }
    }
}

/// Orchestrates checkout: validates the submitted form, snapshots the cart
/// into the order slot, and clears the store.
pub struct Checkout {
    kv: KvStore,
    slot: String,
    state: CheckoutState,
}

impl Checkout {
    /// Create a checkout flow writing to the configured order slot.
    pub fn new(kv: KvStore, config: &StoreConfig) -> Self {
        Self {
            kv,
            slot: config.order_slot.clone(),
            state: CheckoutState::Editing,
        }
    }

    /// Current state.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Check whether an order has been produced.
    pub fn is_complete(&self) -> bool {
        self.state == CheckoutState::Completed
    }

    /// Attempt to finalize the order.
    ///
    /// Rejects (leaving the cart untouched and the state `Editing`) if the
    /// cart is empty, any required field is blank, or the order record
    /// cannot be written. On success exactly one snapshot is written to the
    /// order slot and the cart is cleared, in that order; the snapshot
    /// captures the pre-clear contents.
    pub fn submit(
        &mut self,
        store: &mut CartStore,
        form: &CheckoutForm,
    ) -> Result<OrderSnapshot, CheckoutError> {
        if self.is_complete() {
            return Err(CheckoutError::AlreadyCompleted);
        }
        if store.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing.join(", ")));
        }

        let snapshot = OrderSnapshot::capture(store.cart(), form.customer(), form.payment.clone());
        self.kv.set(&self.slot, &snapshot)?;
        store.clear();
        self.state = CheckoutState::Completed;
        tracing::info!("Order {} completed", snapshot.order_number);

        Ok(snapshot)
    }
}
