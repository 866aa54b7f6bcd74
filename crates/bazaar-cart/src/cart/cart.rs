//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::cart::quantity;
use crate::ids::ProductId;

/// Image URL substituted when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/80";

/// A product reference, as handed to [`CartStore::add`]: what the storefront
/// knows about a product before it is in the cart. Quantity is implicit;
/// adding a reference always means "one more of this".
///
/// [`CartStore::add`]: crate::cart::CartStore::add
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    /// Product identifier, unique within the catalog.
    pub id: ProductId,
    /// Display name. Not validated.
    pub name: String,
    /// Unit price. Expected non-negative; currency and formatting are a
    /// presentation concern.
    pub price: f64,
    /// Image URL, if the product has one.
    pub image: Option<String>,
}

impl ProductRef {
    /// Create a product reference without an image.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// A line item in the cart: one distinct product and its chosen quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Quantity, at least 1. Stored carts that omit the field read as 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    quantity::MIN_QUANTITY
}

impl LineItem {
    /// Total for this line (`price * quantity`). No rounding is applied.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// The image URL, or the placeholder when the product has none.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    fn from_product(product: ProductRef) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: quantity::MIN_QUANTITY,
        }
    }
}

/// The ordered collection of line items for the current session.
///
/// Insertion order (order of first add) is preserved, and there is at most
/// one line item per product ID. Serializes as a bare JSON array, the shape
/// the cart slot stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total (sum of line totals). No rounding is applied.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Add one of the given product.
    ///
    /// If a line item with the same product ID already exists its quantity
    /// increments by 1; otherwise the product is appended as a new line item
    /// with quantity 1.
    pub fn add(&mut self, product: ProductRef) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::from_product(product));
        }
    }

    /// Remove the line item at `index` (0-based, current iteration order).
    ///
    /// Out-of-range indices are a no-op; returns whether an item was
    /// removed.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Set the quantity of the line item at `index`, clamped to the floor
    /// of 1.
    ///
    /// Out-of-range indices are a no-op; returns whether an item was
    /// updated.
    pub fn set_quantity_at(&mut self, index: usize, quantity: u32) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.quantity = quantity::or_default(quantity);
                true
            }
            None => false,
        }
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Re-apply the quantity floor after hydration from storage.
    pub(crate) fn normalize(&mut self) {
        for item in &mut self.items {
            item.quantity = quantity::or_default(item.quantity);
        }
    }
}
