//! Cart and line item types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Product, Variant};
use crate::ids::{ProductId, VariantId};
use crate::locale::Locale;
use crate::money::Money;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// One entry in the cart, keyed by variant id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product the variant belongs to.
    pub product_id: ProductId,
    /// The identity key: at most one line exists per variant.
    pub variant_id: VariantId,
    /// Display name, resolved at add time.
    pub name: String,
    /// Price snapshot taken when the item was added. A later catalog
    /// price change does not move the cart total.
    pub unit_price: Money,
    /// How many units, always at least 1.
    pub quantity: i64,
    /// Image shown next to the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Option summary shown under the name (e.g., "Azul - M").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
}

/// A line item before it enters the cart: everything but the quantity,
/// which the cart itself manages.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub name: String,
    pub unit_price: Money,
    pub image: Option<String>,
    pub variant_name: Option<String>,
}

impl NewLineItem {
    /// Snapshot a catalog variant for the cart: effective price, display
    /// name in the shopper's locale, cover image, and option summary.
    pub fn for_variant(product: &Product, variant: &Variant, locale: Locale) -> Self {
        Self {
            product_id: product.id,
            variant_id: variant.id,
            name: product.name.resolve(locale).to_string(),
            unit_price: variant.effective_price(),
            image: product.cover_image().map(|image| image.src.clone()),
            variant_name: variant.option_summary(locale),
        }
    }

    fn into_line(self) -> LineItem {
        LineItem {
            product_id: self.product_id,
            variant_id: self.variant_id,
            name: self.name,
            unit_price: self.unit_price,
            quantity: 1,
            image: self.image,
            variant_name: self.variant_name,
        }
    }
}

/// An ordered collection of line items.
///
/// Order is insertion order and only matters for display. Invariants: at
/// most one line per variant id, every quantity between 1 and
/// [`MAX_QUANTITY_PER_ITEM`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a variant.
    ///
    /// Increments the existing line by exactly 1 (saturating at the
    /// per-line cap), or appends a new line with quantity 1. Repeated
    /// calls are the only way to grow a quantity through this path; the
    /// incoming snapshot fields are ignored when the line already exists.
    pub fn add_item(&mut self, item: NewLineItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.variant_id == item.variant_id)
        {
            existing.quantity = (existing.quantity + 1).min(MAX_QUANTITY_PER_ITEM);
            debug!(
                variant = %item.variant_id,
                quantity = existing.quantity,
                "incremented cart line"
            );
            return;
        }
        debug!(variant = %item.variant_id, "added cart line");
        self.items.push(item.into_line());
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the line. An unknown variant id
    /// is a silent no-op. Values above the per-line cap are clamped.
    pub fn update_quantity(&mut self, variant_id: VariantId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(variant_id);
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|line| line.variant_id == variant_id)
        {
            Some(line) => line.quantity = quantity.min(MAX_QUANTITY_PER_ITEM),
            None => debug!(variant = %variant_id, "quantity update for variant not in cart"),
        }
    }

    /// Remove a line by variant id; no-op when absent. Returns whether a
    /// line was removed.
    pub fn remove_item(&mut self, variant_id: VariantId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.variant_id != variant_id);
        self.items.len() < before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by variant id.
    pub fn get_item(&self, variant_id: VariantId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.variant_id == variant_id)
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price snapshots times quantities.
    pub fn total_price(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|line| line.unit_price.currency)
            .unwrap_or_default();
        let cents = self.items.iter().fold(0_i64, |total, line| {
            total.saturating_add(line.unit_price.amount_cents.saturating_mul(line.quantity))
        });
        Money::new(cents, currency)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }
}
