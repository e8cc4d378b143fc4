//! Product and variant types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId, VariantId};
use crate::locale::{Locale, LocalizedText};
use crate::money::Money;

/// A product in the remote catalog.
///
/// Read-only to the core: products are materialized from the platform
/// payload at the ingestion boundary and never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Localized display name.
    pub name: LocalizedText,
    /// Localized description.
    pub description: LocalizedText,
    /// Localized URL-friendly handle.
    pub slug: LocalizedText,
    /// Purchasable configurations.
    pub variants: Vec<Variant>,
    /// Product photos.
    pub images: Vec<ProductImage>,
    /// Categories this product belongs to.
    pub categories: Vec<Category>,
    /// Whether the product is visible in the storefront.
    pub published: bool,
    /// Whether the product ships for free.
    pub free_shipping: bool,
    /// When the product was created on the platform.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Lowest effective price across all variants.
    ///
    /// `None` for a product without variants.
    pub fn lowest_effective_price(&self) -> Option<Money> {
        self.variants
            .iter()
            .map(Variant::effective_price)
            .min_by_key(|price| price.amount_cents)
    }

    /// Image shown on listing cards (lowest position wins).
    pub fn cover_image(&self) -> Option<&ProductImage> {
        self.images.iter().min_by_key(|image| image.position)
    }

    /// Check if any variant is purchasable.
    pub fn is_in_stock(&self) -> bool {
        self.variants.iter().any(Variant::is_in_stock)
    }
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Base price.
    pub price: Money,
    /// Sale price; when present this is what the customer pays.
    pub promotional_price: Option<Money>,
    /// Strikethrough reference price.
    pub compare_at_price: Option<Money>,
    /// Stock on hand. `None` means inventory is not tracked and the
    /// variant is always available.
    pub stock: Option<i64>,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Attribute values defining this variant, paired with their
    /// dimension at ingestion.
    pub options: Vec<VariantOption>,
}

impl Variant {
    /// The price actually charged: promotional if set, base otherwise.
    pub fn effective_price(&self) -> Money {
        self.promotional_price.unwrap_or(self.price)
    }

    /// Check if this variant can be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock.map_or(true, |stock| stock > 0)
    }

    /// Check if the variant is being sold below its reference price.
    pub fn is_on_sale(&self) -> bool {
        match self.promotional_price {
            Some(promo) => promo.amount_cents < self.reference_price().amount_cents,
            None => false,
        }
    }

    /// Discount against the reference price, as a percentage.
    pub fn discount_percentage(&self) -> Option<f64> {
        let promo = self.promotional_price?;
        let reference = self.reference_price();
        if reference.amount_cents == 0 || promo.amount_cents >= reference.amount_cents {
            return None;
        }
        let savings = reference.amount_cents - promo.amount_cents;
        Some(savings as f64 / reference.amount_cents as f64 * 100.0)
    }

    /// Human-readable option summary for cart display (e.g., "Azul - M").
    ///
    /// `None` when the variant has no options.
    pub fn option_summary(&self, locale: Locale) -> Option<String> {
        let parts: Vec<&str> = self
            .options
            .iter()
            .map(|option| option.value.resolve(locale))
            .filter(|value| !value.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" - "))
        }
    }

    fn reference_price(&self) -> Money {
        self.compare_at_price.unwrap_or(self.price)
    }
}

/// An attribute (dimension, value) pair on a variant.
///
/// The wire format matches dimensions to values by array position; the
/// ingestion boundary resolves that into these explicit pairs so nothing
/// downstream ever does positional matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantOption {
    /// Dimension name (e.g., "Color", "Talle").
    pub name: LocalizedText,
    /// Value for this variant (e.g., "Azul", "M").
    pub value: LocalizedText,
}

impl VariantOption {
    pub fn new(name: LocalizedText, value: LocalizedText) -> Self {
        Self { name, value }
    }
}

/// A product photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    pub id: i64,
    pub src: String,
    pub position: i32,
    #[serde(default)]
    pub alt: Vec<String>,
}

/// A catalog category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    /// Localized category name.
    pub name: LocalizedText,
    /// Localized URL-friendly handle.
    pub slug: LocalizedText,
    /// Parent category for nested trees.
    #[serde(default)]
    pub parent: Option<CategoryId>,
}
