//! Wire payloads from the remote catalog API.
//!
//! The platform ships attribute dimensions and variant values as parallel
//! arrays matched by position. Ingestion pairs them exactly once, here,
//! so the rest of the crate never does positional matching. Malformed
//! pieces degrade instead of failing: unmatched positions are ignored and
//! variants without a parseable base price are dropped.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::catalog::{Category, Product, ProductImage, Variant, VariantOption};
use crate::ids::{CategoryId, ProductId, VariantId};
use crate::locale::LocalizedText;
use crate::money::{Currency, Money};

/// A product as served by the platform API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub id: i64,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    pub handle: LocalizedText,
    /// Attribute dimension names; variant values refer to these by
    /// position.
    #[serde(default)]
    pub attributes: Vec<LocalizedText>,
    #[serde(default)]
    pub variants: Vec<VariantPayload>,
    #[serde(default)]
    pub images: Vec<ImagePayload>,
    #[serde(default)]
    pub categories: Vec<CategoryPayload>,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub free_shipping: bool,
    #[serde(default)]
    pub created_at: String,
}

/// A variant as served by the platform API.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantPayload {
    pub id: i64,
    /// Base price as a decimal string.
    pub price: String,
    #[serde(default)]
    pub promotional_price: Option<String>,
    #[serde(default)]
    pub compare_at_price: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Positional attribute values.
    #[serde(default)]
    pub values: Vec<LocalizedText>,
}

/// A product image as served by the platform API.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePayload {
    pub id: i64,
    pub src: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub alt: Vec<String>,
}

/// A category as served by the platform API.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
    pub id: i64,
    pub name: LocalizedText,
    pub handle: LocalizedText,
    #[serde(default)]
    pub parent: Option<i64>,
}

fn default_true() -> bool {
    true
}

impl ProductPayload {
    /// Materialize the core product.
    ///
    /// Prices are parsed into the store's currency and positional
    /// attribute values are paired with their dimension names.
    pub fn into_product(self, currency: Currency) -> Product {
        let product_id = ProductId::new(self.id);
        let created_at = parse_timestamp(&self.created_at, product_id);
        let attributes = self.attributes;
        let variants = self
            .variants
            .into_iter()
            .filter_map(|variant| variant.into_variant(&attributes, currency, product_id))
            .collect();

        Product {
            id: product_id,
            name: self.name,
            description: self.description,
            slug: self.handle,
            variants,
            images: self.images.into_iter().map(ImagePayload::into_image).collect(),
            categories: self
                .categories
                .into_iter()
                .map(CategoryPayload::into_category)
                .collect(),
            published: self.published,
            free_shipping: self.free_shipping,
            created_at,
        }
    }
}

impl VariantPayload {
    fn into_variant(
        self,
        attributes: &[LocalizedText],
        currency: Currency,
        product_id: ProductId,
    ) -> Option<Variant> {
        let price = match Money::from_decimal_str(&self.price, currency) {
            Some(price) => price,
            None => {
                warn!(
                    product = %product_id,
                    variant = self.id,
                    raw = %self.price,
                    "dropping variant with unparseable base price"
                );
                return None;
            }
        };
        let promotional_price = self
            .promotional_price
            .as_deref()
            .and_then(|raw| Money::from_decimal_str(raw, currency));
        let compare_at_price = self
            .compare_at_price
            .as_deref()
            .and_then(|raw| Money::from_decimal_str(raw, currency));

        // zip stops at the shorter side: values with no dimension, and
        // dimensions with no value, fall away here.
        let options = attributes
            .iter()
            .zip(self.values)
            .map(|(name, value)| VariantOption::new(name.clone(), value))
            .collect();

        Some(Variant {
            id: VariantId::new(self.id),
            price,
            promotional_price,
            compare_at_price,
            stock: self.stock,
            sku: self.sku,
            options,
        })
    }
}

impl ImagePayload {
    fn into_image(self) -> ProductImage {
        ProductImage {
            id: self.id,
            src: self.src,
            position: self.position,
            alt: self.alt,
        }
    }
}

impl CategoryPayload {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::new(self.id),
            name: self.name,
            slug: self.handle,
            parent: self.parent.map(CategoryId::new),
        }
    }
}

fn parse_timestamp(raw: &str, product: ProductId) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.with_timezone(&Utc),
        Err(_) => {
            if !raw.is_empty() {
                warn!(product = %product, raw, "unparseable created_at timestamp");
            }
            DateTime::UNIX_EPOCH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn sample_payload() -> ProductPayload {
        serde_json::from_value(serde_json::json!({
            "id": 101,
            "name": {"es": "Remera", "en": "T-shirt"},
            "description": {"es": "Remera de algodón"},
            "handle": {"es": "remera", "en": "t-shirt"},
            "attributes": [
                {"es": "Color", "en": "Color"},
                {"es": "Talle", "en": "Size"}
            ],
            "variants": [
                {
                    "id": 1,
                    "price": "100.00",
                    "promotional_price": "80.00",
                    "stock": 5,
                    "values": [{"es": "Azul", "en": "Blue"}, {"es": "M"}]
                },
                {
                    "id": 2,
                    "price": "120.00",
                    "stock": null,
                    "values": [{"es": "Rojo", "en": "Red"}, {"es": "L"}]
                }
            ],
            "images": [{"id": 9, "src": "remera.jpg", "position": 1}],
            "categories": [
                {"id": 3, "name": {"es": "Ropa"}, "handle": {"es": "ropa"}}
            ],
            "published": true,
            "free_shipping": false,
            "created_at": "2024-05-01T12:00:00+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_ingest_pairs_options() {
        let product = sample_payload().into_product(Currency::ARS);

        assert_eq!(product.id.value(), 101);
        assert_eq!(product.variants.len(), 2);

        let first = &product.variants[0];
        assert_eq!(first.options.len(), 2);
        assert_eq!(first.options[0].name.resolve(Locale::En), "Color");
        assert_eq!(first.options[0].value.resolve(Locale::Es), "Azul");
        assert_eq!(first.options[1].value.resolve(Locale::Es), "M");
    }

    #[test]
    fn test_ingest_parses_prices() {
        let product = sample_payload().into_product(Currency::ARS);

        let first = &product.variants[0];
        assert_eq!(first.price.amount_cents, 10000);
        assert_eq!(first.promotional_price.unwrap().amount_cents, 8000);
        assert_eq!(first.effective_price().amount_cents, 8000);

        let second = &product.variants[1];
        assert_eq!(second.promotional_price, None);
        assert_eq!(second.stock, None);
    }

    #[test]
    fn test_ingest_parses_timestamp() {
        let product = sample_payload().into_product(Currency::ARS);
        assert_eq!(product.created_at.timestamp(), 1714564800);
    }

    #[test]
    fn test_ingest_tolerates_length_mismatch() {
        let mut payload = sample_payload();
        // Three values, two dimensions: the extra value has no dimension.
        payload.variants[0].values.push(LocalizedText::new("Extra"));
        // No values at all on the other variant.
        payload.variants[1].values.clear();

        let product = payload.into_product(Currency::ARS);
        assert_eq!(product.variants[0].options.len(), 2);
        assert_eq!(product.variants[1].options.len(), 0);
    }

    #[test]
    fn test_ingest_drops_unparseable_price() {
        let mut payload = sample_payload();
        payload.variants[0].price = "not-a-price".to_string();

        let product = payload.into_product(Currency::ARS);
        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].id.value(), 2);
    }

    #[test]
    fn test_ingest_bad_promotional_price_becomes_none() {
        let mut payload = sample_payload();
        payload.variants[0].promotional_price = Some("free!".to_string());

        let product = payload.into_product(Currency::ARS);
        assert_eq!(product.variants[0].promotional_price, None);
        assert_eq!(product.variants[0].effective_price().amount_cents, 10000);
    }

    #[test]
    fn test_ingest_bad_timestamp_degrades_to_epoch() {
        let mut payload = sample_payload();
        payload.created_at = "yesterday".to_string();

        let product = payload.into_product(Currency::ARS);
        assert_eq!(product.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_minimal_payload_defaults() {
        let payload: ProductPayload = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": {"es": "Taza"},
            "handle": {"es": "taza"}
        }))
        .unwrap();

        let product = payload.into_product(Currency::ARS);
        assert!(product.published);
        assert!(product.variants.is_empty());
        assert_eq!(product.description.es, "");
    }
}
