//! Facet extraction: deriving the available filter dimensions from a
//! product collection.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Product;
use crate::locale::Locale;
use crate::money::Money;

/// Observed price bounds across a collection, in whole currency units.
///
/// The minimum is floored and the maximum is ceiled so the bounds are
/// clean values for a range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Filter dimensions derived from a product collection.
///
/// A pure projection: recomputed whenever the collection changes, never
/// mutated in place, never a source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailableFilters {
    /// Dimension name to its distinct values, sorted lexicographically.
    pub attributes: BTreeMap<String, Vec<String>>,
    /// Global effective-price bounds. `None` when no priced variant was
    /// observed (empty collection, or only variant-less products).
    pub price_range: Option<PriceRange>,
}

impl AvailableFilters {
    /// Check if there is nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.price_range.is_none()
    }
}

/// Scan a product collection for its filterable dimensions.
///
/// Attribute names and values resolve in the requested locale, falling
/// back to the store default per field; empty strings are skipped. The
/// output is deterministic for a given collection and locale.
pub fn extract_available_filters(products: &[Product], locale: Locale) -> AvailableFilters {
    let mut attributes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut cheapest: Option<Money> = None;
    let mut dearest: Option<Money> = None;

    for product in products {
        for variant in &product.variants {
            let price = variant.effective_price();
            if cheapest.map_or(true, |low| price.amount_cents < low.amount_cents) {
                cheapest = Some(price);
            }
            if dearest.map_or(true, |high| price.amount_cents > high.amount_cents) {
                dearest = Some(price);
            }

            for option in &variant.options {
                let name = option.name.resolve(locale);
                if name.is_empty() {
                    continue;
                }
                let value = option.value.resolve(locale);
                if value.is_empty() {
                    continue;
                }
                attributes
                    .entry(name.to_string())
                    .or_default()
                    .insert(value.to_string());
            }
        }
    }

    AvailableFilters {
        attributes: attributes
            .into_iter()
            .map(|(name, values)| (name, values.into_iter().collect()))
            .collect(),
        price_range: match (cheapest, dearest) {
            (Some(min), Some(max)) => Some(PriceRange {
                min: min.floor_units(),
                max: max.ceil_units(),
            }),
            _ => None,
        },
    }
}
