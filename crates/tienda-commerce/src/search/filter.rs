//! Client-side filtering and sorting of product collections.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{Product, Variant};
use crate::locale::Locale;
use crate::search::SortMode;

/// A filter selection over a product listing.
///
/// Absent fields mean "unconstrained", never "matches nothing". The
/// selection round-trips through the page URL via
/// [`crate::search::params`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Free-text search over localized name and description.
    pub query: String,
    /// Inclusive lower price bound, in whole currency units.
    pub min_price: Option<i64>,
    /// Inclusive upper price bound, in whole currency units.
    pub max_price: Option<i64>,
    /// Accepted values per attribute dimension. An empty list is the
    /// same as the dimension being absent.
    pub attributes: BTreeMap<String, Vec<String>>,
    /// Requested ordering.
    pub sort: SortMode,
}

impl FilterSpec {
    /// Check if any constraint or non-default sort is active.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || self.sort != SortMode::default()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.attributes.values().any(|values| !values.is_empty())
    }

    /// Number of active selections, for the filter badge.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.query.is_empty() {
            count += 1;
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            count += 1;
        }
        count += self.attributes.values().map(Vec::len).sum::<usize>();
        count
    }

    /// Replace the accepted values for a dimension. An empty list clears
    /// the dimension.
    pub fn set_attribute(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        if values.is_empty() {
            self.attributes.remove(&name);
        } else {
            self.attributes.insert(name, values);
        }
    }

    /// Toggle a single value inside a dimension.
    pub fn toggle_attribute_value(&mut self, name: &str, value: &str) {
        let mut values = self.attributes.get(name).cloned().unwrap_or_default();
        match values.iter().position(|existing| existing == value) {
            Some(index) => {
                values.remove(index);
            }
            None => values.push(value.to_string()),
        }
        self.set_attribute(name, values);
    }

    /// Drop every accepted value for a dimension.
    pub fn clear_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Reset to the unconstrained default.
    pub fn clear(&mut self) {
        *self = FilterSpec::default();
    }
}

/// Filter a product collection, preserving input order.
///
/// A product is retained when the query matches its localized name or
/// description, at least one variant's effective price lies within the
/// bounds, and a single variant satisfies every constrained dimension
/// jointly. A product without variants never passes the price check.
pub fn filter_products(products: &[Product], spec: &FilterSpec, locale: Locale) -> Vec<Product> {
    let retained: Vec<Product> = products
        .iter()
        .filter(|product| matches_query(product, &spec.query, locale))
        .filter(|product| matches_price(product, spec))
        .filter(|product| matches_attributes(product, &spec.attributes, locale))
        .cloned()
        .collect();
    debug!(
        total = products.len(),
        retained = retained.len(),
        "filtered product collection"
    );
    retained
}

fn matches_query(product: &Product, query: &str, locale: Locale) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    product.name.resolve(locale).to_lowercase().contains(&query)
        || product
            .description
            .resolve(locale)
            .to_lowercase()
            .contains(&query)
}

fn matches_price(product: &Product, spec: &FilterSpec) -> bool {
    product.variants.iter().any(|variant| {
        let price = variant.effective_price();
        let scale = price.currency.scale();
        if let Some(min) = spec.min_price {
            if price.amount_cents < min.saturating_mul(scale) {
                return false;
            }
        }
        if let Some(max) = spec.max_price {
            if price.amount_cents > max.saturating_mul(scale) {
                return false;
            }
        }
        true
    })
}

fn matches_attributes(
    product: &Product,
    constraints: &BTreeMap<String, Vec<String>>,
    locale: Locale,
) -> bool {
    let active: Vec<(&String, &Vec<String>)> = constraints
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .collect();
    if active.is_empty() {
        return true;
    }
    product.variants.iter().any(|variant| {
        active
            .iter()
            .all(|(name, accepted)| variant_matches_dimension(variant, name, accepted, locale))
    })
}

fn variant_matches_dimension(
    variant: &Variant,
    dimension: &str,
    accepted: &[String],
    locale: Locale,
) -> bool {
    variant.options.iter().any(|option| {
        option.name.resolve(locale) == dimension
            && accepted
                .iter()
                .any(|value| value == option.value.resolve(locale))
    })
}

/// Reorder a collection by the given mode. Stable; the input is never
/// mutated.
pub fn sort_products(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match mode {
        SortMode::Newest => {
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortMode::PriceAsc => {
            sorted.sort_by_key(sort_price);
        }
        SortMode::PriceDesc => {
            sorted.sort_by(|a, b| sort_price(b).cmp(&sort_price(a)));
        }
    }
    sorted
}

/// Price key for ordering: the lowest variant effective price, with
/// variant-less products treated as infinitely expensive.
fn sort_price(product: &Product) -> i64 {
    product
        .lowest_effective_price()
        .map_or(i64::MAX, |price| price.amount_cents)
}
