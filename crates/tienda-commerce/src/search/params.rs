//! The flat query-parameter representation of a filter selection.
//!
//! The surrounding application keeps the filter state in the page URL so
//! every listing render is deterministic. These two pure functions are
//! the whole mapping; percent-encoding and routing belong to the host.

use crate::search::{FilterSpec, SortMode};

/// Prefix for attribute-dimension parameters (`attr_color=Rojo,Azul`).
pub const ATTRIBUTE_PREFIX: &str = "attr_";

const QUERY_KEY: &str = "q";
const SORT_KEY: &str = "sort";
const MIN_PRICE_KEY: &str = "min_price";
const MAX_PRICE_KEY: &str = "max_price";

/// Build a filter selection from query parameters.
///
/// Unknown keys are ignored and missing keys leave the matching field
/// unconstrained. A repeated key keeps its last value.
pub fn parse_filter_spec<'a, I>(params: I) -> FilterSpec
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut spec = FilterSpec::default();
    for (key, value) in params {
        match key {
            QUERY_KEY => spec.query = value.to_string(),
            SORT_KEY => spec.sort = SortMode::from_str(value),
            MIN_PRICE_KEY => spec.min_price = value.parse().ok(),
            MAX_PRICE_KEY => spec.max_price = value.parse().ok(),
            _ => {
                if let Some(name) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    let values: Vec<String> = value
                        .split(',')
                        .filter(|part| !part.is_empty())
                        .map(str::to_string)
                        .collect();
                    spec.set_attribute(name, values);
                }
            }
        }
    }
    spec
}

/// Serialize a filter selection to query parameters.
///
/// Defaults are omitted, so a pristine selection maps to an empty list
/// and the URL stays clean. Output order is deterministic.
pub fn serialize_filter_spec(spec: &FilterSpec) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if !spec.query.is_empty() {
        params.push((QUERY_KEY.to_string(), spec.query.clone()));
    }
    if spec.sort != SortMode::default() {
        params.push((SORT_KEY.to_string(), spec.sort.as_str().to_string()));
    }
    if let Some(min) = spec.min_price {
        params.push((MIN_PRICE_KEY.to_string(), min.to_string()));
    }
    if let Some(max) = spec.max_price {
        params.push((MAX_PRICE_KEY.to_string(), max.to_string()));
    }
    for (name, values) in &spec.attributes {
        if values.is_empty() {
            continue;
        }
        params.push((format!("{}{}", ATTRIBUTE_PREFIX, name), values.join(",")));
    }
    params
}
