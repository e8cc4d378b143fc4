//! Product listing search: facet extraction, filtering, sorting, and the
//! query-parameter representation of the filter state.

mod facets;
mod filter;
pub mod params;

pub use facets::{extract_available_filters, AvailableFilters, PriceRange};
pub use filter::{filter_products, sort_products, FilterSpec};
pub use params::{parse_filter_spec, serialize_filter_spec, ATTRIBUTE_PREFIX};

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Sort modes for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Most recently created first.
    #[default]
    Newest,
    /// Cheapest first, by lowest variant price.
    PriceAsc,
    /// Most expensive first, by lowest variant price.
    PriceDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
        }
    }

    /// Parse a sort tag; anything unknown falls back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price_asc" => SortMode::PriceAsc,
            "price_desc" => SortMode::PriceDesc,
            _ => SortMode::Newest,
        }
    }

    /// Label shown in the sort dropdown.
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SortMode::Newest, Locale::En) => "Newest",
            (SortMode::Newest, _) => "Más recientes",
            (SortMode::PriceAsc, Locale::En) => "Price: Low to High",
            (SortMode::PriceAsc, _) => "Precio: menor a mayor",
            (SortMode::PriceDesc, Locale::En) => "Price: High to Low",
            (SortMode::PriceDesc, _) => "Precio: mayor a menor",
        }
    }
}
