//! Storefront domain core for the tienda shop.
//!
//! Pure, synchronous building blocks behind the product listing and the
//! cart:
//!
//! - **Catalog**: localized products and variants, plus the ingestion
//!   boundary that pairs the platform's positional attribute arrays into
//!   explicit (dimension, value) options.
//! - **Search**: facet extraction, multi-criterion filtering, stable
//!   sorting, and the query-parameter mapping for URL-held filter state.
//! - **Cart**: line items keyed by variant id with price snapshots, and
//!   a persisted store over a swappable storage backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_commerce::prelude::*;
//!
//! // Listing page: facets and a filtered, sorted grid.
//! let facets = extract_available_filters(&products, Locale::Es);
//! let spec = parse_filter_spec(query_pairs);
//! let grid = sort_products(&filter_products(&products, &spec, Locale::Es), spec.sort);
//!
//! // Cart, persisted across sessions.
//! let mut cart = CartStore::open(FileStore::open(data_dir)?);
//! cart.add_item(NewLineItem::for_variant(&product, &variant, Locale::Es));
//! println!("{}", cart.total_price());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod locale;
pub mod money;
pub mod search;

pub use error::CommerceError;
pub use ids::{CategoryId, ProductId, VariantId};
pub use locale::{Locale, LocalizedText};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartStore, LineItem, NewLineItem};
    pub use crate::catalog::{Category, Product, ProductImage, Variant, VariantOption};
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryId, ProductId, VariantId};
    pub use crate::locale::{Locale, LocalizedText};
    pub use crate::money::{Currency, Money};
    pub use crate::search::{
        extract_available_filters, filter_products, parse_filter_spec, serialize_filter_spec,
        sort_products, AvailableFilters, FilterSpec, PriceRange, SortMode,
    };
}
