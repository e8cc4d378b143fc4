//! Product catalog types and the wire ingestion boundary.

mod product;
pub mod wire;

pub use product::{Category, Product, ProductImage, Variant, VariantOption};
