//! Catalog read endpoints.

use tienda_commerce::catalog::wire::ProductPayload;
use tienda_commerce::catalog::Product;
use tienda_commerce::ids::{CategoryId, ProductId};
use tracing::debug;

use crate::{ApiClient, ApiError};

/// Parameters for the paginated product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProductsParams {
    /// 1-indexed page.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Restrict to one category.
    pub category_id: Option<CategoryId>,
    /// Visibility filter; the storefront only ever wants published
    /// products.
    pub published: Option<bool>,
    /// Look up by localized handle (slug).
    pub handle: Option<String>,
}

impl Default for ListProductsParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
            category_id: None,
            published: Some(true),
            handle: None,
        }
    }
}

impl ListProductsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(published) = self.published {
            params.push(("published", published.to_string()));
        }
        if let Some(category_id) = self.category_id {
            params.push(("category_id", category_id.to_string()));
        }
        if let Some(handle) = &self.handle {
            params.push(("handle", handle.clone()));
        }
        params
    }
}

impl ApiClient {
    /// Paginated product listing, ingested into core products.
    pub fn list_products(&self, params: &ListProductsParams) -> Result<Vec<Product>, ApiError> {
        let query = params.to_query();
        let response = self.get("/products", &query).send()?.error_for_status()?;
        let payloads: Vec<ProductPayload> = response.json()?;
        debug!(count = payloads.len(), page = params.page, "fetched product page");

        let currency = self.currency();
        Ok(payloads
            .into_iter()
            .map(|payload| payload.into_product(currency))
            .collect())
    }

    /// Fetch a single product by id.
    pub fn product_by_id(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self
            .get(&format!("/products/{}", id), &[])
            .send()?
            .error_for_status()?;
        let payload: ProductPayload = response.json()?;
        Ok(payload.into_product(self.currency()))
    }

    /// Look up a product by its localized handle.
    ///
    /// The platform answers handle lookups with a list; the first match
    /// wins and no match is `None`.
    pub fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, ApiError> {
        let params = ListProductsParams {
            handle: Some(slug.to_string()),
            ..ListProductsParams::default()
        };
        Ok(self.list_products(&params)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    #[test]
    fn test_default_params() {
        let params = ListProductsParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 12);
        assert_eq!(params.published, Some(true));
    }

    #[test]
    fn test_query_includes_optional_filters() {
        let params = ListProductsParams {
            category_id: Some(CategoryId::new(42)),
            handle: Some("remera".to_string()),
            ..ListProductsParams::default()
        };
        let query = params.to_query();

        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("published", "true".to_string())));
        assert!(query.contains(&("category_id", "42".to_string())));
        assert!(query.contains(&("handle", "remera".to_string())));
    }

    #[test]
    fn test_listing_url() {
        let client = ApiClient::new(ClientConfig::new(
            "12345",
            "token",
            "https://api.tiendanube.com/v1",
        ));
        let params = ListProductsParams {
            page: 3,
            ..ListProductsParams::default()
        };
        let builder = client.get("/products", &params.to_query());
        assert_eq!(
            builder.url,
            "https://api.tiendanube.com/v1/12345/products?page=3&per_page=12&published=true"
        );
    }
}
