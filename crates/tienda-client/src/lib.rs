//! Tiendanube API client for the tienda storefront.
//!
//! Thin typed layer over the platform's store-scoped REST API: catalog
//! reads, checkout construction, and order management. Requests go out
//! through the Spin SDK when compiled for wasm32; elsewhere `send()` is
//! an inert stub so the pure layers stay testable.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_client::{ApiClient, ListProductsParams};
//!
//! let client = ApiClient::from_env()?;
//! let products = client.list_products(&ListProductsParams::default())?;
//! ```

mod checkout;
mod config;
mod error;
mod orders;
mod products;
mod request;
mod response;

pub use checkout::{checkout_permalink, CheckoutLineItem, CheckoutResponse};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use orders::{
    CreateOrderPayload, OrderAddress, OrderCustomer, OrderProduct, OrderResponse, PaymentStatus,
    ShippingStatus,
};
pub use products::ListProductsParams;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use tienda_commerce::Currency;
use tracing::debug;

/// Client for the platform's store-scoped REST API.
///
/// URLs take the shape `{api_url}/{store_id}{endpoint}`; every request
/// carries the platform's `Authentication` header and an identifying
/// User-Agent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn currency(&self) -> Currency {
        self.config.currency
    }

    /// Build a request against a store endpoint (e.g., "/products").
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> RequestBuilder {
        let query = build_query_string(params);
        let url = format!(
            "{}/{}{}{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.store_id,
            endpoint,
            query
        );
        debug!(method = method.as_str(), %url, "tiendanube request");
        RequestBuilder::new(method, url)
            .header(
                "Authentication",
                format!("bearer {}", self.config.access_token),
            )
            .header("Content-Type", "application/json")
            .header("User-Agent", self.config.user_agent.clone())
    }

    /// Build a GET request.
    pub fn get(&self, endpoint: &str, params: &[(&str, String)]) -> RequestBuilder {
        self.request(Method::Get, endpoint, params)
    }

    /// Build a POST request.
    pub fn post(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::Post, endpoint, &[])
    }

    /// Build a PUT request.
    pub fn put(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::Put, endpoint, &[])
    }
}

/// Build a query string, skipping empty values.
fn build_query_string(params: &[(&str, String)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new(
            "12345",
            "secret-token",
            "https://api.tiendanube.com/v1",
        ))
    }

    #[test]
    fn test_request_url_includes_store_id() {
        let builder = client().get("/products", &[]);
        assert_eq!(builder.url, "https://api.tiendanube.com/v1/12345/products");
    }

    #[test]
    fn test_request_url_with_params() {
        let builder = client().get(
            "/products",
            &[
                ("page", "2".to_string()),
                ("per_page", "12".to_string()),
                ("handle", String::new()),
            ],
        );
        assert_eq!(
            builder.url,
            "https://api.tiendanube.com/v1/12345/products?page=2&per_page=12"
        );
    }

    #[test]
    fn test_request_carries_platform_headers() {
        let builder = client().get("/products", &[]);
        assert_eq!(
            builder.headers.get("Authentication").map(String::as_str),
            Some("bearer secret-token")
        );
        assert_eq!(
            builder.headers.get("User-Agent").map(String::as_str),
            Some("tienda-storefront")
        );
    }

    #[test]
    fn test_trailing_slash_in_api_url() {
        let client = ApiClient::new(ClientConfig::new(
            "12345",
            "token",
            "https://api.tiendanube.com/v1/",
        ));
        let builder = client.get("/orders", &[]);
        assert_eq!(builder.url, "https://api.tiendanube.com/v1/12345/orders");
    }

    #[test]
    fn test_build_query_string_empty() {
        assert_eq!(build_query_string(&[]), "");
    }
}
