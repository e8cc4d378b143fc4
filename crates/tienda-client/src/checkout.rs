//! Checkout construction.
//!
//! Two paths the storefront uses: the public cart permalink, which needs
//! no credentials, and the hosted-checkout cart resource on the API.

use serde::{Deserialize, Serialize};
use tienda_commerce::cart::Cart;
use tienda_commerce::ids::VariantId;

use crate::{ApiClient, ApiError};

/// One line of a checkout request: just the variant and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLineItem {
    pub variant_id: VariantId,
    pub quantity: i64,
}

impl CheckoutLineItem {
    /// Snapshot a cart into checkout lines.
    pub fn from_cart(cart: &Cart) -> Vec<Self> {
        cart.items()
            .iter()
            .map(|line| Self {
                variant_id: line.variant_id,
                quantity: line.quantity,
            })
            .collect()
    }
}

/// Hosted checkout created on the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    pub id: String,
    /// Where to send the customer to pay.
    pub checkout_url: String,
}

/// Build the storefront's cart permalink:
/// `{store_url}/cart/add/{id},{id}?quantity[id]=n&...`.
///
/// Adding every variant in one navigation is how the storefront hands an
/// anonymous cart to the hosted shop. Returns `None` for an empty item
/// list.
pub fn checkout_permalink(store_url: &str, items: &[CheckoutLineItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let ids: Vec<String> = items
        .iter()
        .map(|item| item.variant_id.to_string())
        .collect();
    let quantities: Vec<String> = items
        .iter()
        .map(|item| format!("quantity[{}]={}", item.variant_id, item.quantity))
        .collect();
    Some(format!(
        "{}/cart/add/{}?{}",
        store_url.trim_end_matches('/'),
        ids.join(","),
        quantities.join("&")
    ))
}

#[derive(Serialize)]
struct CreateCheckoutBody<'a> {
    line_items: &'a [CheckoutLineItem],
}

impl ApiClient {
    /// Create a hosted checkout for the given lines and return its
    /// payment URL.
    pub fn create_checkout(
        &self,
        items: &[CheckoutLineItem],
    ) -> Result<CheckoutResponse, ApiError> {
        let response = self
            .post("/carts")
            .json(&CreateCheckoutBody { line_items: items })?
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}
