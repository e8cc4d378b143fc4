//! Order creation and administration.

use serde::{Deserialize, Serialize};
use tienda_commerce::cart::Cart;
use tienda_commerce::ids::VariantId;

use crate::{ApiClient, ApiError};

/// Payment status values accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Authorized,
    Paid,
    Voided,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Voided => "voided",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// Shipping status values accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingStatus {
    #[default]
    Unpacked,
    Shipped,
    Unshipped,
}

impl ShippingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingStatus::Unpacked => "unpacked",
            ShippingStatus::Shipped => "shipped",
            ShippingStatus::Unshipped => "unshipped",
        }
    }
}

/// One product line in an order payload: variant, quantity, and the
/// price snapshot from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderProduct {
    pub variant_id: VariantId,
    pub quantity: i64,
    /// Decimal price string, as the platform expects.
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Customer block of an order payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Address block of an order payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderAddress {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    pub locality: String,
    pub city: String,
    pub province: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
}

/// Payload for the order-creation endpoint.
///
/// Carries every field the platform requires;
/// [`CreateOrderPayload::from_cart`] fills the storefront's defaults.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateOrderPayload {
    pub currency: String,
    pub language: String,
    pub gateway: String,
    pub payment_status: PaymentStatus,
    pub shipping: String,
    pub shipping_status: ShippingStatus,
    pub shipping_min_days: u32,
    pub shipping_max_days: u32,
    pub shipping_cost_owner: String,
    pub shipping_cost_customer: String,
    pub shipping_address: OrderAddress,
    pub customer: OrderCustomer,
    pub products: Vec<OrderProduct>,
    pub send_confirmation_email: bool,
    pub send_fulfillment_email: bool,
}

impl CreateOrderPayload {
    /// Build an order from the cart's line items.
    ///
    /// Payment is left pending with no gateway so the platform generates
    /// a payment URL for the customer; shipping is a flat 3 to 7 day
    /// window at no cost.
    pub fn from_cart(cart: &Cart, customer: OrderCustomer, shipping_address: OrderAddress) -> Self {
        let products = cart
            .items()
            .iter()
            .map(|line| OrderProduct {
                variant_id: line.variant_id,
                quantity: line.quantity,
                price: line.unit_price.display_amount(),
                name: Some(line.name.clone()),
            })
            .collect();

        Self {
            currency: "ARS".to_string(),
            language: "es".to_string(),
            gateway: "not-provided".to_string(),
            payment_status: PaymentStatus::Pending,
            shipping: "not-provided".to_string(),
            shipping_status: ShippingStatus::Unpacked,
            shipping_min_days: 3,
            shipping_max_days: 7,
            shipping_cost_owner: "0.00".to_string(),
            shipping_cost_customer: "0.00".to_string(),
            shipping_address,
            customer,
            products,
            send_confirmation_email: true,
            send_fulfillment_email: false,
        }
    }
}

/// An order as returned by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub status: String,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    /// Where the customer pays a pending order.
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
    pub total: String,
    pub subtotal: String,
    #[serde(default)]
    pub products: Vec<OrderProduct>,
}

#[derive(Serialize)]
struct UpdatePaymentBody {
    payment_status: PaymentStatus,
}

#[derive(Serialize)]
struct UpdateShippingBody {
    shipping_status: ShippingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_tracking_url: Option<String>,
}

impl ApiClient {
    /// Create an order from a ready payload.
    pub fn create_order(&self, payload: &CreateOrderPayload) -> Result<OrderResponse, ApiError> {
        let response = self
            .post("/orders")
            .json(payload)?
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Fetch an order by id.
    pub fn order_by_id(&self, id: i64) -> Result<OrderResponse, ApiError> {
        let response = self
            .get(&format!("/orders/{}", id), &[])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Paginated order listing, optionally restricted to one status.
    pub fn list_orders(
        &self,
        page: u32,
        per_page: u32,
        status: Option<&str>,
    ) -> Result<Vec<OrderResponse>, ApiError> {
        let mut params = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }
        let response = self.get("/orders", &params).send()?.error_for_status()?;
        Ok(response.json()?)
    }

    /// Update an order's payment status.
    pub fn update_payment_status(
        &self,
        order_id: i64,
        status: PaymentStatus,
    ) -> Result<OrderResponse, ApiError> {
        let response = self
            .put(&format!("/orders/{}", order_id))
            .json(&UpdatePaymentBody {
                payment_status: status,
            })?
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Update an order's shipping status, optionally attaching tracking
    /// information.
    pub fn update_shipping_status(
        &self,
        order_id: i64,
        status: ShippingStatus,
        tracking_number: Option<String>,
        tracking_url: Option<String>,
    ) -> Result<OrderResponse, ApiError> {
        let response = self
            .put(&format!("/orders/{}", order_id))
            .json(&UpdateShippingBody {
                shipping_status: status,
                shipping_tracking_number: tracking_number,
                shipping_tracking_url: tracking_url,
            })?
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienda_commerce::cart::NewLineItem;
    use tienda_commerce::ids::ProductId;
    use tienda_commerce::money::{Currency, Money};

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(NewLineItem {
            product_id: ProductId::new(10),
            variant_id: VariantId::new(7),
            name: "Remera".to_string(),
            unit_price: Money::new(10000, Currency::ARS),
            image: None,
            variant_name: None,
        });
        cart.add_item(NewLineItem {
            product_id: ProductId::new(10),
            variant_id: VariantId::new(7),
            name: "Remera".to_string(),
            unit_price: Money::new(10000, Currency::ARS),
            image: None,
            variant_name: None,
        });
        cart
    }

    #[test]
    fn test_from_cart_maps_lines() {
        let payload = CreateOrderPayload::from_cart(
            &sample_cart(),
            OrderCustomer::default(),
            OrderAddress::default(),
        );

        assert_eq!(payload.products.len(), 1);
        let line = &payload.products[0];
        assert_eq!(line.variant_id, VariantId::new(7));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, "100.00");
        assert_eq!(line.name.as_deref(), Some("Remera"));
    }

    #[test]
    fn test_from_cart_defaults() {
        let payload = CreateOrderPayload::from_cart(
            &sample_cart(),
            OrderCustomer::default(),
            OrderAddress::default(),
        );

        assert_eq!(payload.currency, "ARS");
        assert_eq!(payload.language, "es");
        assert_eq!(payload.gateway, "not-provided");
        assert_eq!(payload.payment_status, PaymentStatus::Pending);
        assert_eq!(payload.shipping_status, ShippingStatus::Unpacked);
        assert_eq!(payload.shipping_min_days, 3);
        assert_eq!(payload.shipping_max_days, 7);
        assert!(payload.send_confirmation_email);
        assert!(!payload.send_fulfillment_email);
    }

    #[test]
    fn test_payload_serializes_platform_field_names() {
        let payload = CreateOrderPayload::from_cart(
            &sample_cart(),
            OrderCustomer {
                name: "Cliente Web".to_string(),
                email: "cliente@ejemplo.com".to_string(),
                phone: None,
                document: None,
            },
            OrderAddress::default(),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["payment_status"], "pending");
        assert_eq!(value["shipping_status"], "unpacked");
        assert_eq!(value["customer"]["email"], "cliente@ejemplo.com");
        assert_eq!(value["products"][0]["variant_id"], 7);
        assert_eq!(value["products"][0]["price"], "100.00");
        // Absent optionals stay off the wire entirely.
        assert!(value["customer"].get("phone").is_none());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Refunded,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: PaymentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_order_response_parses() {
        let response: OrderResponse = serde_json::from_value(serde_json::json!({
            "id": 900,
            "number": "1001",
            "status": "open",
            "payment_status": "pending",
            "shipping_status": "unpacked",
            "payment_url": "https://pay.example.com/900",
            "total": "200.00",
            "subtotal": "200.00",
            "products": [
                {"variant_id": 7, "quantity": 2, "price": "100.00"}
            ]
        }))
        .unwrap();

        assert_eq!(response.id, 900);
        assert_eq!(response.payment_status, PaymentStatus::Pending);
        assert_eq!(response.payment_url.as_deref(), Some("https://pay.example.com/900"));
        assert_eq!(response.products[0].quantity, 2);
    }
}
