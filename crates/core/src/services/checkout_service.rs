use crate::errors::StoreError;
use crate::models::cart::Cart;
use crate::models::config::StoreConfig;
use crate::models::order::{
    OrderConfirmation, OrderItem, OrderRequest, PaymentMethod, RawOrderResponse,
};
use crate::services::pricing_service::DEPOSIT_RATE;

/// Maps a cart to an order request and interprets the server's response.
///
/// Pure logic — the facade owns the network call and the in-flight guard,
/// so every rule here is testable without a server.
pub struct CheckoutService;

impl CheckoutService {
    pub fn new() -> Self {
        Self
    }

    /// Entry guard: non-empty cart, non-blank (trimmed) name and phone.
    /// Violations are rejected locally before any network call.
    pub fn validate(&self, cart: &Cart, customer_name: &str, phone: &str) -> Result<(), StoreError> {
        if cart.is_empty() {
            return Err(StoreError::Validation("Your cart is empty!".into()));
        }
        if customer_name.trim().is_empty() || phone.trim().is_empty() {
            return Err(StoreError::Validation(
                "Please enter your name and phone number.".into(),
            ));
        }
        Ok(())
    }

    /// Map the cart to an outbound order. Line prices and names are
    /// stripped — the server is the source of truth for pricing.
    #[must_use]
    pub fn build_request(
        &self,
        cart: &Cart,
        customer_name: &str,
        phone: &str,
        method: PaymentMethod,
    ) -> OrderRequest {
        OrderRequest {
            items: cart
                .items
                .iter()
                .map(|i| OrderItem {
                    product_id: i.id.clone(),
                    qty: i.qty,
                })
                .collect(),
            customer_name: customer_name.trim().to_string(),
            phone: phone.trim().to_string(),
            payment_method: method,
        }
    }

    /// Interpret an order-creation response.
    ///
    /// Field precedence (first usable wins, empty strings and zero amounts
    /// treated as absent per slot): `orderId` / `_id` / `id`;
    /// `total` / `totalAmount` (default 0); `deposit` / `depositAmount`
    /// (default 25% of total); `payment` / `paymentDetails`.
    /// A response without any order identifier is a failure — the caller
    /// must leave the cart untouched.
    pub fn confirm(
        &self,
        response: RawOrderResponse,
        method: PaymentMethod,
        config: &StoreConfig,
    ) -> Result<OrderConfirmation, StoreError> {
        let order_id = non_empty(response.order_id)
            .or_else(|| non_empty(response.mongo_id))
            .or_else(|| non_empty(response.id))
            .ok_or(StoreError::MissingOrderId)?;

        let total = non_zero(response.total)
            .or_else(|| non_zero(response.total_amount))
            .unwrap_or(0.0);
        let deposit = non_zero(response.deposit)
            .or_else(|| non_zero(response.deposit_amount))
            .unwrap_or(total * DEPOSIT_RATE);

        let payment_number = config.payment_number(method).to_string();

        let instructions = response
            .payment
            .or(response.payment_details)
            .and_then(|p| p.instructions)
            .unwrap_or_else(|| {
                format!(
                    "Please send {prefix}{deposit:.2} (25% deposit) to {payment_number} \
                     and include Order ID: {order_id} as reference",
                    prefix = config.currency_prefix,
                )
            });

        Ok(OrderConfirmation {
            order_id,
            total,
            deposit,
            method,
            payment_number,
            instructions,
        })
    }
}

impl Default for CheckoutService {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty string in an id slot means the slot is absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A zero in an amount slot means the slot is absent (a zero deposit is
/// recomputed from the total, never taken literally).
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}
