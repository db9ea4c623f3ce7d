use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment methods accepted at checkout. Each maps to a fixed mobile-money
/// number held in [`StoreConfig`](crate::models::config::StoreConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "MPESA")]
    Mpesa,
    #[serde(rename = "ECOCASH")]
    Ecocash,
}

impl PaymentMethod {
    /// Wire/display name, as the backend expects it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "MPESA",
            PaymentMethod::Ecocash => "ECOCASH",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived payment breakdown for display — never stored.
/// All three values are pre-rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentBreakdown {
    pub total: String,
    pub deposit: String,
    pub balance: String,
}

/// One line of an outbound order. Price and name are deliberately absent:
/// the server re-prices every order from its own catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub qty: u32,
}

/// The order submission payload (`POST /orders`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
}

/// Payment details the server may attach to an order response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaymentDetails {
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Order-creation response as it arrives on the wire. The backend has
/// shipped several field spellings over time; each group is resolved
/// first-match-wins by [`CheckoutService`](crate::services::checkout_service::CheckoutService).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderResponse {
    pub order_id: Option<String>,
    #[serde(rename = "_id")]
    pub mongo_id: Option<String>,
    pub id: Option<String>,

    pub total: Option<f64>,
    pub total_amount: Option<f64>,

    pub deposit: Option<f64>,
    pub deposit_amount: Option<f64>,

    pub payment: Option<RawPaymentDetails>,
    pub payment_details: Option<RawPaymentDetails>,
}

/// Everything the confirmation view needs after a successful checkout.
///
/// The cart is NOT cleared when this is produced — only when the shopper
/// dismisses the confirmation, so payment details stay copyable.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Server-assigned order identifier (the payment reference)
    pub order_id: String,

    pub total: f64,

    /// Required upfront payment (25% of total unless the server says otherwise)
    pub deposit: f64,

    pub method: PaymentMethod,

    /// Mobile-money number to send the deposit to, selected by method
    pub payment_number: String,

    /// Server-provided instructions, or a generated fallback message
    pub instructions: String,
}

/// Token returned by `POST /admin/login`. Gates the admin surface only;
/// the admin panel itself is outside this library.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminToken {
    pub token: String,
}

// ── Order tracking (inbound) ────────────────────────────────────────

/// Product reference nested inside a tracked order line.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedProduct {
    pub name: String,
}

/// One line of a tracked order, priced by the server at order time.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedItem {
    pub product: TrackedProduct,
    pub qty: u32,
    pub price: f64,
}

/// Payment summary attached to a tracked order.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedPayment {
    pub method: String,
    pub status: String,
}

/// One status-change event in the order's tracking timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingEntry {
    pub status: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Full tracked order as returned by `GET /orders/track`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedOrder {
    pub status: String,
    pub items: Vec<TrackedItem>,
    pub customer_name: String,
    pub phone: String,
    pub order_number: String,
    pub payment: TrackedPayment,
    pub tracking: Vec<TrackingEntry>,
}

// ── Order tracking (derived view) ───────────────────────────────────

/// One rendered order line with its computed subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderViewLine {
    pub name: String,
    pub qty: u32,
    pub price: f64,
    pub subtotal: f64,
}

/// One rendered timeline entry with a display-formatted timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub status: String,
    pub description: String,
    pub date: String,
}

/// Render-ready projection of a tracked order: status with its display
/// color, itemized lines, running total, and the chronological timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub status: String,

    /// Hex color for the status (fixed table; unknown statuses render black)
    pub status_color: &'static str,

    pub lines: Vec<OrderViewLine>,
    pub total: f64,
    pub customer_name: String,
    pub phone: String,
    pub order_number: String,
    pub payment_method: String,
    pub payment_status: String,

    /// Timeline entries in server-provided order
    pub timeline: Vec<TimelineView>,
}
