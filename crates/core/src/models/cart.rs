use serde::{Deserialize, Serialize};

/// One product entry in the cart with an aggregated quantity.
///
/// **Important**: the price stored here is display-only. Checkout sends
/// only `(id, qty)` to the server, which re-prices the order itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier (server-assigned, opaque string)
    pub id: String,

    /// Product display name, captured at add time
    pub name: String,

    /// Unit price captured at add time (always >= 0)
    pub price: f64,

    /// Aggregated quantity (always >= 1 — a line that would reach 0 is removed)
    pub qty: u32,
}

impl CartLineItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            qty: 1,
        }
    }

    /// Line subtotal: unit price × quantity.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// The shopper's cart: an ordered sequence of line items.
///
/// Insertion order is add order and is preserved across persistence.
/// At most one line item exists per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines (the cart badge count).
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Grand total: Σ price × qty. Non-negative by construction.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}
