use serde::Serialize;

/// Best-effort usage events (`POST /analytics/track`).
///
/// Delivery contract is at-most-once: every send is awaited, failures are
/// logged and never propagated to the caller. Losing an event is fine;
/// blocking a shopper on one is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView,
    #[serde(rename_all = "camelCase")]
    ProductView { product_id: String },
    #[serde(rename_all = "camelCase")]
    AddToCart { product_id: String },
    #[serde(rename_all = "camelCase")]
    OrderPlaced { order_id: String },
}

impl AnalyticsEvent {
    /// Event tag as it appears on the wire (for logs).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView => "page_view",
            AnalyticsEvent::ProductView { .. } => "product_view",
            AnalyticsEvent::AddToCart { .. } => "add_to_cart",
            AnalyticsEvent::OrderPlaced { .. } => "order_placed",
        }
    }
}

/// Wire envelope: the event payload plus the page path it occurred on.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEnvelope<'a> {
    #[serde(flatten)]
    pub event: &'a AnalyticsEvent,
    pub path: &'a str,
}
