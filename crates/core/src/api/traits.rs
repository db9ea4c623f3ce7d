use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::analytics::AnalyticsEvent;
use crate::models::order::{AdminToken, OrderRequest, RawOrderResponse, TrackedOrder};
use crate::models::product::Product;

/// Trait abstraction over the remote store backend.
///
/// The storefront only ever talks to this trait; the reqwest-backed
/// [`HttpStoreApi`](super::http::HttpStoreApi) is the production
/// implementation, and tests substitute mocks for every failure path.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET /products` — the full catalog, identifiers normalized.
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError>;

    /// `POST /orders` — submit an order. Non-success responses surface
    /// the server's `message` field when it can be parsed.
    async fn submit_order(&self, request: &OrderRequest) -> Result<RawOrderResponse, StoreError>;

    /// `GET /orders/track` — look up an order by number + phone.
    async fn track_order(&self, order_number: &str, phone: &str)
        -> Result<TrackedOrder, StoreError>;

    /// `POST /admin/login` — exchange credentials for a token.
    async fn admin_login(&self, username: &str, password: &str)
        -> Result<AdminToken, StoreError>;

    /// `POST /analytics/track` — best-effort usage event. Callers treat
    /// any error as log-and-drop; implementations must not retry.
    async fn track_event(&self, event: &AnalyticsEvent, path: &str) -> Result<(), StoreError>;
}
