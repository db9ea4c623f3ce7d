use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::StoreError;
use crate::models::analytics::{AnalyticsEnvelope, AnalyticsEvent};
use crate::models::config::DEFAULT_API_BASE;
use crate::models::order::{AdminToken, OrderRequest, RawOrderResponse, TrackedOrder};
use crate::models::product::{Product, RawProduct};

use super::traits::StoreApi;

/// reqwest-backed client for the Paper Bloom backend.
///
/// All endpoints live under one base URL, path-prefixed `/api`. Requests
/// carry JSON bodies and a 30s timeout; there is no retry layer — the
/// storefront surfaces failures and lets the shopper retry manually.
pub struct HttpStoreApi {
    client: Client,
    base_url: String,
}

impl HttpStoreApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    /// Extract the server's error `message` from a non-success response,
    /// falling back to `fallback(status)` when the body isn't parseable.
    async fn server_message(
        endpoint: &str,
        response: Response,
        fallback: impl FnOnce(StatusCode) -> String,
    ) -> StoreError {
        let status = response.status();
        let message = match response.json::<ServerMessage>().await {
            Ok(ServerMessage {
                message: Some(message),
            }) if !message.is_empty() => message,
            _ => fallback(status),
        };
        StoreError::Api {
            endpoint: endpoint.to_string(),
            message,
        }
    }
}

impl Default for HttpStoreApi {
    fn default() -> Self {
        Self::new()
    }
}

// ── Wire helper types ───────────────────────────────────────────────

#[derive(Deserialize)]
struct ServerMessage {
    message: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        let url = format!("{}/products", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Api {
                endpoint: "GET /products".to_string(),
                message: format!("HTTP error! status: {}", response.status().as_u16()),
            });
        }

        let raw: Vec<RawProduct> = response.json().await.map_err(|e| StoreError::Api {
            endpoint: "GET /products".to_string(),
            message: format!("Failed to parse product list: {e}"),
        })?;

        // Drop entries carrying neither `_id` nor `id` — they can't be
        // added to a cart or ordered.
        Ok(raw.into_iter().filter_map(RawProduct::normalize).collect())
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<RawOrderResponse, StoreError> {
        let url = format!("{}/orders", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(Self::server_message("POST /orders", response, |status| {
                format!("Order creation failed ({})", status.as_u16())
            })
            .await);
        }

        response.json().await.map_err(|e| StoreError::Api {
            endpoint: "POST /orders".to_string(),
            message: format!("Failed to parse order response: {e}"),
        })
    }

    async fn track_order(
        &self,
        order_number: &str,
        phone: &str,
    ) -> Result<TrackedOrder, StoreError> {
        let url = format!("{}/orders/track", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("orderNumber", order_number), ("phone", phone)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::server_message(
                "GET /orders/track",
                response,
                |_| "Order not found or invalid details".to_string(),
            )
            .await);
        }

        response.json().await.map_err(|e| StoreError::Api {
            endpoint: "GET /orders/track".to_string(),
            message: format!("Failed to parse tracked order: {e}"),
        })
    }

    async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminToken, StoreError> {
        let url = format!("{}/admin/login", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.is_empty() {
                "Please check your credentials.".to_string()
            } else {
                body
            };
            return Err(StoreError::Api {
                endpoint: "POST /admin/login".to_string(),
                message: format!("Login failed ({}): {detail}", status.as_u16()),
            });
        }

        response.json().await.map_err(|e| StoreError::Api {
            endpoint: "POST /admin/login".to_string(),
            message: format!("Failed to parse login response: {e}"),
        })
    }

    async fn track_event(&self, event: &AnalyticsEvent, path: &str) -> Result<(), StoreError> {
        let url = format!("{}/analytics/track", self.base_url);

        // Response status is deliberately ignored: analytics delivery is
        // at-most-once and the storefront never waits on its outcome
        // beyond the request itself.
        self.client
            .post(&url)
            .json(&AnalyticsEnvelope { event, path })
            .send()
            .await?;

        Ok(())
    }
}
