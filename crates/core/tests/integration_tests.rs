// ═══════════════════════════════════════════════════════════════════
// Integration Tests — full storefront flows over a mock backend
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use paper_bloom_core::api::traits::StoreApi;
use paper_bloom_core::errors::StoreError;
use paper_bloom_core::models::analytics::AnalyticsEvent;
use paper_bloom_core::models::config::StoreConfig;
use paper_bloom_core::models::order::{
    AdminToken, OrderRequest, PaymentMethod, RawOrderResponse, TrackedOrder,
};
use paper_bloom_core::models::product::{sample_catalog, Product};
use paper_bloom_core::storage::cart_store::CartStore;
use paper_bloom_core::Storefront;

/// Backend double that records the requests it receives, so tests can
/// assert on the exact payloads the storefront sends. Handed to the
/// storefront behind an `Arc` so the test keeps a handle to the records.
struct RecordingApi {
    products: Result<Vec<Product>, String>,
    order_response: RawOrderResponse,
    requests: Mutex<Vec<OrderRequest>>,
    events: Mutex<Vec<String>>,
}

impl RecordingApi {
    fn new() -> Self {
        Self {
            products: Ok(sample_catalog()),
            order_response: RawOrderResponse {
                order_id: Some("PB-2001".to_string()),
                total: Some(72.97),
                deposit: Some(18.24),
                ..RawOrderResponse::default()
            },
            requests: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StoreApi for RecordingApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        self.products.clone().map_err(StoreError::Network)
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<RawOrderResponse, StoreError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.order_response.clone())
    }

    async fn track_order(
        &self,
        _order_number: &str,
        _phone: &str,
    ) -> Result<TrackedOrder, StoreError> {
        Err(StoreError::Api {
            endpoint: "GET /orders/track".into(),
            message: "Order not found or invalid details".into(),
        })
    }

    async fn admin_login(&self, _username: &str, _password: &str) -> Result<AdminToken, StoreError> {
        Ok(AdminToken { token: "t".into() })
    }

    async fn track_event(&self, event: &AnalyticsEvent, _path: &str) -> Result<(), StoreError> {
        self.events.lock().unwrap().push(event.kind().to_string());
        Ok(())
    }
}

/// Local wrapper so a shared `Arc<RecordingApi>` can be boxed into the
/// storefront while the test keeps its own handle for assertions.
struct SharedApi(Arc<RecordingApi>);

#[async_trait]
impl StoreApi for SharedApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        self.0.fetch_products().await
    }
    async fn submit_order(&self, request: &OrderRequest) -> Result<RawOrderResponse, StoreError> {
        self.0.submit_order(request).await
    }
    async fn track_order(
        &self,
        order_number: &str,
        phone: &str,
    ) -> Result<TrackedOrder, StoreError> {
        self.0.track_order(order_number, phone).await
    }
    async fn admin_login(&self, username: &str, password: &str) -> Result<AdminToken, StoreError> {
        self.0.admin_login(username, password).await
    }
    async fn track_event(&self, event: &AnalyticsEvent, path: &str) -> Result<(), StoreError> {
        self.0.track_event(event, path).await
    }
}

fn storefront_over(api: Arc<RecordingApi>, dir: &tempfile::TempDir) -> Storefront {
    Storefront::new(
        StoreConfig::default(),
        Box::new(SharedApi(api)),
        CartStore::in_dir(dir.path()),
    )
}

// ═══════════════════════════════════════════════════════════════════
// Browse → add → checkout → dismiss
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn full_shopping_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut storefront = storefront_over(Arc::new(RecordingApi::new()), &dir);

    // Browse the catalog.
    storefront.load_products().await;
    assert_eq!(storefront.visible_products().len(), 3);

    // Put two bouquets and one sunflower in the cart.
    storefront.add_to_cart("1", "Rose Bouquet", 29.99).await.unwrap();
    storefront.add_to_cart("1", "Rose Bouquet", 29.99).await.unwrap();
    storefront.add_to_cart("2", "Sunflower Single", 12.99).await.unwrap();
    assert_eq!(storefront.cart_unit_count(), 3);
    assert_eq!(storefront.cart_breakdown().total, "72.97");

    // Check out.
    let confirmation = storefront
        .checkout("Palesa Mokoena", "+26655123456", PaymentMethod::Ecocash)
        .await
        .unwrap();
    assert_eq!(confirmation.order_id, "PB-2001");
    assert_eq!(confirmation.total, 72.97);
    assert_eq!(confirmation.deposit, 18.24);
    assert_eq!(confirmation.payment_number, "+26662806972");

    // The cart survives until the confirmation is dismissed, then both
    // the in-memory cart and the snapshot are gone.
    assert_eq!(storefront.cart_unit_count(), 3);
    storefront.dismiss_confirmation().unwrap();
    assert!(storefront.cart().is_empty());
    assert!(CartStore::in_dir(dir.path()).load().is_empty());
}

#[tokio::test]
async fn checkout_payload_carries_ids_and_qtys_only() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(RecordingApi::new());
    let mut storefront = storefront_over(Arc::clone(&api), &dir);

    storefront.add_to_cart("1", "Rose Bouquet", 29.99).await.unwrap();
    storefront.add_to_cart("1", "Rose Bouquet", 29.99).await.unwrap();
    storefront.add_to_cart("3", "Mixed Flower Set", 49.99).await.unwrap();

    storefront
        .checkout("  Palesa  ", " +26655123456 ", PaymentMethod::Mpesa)
        .await
        .unwrap();

    let requests = api.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.customer_name, "Palesa");
    assert_eq!(request.phone, "+26655123456");
    assert_eq!(request.payment_method, PaymentMethod::Mpesa);
    assert_eq!(request.items.len(), 2);
    assert_eq!(request.items[0].product_id, "1");
    assert_eq!(request.items[0].qty, 2);
    assert_eq!(request.items[1].product_id, "3");
    assert_eq!(request.items[1].qty, 1);

    // Prices and names never leave the client; the server re-prices.
    let wire = serde_json::to_value(request).unwrap();
    assert!(wire["items"][0].get("price").is_none());
    assert!(wire["items"][0].get("name").is_none());
}

#[tokio::test]
async fn analytics_trail_of_a_shopping_session() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(RecordingApi::new());
    let mut storefront = storefront_over(Arc::clone(&api), &dir);

    storefront.record_page_view().await;
    storefront.record_product_view("1").await;
    storefront.add_to_cart("1", "Rose Bouquet", 29.99).await.unwrap();
    storefront
        .checkout("Palesa", "+26655123456", PaymentMethod::Mpesa)
        .await
        .unwrap();

    let events = api.events.lock().unwrap();
    assert_eq!(
        events.as_slice(),
        ["page_view", "product_view", "add_to_cart", "order_placed"]
    );
}

// ═══════════════════════════════════════════════════════════════════
// Catalog fallback & persistence across restarts
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn offline_catalog_is_exactly_the_sample_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = RecordingApi::new();
    api.products = Err("backend asleep".to_string());
    let mut storefront = storefront_over(Arc::new(api), &dir);

    storefront.load_products().await;

    let products = storefront.products();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, "Rose Bouquet");
    assert_eq!(products[1].name, "Sunflower Single");
    assert_eq!(products[2].name, "Mixed Flower Set");
    assert_eq!(products, sample_catalog().as_slice());
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut storefront = storefront_over(Arc::new(RecordingApi::new()), &dir);
        storefront.add_to_cart("3", "Mixed Flower Set", 49.99).await.unwrap();
        storefront.add_to_cart("3", "Mixed Flower Set", 49.99).await.unwrap();
    } // dropped — simulates closing the app

    let storefront = storefront_over(Arc::new(RecordingApi::new()), &dir);
    assert_eq!(storefront.cart_unit_count(), 2);
    assert_eq!(storefront.cart_breakdown().total, "99.98");
}

// ═══════════════════════════════════════════════════════════════════
// Admin keyword end to end
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn admin_keyword_cycle_leaves_shopping_state_alone() {
    let dir = tempfile::tempdir().unwrap();
    let mut storefront = storefront_over(Arc::new(RecordingApi::new()), &dir);
    storefront.load_products().await;
    storefront.add_to_cart("1", "Rose Bouquet", 29.99).await.unwrap();

    let grid_before = storefront.visible_products();

    storefront.update_search("admin");
    assert_eq!(storefront.visible_products(), grid_before);
    assert_eq!(storefront.cart_unit_count(), 1);

    storefront.close_admin_login();
    assert_eq!(storefront.visible_products(), grid_before);

    let token = storefront.admin_login("admin", "secret").await.unwrap();
    assert_eq!(token.token, "t");
}
