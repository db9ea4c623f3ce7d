pub mod api;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use api::http::HttpStoreApi;
use api::traits::StoreApi;
use models::{
    analytics::AnalyticsEvent,
    cart::Cart,
    config::StoreConfig,
    order::{AdminToken, OrderConfirmation, OrderView, PaymentBreakdown, PaymentMethod},
    product::{self, CatalogFilter, Product, SortOrder},
};
use services::{
    cart_service::CartService,
    catalog_service::{AdminGate, CatalogService},
    checkout_service::CheckoutService,
    pricing_service::PricingService,
    tracking_service::TrackingService,
};
use std::path::Path;
use storage::cart_store::CartStore;

use errors::StoreError;

/// Outcome of a search-box update, telling the caller what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// The filter changed — re-render the product grid.
    Refresh,
    /// The admin keyword fired — reveal the admin login, grid untouched.
    AdminLoginRequested,
    /// The admin keyword while the gate is spent — do nothing at all.
    Ignored,
}

/// Main entry point for the Paper Bloom storefront core.
///
/// Owns all client state: the cart, the loaded catalog, the current
/// filter, and the admin gate. UI layers call in through this facade and
/// render whatever it returns.
#[must_use]
pub struct Storefront {
    config: StoreConfig,
    cart: Cart,
    products: Vec<Product>,
    filter: CatalogFilter,
    admin_gate: AdminGate,
    api: Box<dyn StoreApi>,
    store: CartStore,
    cart_service: CartService,
    pricing_service: PricingService,
    catalog_service: CatalogService,
    checkout_service: CheckoutService,
    tracking_service: TrackingService,
    /// Guard against duplicate order submissions: a second checkout is
    /// rejected while one is pending.
    checkout_in_flight: bool,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("cart_lines", &self.cart.len())
            .field("products", &self.products.len())
            .field("filter", &self.filter)
            .field("checkout_in_flight", &self.checkout_in_flight)
            .finish()
    }
}

impl Storefront {
    /// Build a storefront from explicit parts. The cart is hydrated once
    /// from the snapshot store (absent/corrupt snapshot → empty cart).
    pub fn new(config: StoreConfig, api: Box<dyn StoreApi>, store: CartStore) -> Self {
        let cart = store.load();
        Self {
            config,
            cart,
            products: Vec::new(),
            filter: CatalogFilter::new(),
            admin_gate: AdminGate::new(),
            api,
            store,
            cart_service: CartService::new(),
            pricing_service: PricingService::new(),
            catalog_service: CatalogService::new(),
            checkout_service: CheckoutService::new(),
            tracking_service: TrackingService::new(),
            checkout_in_flight: false,
        }
    }

    /// Default production wiring: HTTP client against the live backend,
    /// cart snapshot stored under `data_dir`.
    pub fn with_defaults(data_dir: impl AsRef<Path>) -> Self {
        Self::new(
            StoreConfig::default(),
            Box::new(HttpStoreApi::new()),
            CartStore::in_dir(data_dir),
        )
    }

    // ── Cart ────────────────────────────────────────────────────────

    /// Add one unit of a product to the cart, persist the snapshot, then
    /// emit a best-effort add-to-cart analytics event.
    pub async fn add_to_cart(
        &mut self,
        id: &str,
        name: &str,
        price: f64,
    ) -> Result<(), StoreError> {
        self.cart_service.add(&mut self.cart, id, name, price);
        self.persist()?;
        self.record_event(AnalyticsEvent::AddToCart {
            product_id: id.to_string(),
        })
        .await;
        Ok(())
    }

    /// Adjust a line's quantity by `delta`. Unknown ids are a no-op (and
    /// skip the snapshot write). A quantity reaching zero removes the line.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> Result<(), StoreError> {
        if self.cart.find(id).is_none() {
            return Ok(());
        }
        self.cart_service.change_qty(&mut self.cart, id, delta);
        self.persist()
    }

    /// Remove a line by id. Persists unconditionally — an absent id still
    /// rewrites the (unchanged) snapshot.
    pub fn remove_item(&mut self, id: &str) -> Result<(), StoreError> {
        self.cart_service.remove(&mut self.cart, id);
        self.persist()
    }

    /// Current cart contents.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total units across all lines (the cart badge).
    #[must_use]
    pub fn cart_unit_count(&self) -> u32 {
        self.cart.unit_count()
    }

    /// Total / deposit / balance for the current cart, display-rounded.
    #[must_use]
    pub fn cart_breakdown(&self) -> PaymentBreakdown {
        self.pricing_service.cart_breakdown(&self.cart)
    }

    // ── Catalog ─────────────────────────────────────────────────────

    /// Load the catalog from the remote API. Any failure substitutes the
    /// fixed sample catalog wholesale; no error escapes here.
    pub async fn load_products(&mut self) {
        match self.api.fetch_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog loaded");
                self.products = products;
            }
            Err(e) => {
                tracing::error!(error = %e, "catalog load failed, using sample products");
                self.products = product::sample_catalog();
            }
        }
    }

    /// The full loaded catalog, unfiltered.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The catalog as currently filtered, searched, and sorted.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        self.catalog_service.filter(&self.products, &self.filter)
    }

    /// Set the category filter ("all" shows everything).
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.filter.sort = sort;
    }

    /// Update the search text.
    ///
    /// The literal admin keyword never becomes part of the filter: the
    /// first occurrence per arming fires the admin-login affordance and
    /// clears the search; later occurrences are ignored outright. Either
    /// way the visible product list is left exactly as it was.
    pub fn update_search(&mut self, text: &str) -> SearchAction {
        if AdminGate::matches(text) {
            if self.admin_gate.try_trigger(text) {
                self.filter.search.clear();
                return SearchAction::AdminLoginRequested;
            }
            return SearchAction::Ignored;
        }
        self.filter.search = text.to_string();
        SearchAction::Refresh
    }

    /// Close the admin panel and re-arm the search keyword gate.
    pub fn close_admin_login(&mut self) {
        self.admin_gate.rearm();
    }

    /// Whether the admin keyword would currently fire.
    #[must_use]
    pub fn admin_gate_armed(&self) -> bool {
        self.admin_gate.is_armed()
    }

    // ── Checkout ────────────────────────────────────────────────────

    /// Submit the cart as an order.
    ///
    /// Rejected locally (no network call) when a checkout is already in
    /// flight, the cart is empty, or name/phone are blank after trimming.
    /// On any failure the cart — in memory and on disk — is untouched, so
    /// the shopper can retry. On success an order-placed analytics event
    /// fires once, best-effort, and the confirmation is returned; the cart
    /// is still NOT cleared until [`dismiss_confirmation`](Self::dismiss_confirmation).
    pub async fn checkout(
        &mut self,
        customer_name: &str,
        phone: &str,
        method: PaymentMethod,
    ) -> Result<OrderConfirmation, StoreError> {
        if self.checkout_in_flight {
            return Err(StoreError::CheckoutInFlight);
        }
        self.checkout_service
            .validate(&self.cart, customer_name, phone)?;

        let request = self
            .checkout_service
            .build_request(&self.cart, customer_name, phone, method);

        self.checkout_in_flight = true;
        let response = self.api.submit_order(&request).await;
        self.checkout_in_flight = false;

        let confirmation = self
            .checkout_service
            .confirm(response?, method, &self.config)?;

        self.record_event(AnalyticsEvent::OrderPlaced {
            order_id: confirmation.order_id.clone(),
        })
        .await;

        Ok(confirmation)
    }

    /// The shopper has dismissed the confirmation view: clear the cart
    /// from memory and remove the stored snapshot. This is the only path
    /// that empties the cart after an order, so payment details stay
    /// copyable until the shopper is done with them.
    pub fn dismiss_confirmation(&mut self) -> Result<(), StoreError> {
        self.cart = Cart::new();
        self.store.clear()
    }

    // ── Order tracking ──────────────────────────────────────────────

    /// Look up an order by number + phone and build its render-ready view.
    /// Both fields are required (trimmed) before any request is issued.
    pub async fn track_order(
        &self,
        order_number: &str,
        phone: &str,
    ) -> Result<OrderView, StoreError> {
        self.tracking_service.validate(order_number, phone)?;
        let order = self
            .api
            .track_order(order_number.trim(), phone.trim())
            .await?;
        Ok(self.tracking_service.build_view(order))
    }

    // ── Admin ───────────────────────────────────────────────────────

    /// Exchange admin credentials for a token. The admin surface itself
    /// lives outside this library.
    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminToken, StoreError> {
        self.api.admin_login(username, password).await
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Record a page view, best-effort.
    pub async fn record_page_view(&self) {
        self.record_event(AnalyticsEvent::PageView).await;
    }

    /// Record a product view (image opened), best-effort.
    pub async fn record_product_view(&self, product_id: &str) {
        self.record_event(AnalyticsEvent::ProductView {
            product_id: product_id.to_string(),
        })
        .await;
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.cart)
    }

    /// Send an analytics event, logging and swallowing any failure —
    /// at-most-once, best-effort delivery.
    async fn record_event(&self, event: AnalyticsEvent) {
        if let Err(e) = self.api.track_event(&event, &self.config.page_path).await {
            tracing::warn!(kind = event.kind(), error = %e, "analytics tracking failed");
        }
    }
}
