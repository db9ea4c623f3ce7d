use crate::models::product::{CatalogFilter, Product, SortOrder};

/// The literal search text that reveals the admin-login affordance.
const ADMIN_KEYWORD: &str = "admin";

/// Filters, searches, and sorts the product collection.
///
/// Pure logic over an in-memory slice — the catalog itself is loaded by
/// the API layer.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Apply the current filter: category equality first (category "all"
    /// bypasses), then a case-insensitive substring match on the name,
    /// then the selected sort.
    #[must_use]
    pub fn filter(&self, products: &[Product], filter: &CatalogFilter) -> Vec<Product> {
        let search = filter.search.to_lowercase();

        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|p| filter.category == "all" || p.category == filter.category)
            .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
            .cloned()
            .collect();

        match filter.sort {
            SortOrder::None => {}
            SortOrder::PriceLowHigh => filtered.sort_by(|a, b| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortOrder::PriceHighLow => filtered.sort_by(|a, b| {
                b.price
                    .partial_cmp(&a.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortOrder::NameAz => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        filtered
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot gate hiding the admin login behind a search keyword.
///
/// Typing exactly "admin" into the search box fires the affordance once
/// per arming and must never reach the product filter. Closing the admin
/// panel re-arms the gate. This is a deliberate Easter egg, not a
/// security boundary — the real gate is `POST /admin/login`.
#[derive(Debug, Default)]
pub struct AdminGate {
    triggered: bool,
}

impl AdminGate {
    pub fn new() -> Self {
        Self { triggered: false }
    }

    /// Whether `query` is the admin keyword (case-insensitive, trimmed).
    #[must_use]
    pub fn matches(query: &str) -> bool {
        query.trim().to_lowercase() == ADMIN_KEYWORD
    }

    /// Fire the gate if `query` matches and the gate is armed.
    /// Returns `true` exactly once per arming.
    pub fn try_trigger(&mut self, query: &str) -> bool {
        if Self::matches(query) && !self.triggered {
            self.triggered = true;
            return true;
        }
        false
    }

    /// Re-arm the gate (called when the admin panel closes).
    pub fn rearm(&mut self) {
        self.triggered = false;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        !self.triggered
    }
}
