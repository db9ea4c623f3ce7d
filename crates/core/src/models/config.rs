use serde::{Deserialize, Serialize};

use super::order::PaymentMethod;

/// Default backend origin, path-prefixed `/api`.
pub const DEFAULT_API_BASE: &str = "https://paperbloomback.onrender.com/api";

/// Store-level configuration. Payment numbers and the instruction template
/// are presentation content, not business rules — they live here so a
/// deployment can change them without touching checkout logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Remote API base URL (no trailing slash)
    pub api_base: String,

    /// Mobile-money number for MPESA deposits
    pub mpesa_number: String,

    /// Mobile-money number for ECOCASH deposits
    pub ecocash_number: String,

    /// Currency prefix used in generated payment instructions (e.g., "M")
    pub currency_prefix: String,

    /// Page path reported with analytics events
    pub page_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            mpesa_number: "+26657932975".to_string(),
            ecocash_number: "+26662806972".to_string(),
            currency_prefix: "M".to_string(),
            page_path: "/".to_string(),
        }
    }
}

impl StoreConfig {
    /// The deposit destination number for a given payment method.
    #[must_use]
    pub fn payment_number(&self, method: PaymentMethod) -> &str {
        match method {
            PaymentMethod::Mpesa => &self.mpesa_number,
            PaymentMethod::Ecocash => &self.ecocash_number,
        }
    }
}
