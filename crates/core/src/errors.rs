use thiserror::Error;

/// Unified error type for the entire paper-bloom-core library.
/// Every fallible public function returns `Result<T, StoreError>`.
#[derive(Debug, Error)]
pub enum StoreError {
    // ── Local validation (blocked before any network call) ──────────
    #[error("{0}")]
    Validation(String),

    #[error("An order is already being submitted")]
    CheckoutInFlight,

    // ── API / Network ───────────────────────────────────────────────
    #[error("{message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No order ID returned from server")]
    MissingOrderId,

    // ── Serialization / Storage ─────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // order numbers and phone numbers never end up in logs or toasts.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        StoreError::Network(sanitized)
    }
}
