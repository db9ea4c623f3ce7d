use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::models::cart::Cart;

/// File name of the cart snapshot when the store is created from a
/// directory — the single fixed key the cart lives under.
pub const CART_STORE_FILE: &str = "cart.json";

/// Durable snapshot of the cart, written after every mutation and read
/// once at startup.
///
/// There is exactly one writer (the running storefront), so no locking is
/// needed. An absent or corrupt snapshot hydrates as an empty cart rather
/// than an error.
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Bind the store to an explicit snapshot file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Bind the store to `cart.json` inside a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CART_STORE_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the cart and write the snapshot.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let json = serde_json::to_string(cart)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize cart: {e}")))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Hydrate the cart from the snapshot.
    ///
    /// Absent file → empty cart. Unparsable contents → empty cart with a
    /// warning.
    #[must_use]
    pub fn load(&self) -> Cart {
        let Ok(json) = std::fs::read_to_string(&self.path) else {
            return Cart::new();
        };
        match serde_json::from_str(&json) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt cart snapshot");
                Cart::new()
            }
        }
    }

    /// Remove the snapshot (confirmed-order dismissal). A missing file is
    /// already the desired state.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
