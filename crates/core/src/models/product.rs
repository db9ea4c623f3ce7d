use serde::{Deserialize, Serialize};

/// A catalog product. The remote catalog is the source of truth; a fixed
/// sample set is substituted wholesale when it is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Normalized identifier (see [`RawProduct::normalize`])
    pub id: String,

    /// Display name (search matches against this, case-insensitively)
    pub name: String,

    /// Unit price in the store currency
    pub price: f64,

    /// Category label (e.g., "Bouquet", "Single Flower", "Set")
    pub category: String,

    /// Optional marketing description
    #[serde(default)]
    pub description: Option<String>,

    /// Image URL
    pub image: String,
}

/// Product as it arrives on the wire. The backend historically served
/// Mongo-style `_id`; newer responses carry `id`. `_id` wins when both
/// are present.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    #[serde(rename = "_id")]
    pub mongo_id: Option<String>,
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
}

impl RawProduct {
    /// Normalize the identifier field. An empty `_id` falls through to
    /// `id`; products with no non-empty id form are unusable and dropped
    /// by the caller.
    pub fn normalize(self) -> Option<Product> {
        let id = self
            .mongo_id
            .filter(|id| !id.is_empty())
            .or(self.id)
            .filter(|id| !id.is_empty())?;
        Some(Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
            image: self.image,
        })
    }
}

/// Sort orders offered by the catalog controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// No explicit sort — server/catalog order
    #[default]
    None,
    /// Cheapest first
    PriceLowHigh,
    /// Most expensive first
    PriceHighLow,
    /// Alphabetical by product name
    NameAz,
}

/// Current catalog view state: category, free-text search, sort.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Category equality filter; "all" bypasses the filter entirely
    pub category: String,

    /// Free-text search, matched case-insensitively against product names
    pub search: String,

    pub sort: SortOrder,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self {
            category: "all".to_string(),
            search: String::new(),
            sort: SortOrder::None,
        }
    }
}

/// The fallback catalog: shown wholesale (never merged) when the remote
/// catalog cannot be fetched, so the storefront always has something to sell.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Rose Bouquet".to_string(),
            price: 29.99,
            category: "Bouquet".to_string(),
            description: Some("Beautiful handmade paper roses".to_string()),
            image: "https://images.unsplash.com/photo-1519378058457-4c29a0a2efac?w=400&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Sunflower Single".to_string(),
            price: 12.99,
            category: "Single Flower".to_string(),
            description: Some("Vibrant paper sunflower".to_string()),
            image: "https://images.unsplash.com/photo-1560703650-ef3e0f254ae0?w-400&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Mixed Flower Set".to_string(),
            price: 49.99,
            category: "Set".to_string(),
            description: Some("Assorted paper flowers set".to_string()),
            image: "https://images.unsplash.com/photo-1568259547666-6d3337325a1c?w-400&auto=format&fit=crop".to_string(),
        },
    ]
}
