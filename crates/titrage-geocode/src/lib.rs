use serde::{Deserialize, Serialize};

/// Geocoding provider interface
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve an address query to geographic coordinates.
    ///
    /// Returns an empty vec when the provider finds nothing.
    async fn lookup(&self, query: &AddressQuery) -> Result<Vec<Coordinates>, GeocodeError>;

    /// Resolve a query to its best match, `None` when nothing is found
    async fn lookup_first(
        &self,
        query: &AddressQuery,
    ) -> Result<Option<Coordinates>, GeocodeError> {
        let mut results = self.lookup(query).await?;
        if results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(results.remove(0)))
        }
    }

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Free-text or structured address query
#[derive(Debug, Clone)]
pub enum AddressQuery {
    FullText(String),
    Parts {
        address: Option<String>,
        zip: Option<String>,
        city: Option<String>,
    },
}

impl AddressQuery {
    /// Query string sent to the provider: parts concatenated in
    /// address/zip/city order, empty parts skipped, whole thing trimmed.
    pub fn as_query_string(&self) -> String {
        match self {
            AddressQuery::FullText(text) => text.trim().to_string(),
            AddressQuery::Parts { address, zip, city } => {
                let mut q = String::new();
                for part in [address, zip, city].into_iter().flatten() {
                    if !part.is_empty() {
                        q.push_str(part);
                        q.push(' ');
                    }
                }
                q.trim().to_string()
            }
        }
    }

    /// Postal code hint for providers that accept one as a separate filter
    pub fn postcode(&self) -> Option<&str> {
        match self {
            AddressQuery::FullText(_) => None,
            AddressQuery::Parts { zip, .. } => zip.as_deref().filter(|z| !z.is_empty()),
        }
    }
}

/// One geocoded match, flattened from the provider's feature shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub zip: String,
    pub city: String,
    pub full_address: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
