use async_trait::async_trait;
use serde::Deserialize;
use titrage_geocode::{AddressQuery, Coordinates, GeocodeError, Geocoder, ProviderMetadata};

/// Default endpoint of the French national address base search service
pub const BAN_ENDPOINT: &str = "https://api-adresse.data.gouv.fr/search/";

/// Geocoder backed by the Base Adresse Nationale
#[derive(Clone)]
pub struct BanGeocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl BanGeocoder {
    pub fn new() -> Self {
        Self::with_endpoint(BAN_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// One raw search call. `postcode` narrows results server-side when the
    /// caller has one.
    pub async fn search(
        &self,
        q: &str,
        postcode: Option<&str>,
    ) -> Result<FeatureCollection, GeocodeError> {
        let mut params = vec![("q", q)];
        if let Some(postcode) = postcode {
            params.push(("postcode", postcode));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json::<FeatureCollection>()
            .await
            .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))
    }
}

impl Default for BanGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for BanGeocoder {
    async fn lookup(&self, query: &AddressQuery) -> Result<Vec<Coordinates>, GeocodeError> {
        let q = query.as_query_string();
        tracing::debug!(query = %q, "BAN lookup");

        let collection = self.search(&q, None).await?;
        Ok(map_features(&collection))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "BAN".to_string(),
            endpoint: self.endpoint.clone(),
            requires_api_key: false,
        }
    }
}

/// Flatten a feature collection, dropping features without a usable
/// coordinate pair
pub fn map_features(collection: &FeatureCollection) -> Vec<Coordinates> {
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let mapped = map_feature(feature);
            if mapped.is_none() {
                tracing::warn!(label = %feature.properties.label, "feature without coordinates");
            }
            mapped
        })
        .collect()
}

// GeoJSON: coordinates come as [longitude, latitude]
fn map_feature(feature: &Feature) -> Option<Coordinates> {
    let longitude = *feature.geometry.coordinates.first()?;
    let latitude = *feature.geometry.coordinates.get(1)?;

    Some(Coordinates {
        latitude,
        longitude,
        address: feature.properties.name.clone(),
        zip: feature.properties.postcode.clone(),
        city: feature.properties.city.clone(),
        full_address: feature.properties.label.clone(),
    })
}

// Wire structures for the BAN's GeoJSON-like feature collection

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "geometry": { "type": "Point", "coordinates": [2.290084, 49.897443] },
                "properties": {
                    "name": "8 Boulevard du Port",
                    "postcode": "80000",
                    "city": "Amiens",
                    "label": "8 Boulevard du Port 80000 Amiens"
                }
            },
            {
                "geometry": { "type": "Point", "coordinates": [] },
                "properties": {
                    "name": "broken",
                    "postcode": "",
                    "city": "",
                    "label": "feature without geometry"
                }
            }
        ]
    }"#;

    #[test]
    fn maps_features_to_flat_records() {
        let collection: FeatureCollection = serde_json::from_str(FIXTURE).unwrap();
        let results = map_features(&collection);

        assert_eq!(results.len(), 1);
        let hit = &results[0];
        assert_eq!(hit.latitude, 49.897443);
        assert_eq!(hit.longitude, 2.290084);
        assert_eq!(hit.address, "8 Boulevard du Port");
        assert_eq!(hit.zip, "80000");
        assert_eq!(hit.city, "Amiens");
        assert_eq!(hit.full_address, "8 Boulevard du Port 80000 Amiens");
    }

    #[test]
    fn zero_features_map_to_an_empty_vec() {
        let collection: FeatureCollection =
            serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(map_features(&collection).is_empty());
    }

    #[test]
    fn missing_features_key_is_tolerated() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(map_features(&collection).is_empty());
    }

    #[test]
    fn metadata_names_the_provider() {
        let meta = BanGeocoder::new().metadata();
        assert_eq!(meta.name, "BAN");
        assert!(!meta.requires_api_key);
    }
}
