use crate::config::GeoapifyConfig;
use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{Candidate, Category, GeoPoint};
use crate::services::places_provider::PlacesProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const GEOCODE_PATH: &str = "/v1/geocode/search";
const PLACES_PATH: &str = "/v2/places";

/// Client for the Geoapify geocoding and places APIs.
///
/// The API key is passed in explicitly; nothing is read from the
/// environment here.
#[derive(Clone)]
pub struct GeoapifyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeoapifyClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEOAPIFY_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        GeoapifyClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &GeoapifyConfig) -> Self {
        match config.base_url {
            Some(ref base_url) => Self::with_base_url(config.api_key.clone(), base_url.clone()),
            None => Self::new(config.api_key.clone()),
        }
    }

    /// Coordinates of the best geocoding match, `None` when nothing matched
    pub async fn find_coordinates(&self, query: &str) -> Result<Option<GeoPoint>> {
        tracing::debug!(query = %query, "Geoapify geocode request");

        let collection = self
            .get_features(GEOCODE_PATH, &[("text", query)], None)
            .await?;

        let location = collection.features.into_iter().next().and_then(|feature| {
            let props: PlaceProperties = serde_json::from_value(feature.properties).ok()?;
            GeoPoint::new(props.lat?, props.lon?).ok()
        });

        match location {
            Some(point) => tracing::debug!(query = %query, "Geocoded '{}' to {}", query, point),
            None => tracing::warn!(query = %query, "No geocoding result for '{}'", query),
        }

        Ok(location)
    }

    /// Places of one category inside a circle around `center`
    pub async fn fetch_places(
        &self,
        center: &GeoPoint,
        radius_m: u32,
        category: Category,
        limit: u32,
    ) -> Result<Vec<Candidate>> {
        let filter = format!("circle:{},{},{}", center.lon, center.lat, radius_m);
        let limit = limit.to_string();

        tracing::debug!(
            category = %category,
            radius_m = radius_m,
            "Geoapify places request: {} within {}m of {}",
            category.geoapify_code(),
            radius_m,
            center
        );

        let collection = self
            .get_features(
                PLACES_PATH,
                &[
                    ("categories", category.geoapify_code()),
                    ("filter", filter.as_str()),
                    ("limit", limit.as_str()),
                ],
                None,
            )
            .await?;

        let candidates: Vec<Candidate> = collection
            .features
            .into_iter()
            .enumerate()
            .filter_map(|(idx, feature)| feature_to_candidate(feature.properties, category, idx))
            .collect();

        tracing::debug!(
            category = %category,
            count = candidates.len(),
            "Geoapify returned {} {} places",
            candidates.len(),
            category
        );

        Ok(candidates)
    }

    /// Probe the geocoding endpoint to check that the API key is accepted
    pub async fn validate_api_key(&self) -> bool {
        if self.api_key.trim().is_empty() {
            tracing::warn!("No Geoapify API key configured");
            return false;
        }

        let timeout = Duration::from_secs(API_KEY_CHECK_TIMEOUT_SECONDS);
        match self
            .get_features(GEOCODE_PATH, &[("text", API_KEY_CHECK_QUERY)], Some(timeout))
            .await
        {
            Ok(_) => {
                tracing::info!("Geoapify API key is valid");
                true
            }
            Err(e) => {
                tracing::warn!("Geoapify API key validation failed: {}", e);
                false
            }
        }
    }

    async fn get_features(
        &self,
        path: &str,
        params: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<FeatureCollection> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())]);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::GeoapifyApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, path = %path, "Geoapify HTTP error {}: {}", status, error_text);
            return Err(AppError::GeoapifyApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::GeoapifyApi(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PlacesProvider for GeoapifyClient {
    async fn geocode(&self, query: &str) -> Option<GeoPoint> {
        self.find_coordinates(query).await.unwrap_or_else(|e| {
            tracing::warn!("Geocoding '{}' failed: {}", query, e);
            None
        })
    }

    async fn search_places(
        &self,
        center: &GeoPoint,
        radius_m: u32,
        category: Category,
        limit: u32,
    ) -> Vec<Candidate> {
        self.fetch_places(center, radius_m, category, limit)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Places lookup for {} failed: {}", category, e);
                Vec::new()
            })
    }

    async fn health_check(&self) -> bool {
        self.validate_api_key().await
    }

    fn provider_name(&self) -> &'static str {
        "geoapify"
    }
}

/// Build a candidate from a feature's `properties`. Features without usable
/// coordinates are dropped.
fn feature_to_candidate(
    properties: serde_json::Value,
    category: Category,
    index: usize,
) -> Option<Candidate> {
    let props: PlaceProperties = match serde_json::from_value(properties.clone()) {
        Ok(props) => props,
        Err(e) => {
            tracing::debug!("Skipping malformed {} feature {}: {}", category, index, e);
            return None;
        }
    };

    let location = match (props.lat, props.lon) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).ok()?,
        _ => {
            tracing::debug!("Skipping {} feature {} without coordinates", category, index);
            return None;
        }
    };

    let id = props
        .place_id
        .unwrap_or_else(|| format!("{}:{}", category, index));

    Some(Candidate::new(id, props.name, category, location).with_metadata(properties))
}

// Geoapify response types

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct PlaceProperties {
    lat: Option<f64>,
    lon: Option<f64>,
    name: Option<String>,
    place_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_defaults_to_public_api() {
        let client = GeoapifyClient::new("test-key".to_string());
        assert_eq!(client.base_url, GEOAPIFY_BASE_URL);
        assert_eq!(client.provider_name(), "geoapify");
    }

    #[test]
    fn test_from_config_applies_base_url_override() {
        let mut config = GeoapifyConfig {
            api_key: "test-key".to_string(),
            base_url: None,
        };
        assert_eq!(GeoapifyClient::from_config(&config).base_url, GEOAPIFY_BASE_URL);

        config.base_url = Some("http://127.0.0.1:4000/".to_string());
        let client = GeoapifyClient::from_config(&config);
        assert_eq!(client.base_url, "http://127.0.0.1:4000");
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = GeoapifyClient::with_base_url(
            "test-key".to_string(),
            "http://localhost:4000/".to_string(),
        );
        assert_eq!(client.base_url, "http://localhost:4000");
    }

    #[test]
    fn test_feature_to_candidate() {
        let properties = json!({
            "name": "Musée d'Orsay",
            "lat": 48.86,
            "lon": 2.3266,
            "place_id": "51abc",
            "categories": ["tourism.attraction", "entertainment.museum"]
        });

        let candidate = feature_to_candidate(properties, Category::Attraction, 0).unwrap();
        assert_eq!(candidate.id, "51abc");
        assert_eq!(candidate.display_name(), "Musée d'Orsay");
        assert_eq!(candidate.category, Category::Attraction);
        assert_eq!(candidate.location, GeoPoint::new(48.86, 2.3266).unwrap());
        assert_eq!(candidate.raw_metadata["categories"][1], "entertainment.museum");
    }

    #[test]
    fn test_feature_without_id_or_name() {
        let properties = json!({ "lat": 48.85, "lon": 2.35 });

        let candidate = feature_to_candidate(properties, Category::Natural, 7).unwrap();
        assert_eq!(candidate.id, "natural:7");
        assert!(candidate.name.is_none());
    }

    #[test]
    fn test_feature_without_coordinates_is_skipped() {
        assert!(feature_to_candidate(json!({ "name": "Nowhere" }), Category::Natural, 0).is_none());
        assert!(
            feature_to_candidate(json!({ "lat": 123.0, "lon": 0.0 }), Category::Natural, 0)
                .is_none()
        );
        assert!(feature_to_candidate(json!({ "lat": "north" }), Category::Natural, 0).is_none());
    }

    #[tokio::test]
    async fn test_empty_key_fails_validation_without_request() {
        let client =
            GeoapifyClient::with_base_url(String::new(), "http://127.0.0.1:9".to_string());
        assert!(!client.validate_api_key().await);
    }
}
