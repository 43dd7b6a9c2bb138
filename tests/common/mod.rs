use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tripweaver::constants::EARTH_RADIUS_KM;
use tripweaver::models::{Candidate, Category, GeoPoint};
use tripweaver::services::places_provider::PlacesProvider;

/// Provider returning canned data and counting calls
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeProvider {
    pub hotel: Option<GeoPoint>,
    pub places: HashMap<Category, Vec<Candidate>>,
    pub healthy: bool,
    pub geocode_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub searched_categories: Mutex<Vec<Category>>,
}

#[allow(dead_code)]
impl FakeProvider {
    pub fn new(hotel: Option<GeoPoint>) -> Self {
        FakeProvider {
            hotel,
            healthy: true,
            ..Default::default()
        }
    }

    pub fn with_places(mut self, category: Category, candidates: Vec<Candidate>) -> Self {
        self.places.insert(category, candidates);
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn geocode_count(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlacesProvider for FakeProvider {
    async fn geocode(&self, _query: &str) -> Option<GeoPoint> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        self.hotel
    }

    async fn search_places(
        &self,
        _center: &GeoPoint,
        _radius_m: u32,
        category: Category,
        limit: u32,
    ) -> Vec<Candidate> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searched_categories.lock().unwrap().push(category);
        self.places
            .get(&category)
            .map(|c| c.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default()
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Create a test candidate
#[allow(dead_code)]
pub fn create_test_candidate(id: &str, category: Category, lat: f64, lon: f64) -> Candidate {
    Candidate::new(
        id.to_string(),
        Some(format!("Test place {}", id)),
        category,
        GeoPoint::new(lat, lon).unwrap(),
    )
}

/// Candidate on the equator `km` kilometers east of (0, 0)
#[allow(dead_code)]
pub fn candidate_east_of_origin(id: &str, category: Category, km: f64) -> Candidate {
    let lon = (km / EARTH_RADIUS_KM).to_degrees();
    create_test_candidate(id, category, 0.0, lon)
}

/// Check if we should skip real API tests
#[allow(dead_code)]
pub fn should_skip_real_api_tests() -> bool {
    std::env::var("SKIP_REAL_API_TESTS").is_ok() || std::env::var("GEOAPIFY_API_KEY").is_err()
}
