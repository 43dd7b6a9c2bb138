use crate::models::{Candidate, Category, GeoPoint};
use async_trait::async_trait;

/// Source of hotel coordinates and nearby places.
///
/// Implementations absorb their own failures: a lookup that errors is
/// reported as `None` or as an empty list, the same as a lookup that found
/// nothing.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Resolve a free-text location to coordinates
    async fn geocode(&self, query: &str) -> Option<GeoPoint>;

    /// Up to `limit` places of `category` within `radius_m` of `center`
    async fn search_places(
        &self,
        center: &GeoPoint,
        radius_m: u32,
        category: Category,
        limit: u32,
    ) -> Vec<Candidate>;

    /// Whether the provider is reachable and accepts our credentials
    async fn health_check(&self) -> bool;

    fn provider_name(&self) -> &'static str;
}
