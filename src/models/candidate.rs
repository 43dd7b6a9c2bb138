use crate::models::{Category, GeoPoint};
use serde::{Deserialize, Serialize};

const UNNAMED_PLACE: &str = "Name not available";

/// A point of interest returned by the places provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: Category,
    pub location: GeoPoint,
    /// Provider payload, passed through untouched
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub raw_metadata: serde_json::Value,
}

impl Candidate {
    pub fn new(id: String, name: Option<String>, category: Category, location: GeoPoint) -> Self {
        Candidate {
            id,
            name,
            category,
            location,
            raw_metadata: serde_json::Value::Null,
        }
    }

    pub fn with_metadata(mut self, raw_metadata: serde_json::Value) -> Self {
        self.raw_metadata = raw_metadata;
        self
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNNAMED_PLACE)
    }
}

/// A candidate with its relevance score and distance from the hotel.
/// Both are computed once at scoring time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f64,
    pub distance_from_hotel_km: f64,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate, score: f64, distance_from_hotel_km: f64) -> Self {
        ScoredCandidate {
            candidate,
            score,
            distance_from_hotel_km,
        }
    }

    pub fn location(&self) -> &GeoPoint {
        &self.candidate.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let location = GeoPoint::new(48.8584, 2.2945).unwrap();
        let named = Candidate::new(
            "p1".to_string(),
            Some("Eiffel Tower".to_string()),
            Category::Attraction,
            location,
        );
        let unnamed = Candidate::new("p2".to_string(), None, Category::Attraction, location);
        let blank = Candidate::new(
            "p3".to_string(),
            Some("  ".to_string()),
            Category::Attraction,
            location,
        );

        assert_eq!(named.display_name(), "Eiffel Tower");
        assert_eq!(unnamed.display_name(), "Name not available");
        assert_eq!(blank.display_name(), "Name not available");
    }

    #[test]
    fn test_scored_candidate_serializes_flat() {
        let candidate = Candidate::new(
            "p1".to_string(),
            Some("Louvre".to_string()),
            Category::Attraction,
            GeoPoint::new(48.8606, 2.3376).unwrap(),
        );
        let scored = ScoredCandidate::new(candidate, 0.5, 1.25);

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["category"], "attraction");
        assert_eq!(json["distance_from_hotel_km"], 1.25);
        assert!(json.get("raw_metadata").is_none());
    }
}
