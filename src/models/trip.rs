use crate::constants::MAX_TRIP_DAYS;
use crate::models::{GeoPoint, Itinerary, Preference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub hotel: String,
    pub days: u32,
    /// Free-text preference label; unknown labels plan a mix of everything
    #[serde(default)]
    pub preference: String,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".to_string());
        }
        if self.hotel.trim().is_empty() {
            return Err("hotel must not be empty".to_string());
        }
        if !(1..=MAX_TRIP_DAYS).contains(&self.days) {
            return Err(format!("days must be between 1 and {}", MAX_TRIP_DAYS));
        }
        Ok(())
    }

    /// Free-text query handed to the geocoder
    pub fn hotel_query(&self) -> String {
        format!("{}, {}", self.hotel.trim(), self.destination.trim())
    }
}

/// A produced itinerary together with what it was planned from.
#[derive(Debug, Clone, Serialize)]
pub struct TripSummary {
    pub destination: String,
    pub hotel: String,
    pub hotel_location: GeoPoint,
    pub preference: Preference,
    #[serde(flatten)]
    pub itinerary: Itinerary,
}

/// Result of one planning run.
#[derive(Debug, Clone)]
pub enum TripPlan {
    /// Geocoding found nothing for the hotel; no candidates were looked up
    HotelNotFound,
    /// The hotel resolved but no category returned any place
    NoCandidates(TripSummary),
    Planned(TripSummary),
}

impl TripPlan {
    pub fn summary(&self) -> Option<&TripSummary> {
        match self {
            TripPlan::HotelNotFound => None,
            TripPlan::NoCandidates(summary) | TripPlan::Planned(summary) => Some(summary),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            TripPlan::HotelNotFound => "hotel_not_found",
            TripPlan::NoCandidates(_) => "no_candidates",
            TripPlan::Planned(_) => "planned",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub summary: TripSummary,
    pub total_visits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(days: u32) -> TripRequest {
        TripRequest {
            destination: "Paris".to_string(),
            hotel: "Hotel Lutetia".to_string(),
            days,
            preference: "foco em gastronomia".to_string(),
        }
    }

    #[test]
    fn test_trip_request_validation() {
        assert!(request(3).validate().is_ok());
        assert!(request(0).validate().is_err());
        assert!(request(31).validate().is_err());

        let mut req = request(2);
        req.hotel = "   ".to_string();
        assert!(req.validate().is_err());

        let mut req = request(2);
        req.destination = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_hotel_query() {
        let mut req = request(1);
        req.hotel = " Hotel Lutetia ".to_string();
        assert_eq!(req.hotel_query(), "Hotel Lutetia, Paris");
    }

    #[test]
    fn test_trip_plan_status() {
        assert_eq!(TripPlan::HotelNotFound.status(), "hotel_not_found");
        assert!(TripPlan::HotelNotFound.summary().is_none());

        let summary = TripSummary {
            destination: "Paris".to_string(),
            hotel: "Hotel Lutetia".to_string(),
            hotel_location: GeoPoint::new(48.851, 2.327).unwrap(),
            preference: Preference::Mix,
            itinerary: Itinerary::empty(2),
        };
        let plan = TripPlan::NoCandidates(summary);
        assert_eq!(plan.status(), "no_candidates");
        assert_eq!(plan.summary().unwrap().itinerary.days.len(), 2);
    }
}
