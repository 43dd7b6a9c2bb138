use crate::models::ScoredCandidate;
use serde::{Deserialize, Serialize};

const SLOT_LABELS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// Time-of-day label for a 1-based slot number
pub fn slot_label(slot: usize) -> String {
    slot.checked_sub(1)
        .and_then(|idx| SLOT_LABELS.get(idx))
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("Slot {}", slot))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// 1-based position within the day
    pub slot: usize,
    pub label: String,
    pub place: ScoredCandidate,
    /// Live distance from the previous stop (or the hotel) when this place
    /// was picked
    pub distance_from_previous_km: f64,
}

impl Visit {
    pub fn new(slot: usize, place: ScoredCandidate, distance_from_previous_km: f64) -> Self {
        Visit {
            slot,
            label: slot_label(slot),
            place,
            distance_from_previous_km,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub visits: Vec<Visit>,
}

impl ItineraryDay {
    pub fn new(day: u32) -> Self {
        ItineraryDay {
            day,
            visits: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// An itinerary of `days` days with nothing scheduled
    pub fn empty(days: u32) -> Self {
        Itinerary {
            days: (1..=days).map(ItineraryDay::new).collect(),
        }
    }

    pub fn total_visits(&self) -> usize {
        self.days.iter().map(ItineraryDay::len).sum()
    }

    pub fn visits(&self) -> impl Iterator<Item = &Visit> {
        self.days.iter().flat_map(|d| d.visits.iter())
    }
}
