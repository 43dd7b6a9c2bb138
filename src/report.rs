//! Plain-text rendering of planned trips for the console front-end.

use crate::models::{TripPlan, TripSummary};

pub const HOTEL_NOT_FOUND_MESSAGE: &str = "Could not determine hotel location.";

pub fn format_trip_plan(plan: &TripPlan) -> String {
    match plan.summary() {
        Some(summary) => format_trip_report(summary),
        None => format!("{}\n", HOTEL_NOT_FOUND_MESSAGE),
    }
}

pub fn format_trip_report(summary: &TripSummary) -> String {
    let mut out = String::new();
    let days = summary.itinerary.days.len();

    out.push_str(&format!(
        "Travel plan for {} - {} {}\n",
        summary.destination,
        days,
        if days == 1 { "day" } else { "days" }
    ));
    out.push_str(&format!("Hotel: {}\n", summary.hotel));

    for day in &summary.itinerary.days {
        out.push_str(&format!("\nDay {}:\n", day.day));
        if day.is_empty() {
            out.push_str("- No activities planned\n");
            continue;
        }
        for visit in &day.visits {
            out.push_str(&format!(
                "- {}: {} ({}) - Distance from hotel: {:.2} km\n",
                visit.label,
                visit.place.candidate.display_name(),
                visit.place.candidate.category.display_name(),
                visit.place.distance_from_hotel_km
            ));
        }
    }

    out.push_str("\nSummary:\n");
    out.push_str(&format!(
        "- Total places visited: {}\n",
        summary.itinerary.total_visits()
    ));

    out
}
