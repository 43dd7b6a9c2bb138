use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of place a traveler can be sent to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Attraction,
    Restaurant,
    Natural,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Attraction, Category::Restaurant, Category::Natural];

    /// Category code understood by the Geoapify places API
    pub fn geoapify_code(&self) -> &'static str {
        match self {
            Category::Attraction => "tourism.attraction",
            Category::Restaurant => "catering.restaurant",
            Category::Natural => "natural",
        }
    }

    /// Human-readable label used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Attraction => "Attraction",
            Category::Restaurant => "Restaurant",
            Category::Natural => "Natural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Attraction => "attraction",
            Category::Restaurant => "restaurant",
            Category::Natural => "natural",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attraction" | "tourism.attraction" => Ok(Category::Attraction),
            "restaurant" | "catering.restaurant" => Ok(Category::Restaurant),
            "natural" => Ok(Category::Natural),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}
