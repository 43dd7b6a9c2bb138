use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category weights for one planning run.
///
/// Entry order is the order categories are fetched and merged into the
/// candidate pool. Weights are expected to sum to about 1.0 but nothing
/// enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceProfile {
    weights: Vec<(Category, f64)>,
}

impl PreferenceProfile {
    pub fn new(weights: Vec<(Category, f64)>) -> Self {
        PreferenceProfile { weights }
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.weights.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.weights.iter().copied()
    }
}

/// Traveler intent, selected from a free-text label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Sightseeing,
    Gastronomy,
    Nature,
    /// "Mix of everything"
    #[default]
    Mix,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::Sightseeing,
        Preference::Gastronomy,
        Preference::Nature,
        Preference::Mix,
    ];

    /// Lowercase labels accepted for this preference.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Preference::Sightseeing => &[
                "sightseeing",
                "more tourist attractions",
                "tourist attractions",
                "mais pontos turísticos",
            ],
            Preference::Gastronomy => &[
                "gastronomy",
                "food focus",
                "focus on food",
                "foco em gastronomia",
            ],
            Preference::Nature => &[
                "nature",
                "natural landscapes",
                "paisagens naturais",
            ],
            Preference::Mix => &["mix", "mix of everything", "mix de tudo"],
        }
    }

    /// Match a free-text label, falling back to [`Preference::Mix`] when
    /// nothing matches.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized preference '{}', using mix of everything", label);
            Preference::default()
        })
    }

    pub fn profile(&self) -> PreferenceProfile {
        use Category::*;

        let weights = match self {
            Preference::Sightseeing => vec![(Attraction, 0.7), (Restaurant, 0.2), (Natural, 0.1)],
            Preference::Gastronomy => vec![(Restaurant, 0.7), (Attraction, 0.2), (Natural, 0.1)],
            Preference::Nature => vec![(Natural, 0.7), (Attraction, 0.2), (Restaurant, 0.1)],
            Preference::Mix => vec![(Attraction, 0.33), (Restaurant, 0.33), (Natural, 0.34)],
        };
        PreferenceProfile::new(weights)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Preference::Sightseeing => "sightseeing",
            Preference::Gastronomy => "gastronomy",
            Preference::Nature => "nature",
            Preference::Mix => "mix of everything",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Preference::ALL
            .into_iter()
            .find(|p| p.labels().contains(&needle.as_str()))
            .ok_or_else(|| format!("Unknown preference: {}", s))
    }
}
