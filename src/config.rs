use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub geoapify: GeoapifyConfig,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoapifyConfig {
    pub api_key: String,
    /// Overrides the Geoapify API root (local stubs, proxies)
    pub base_url: Option<String>,
}

impl GeoapifyConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(GeoapifyConfig {
            api_key: env::var("GEOAPIFY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or("GEOAPIFY_API_KEY must be set")?,
            base_url: env::var("GEOAPIFY_BASE_URL").ok(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Number of visits scheduled per day (morning, afternoon, evening, ...)
    pub slots_per_day: usize,

    /// Radius around the hotel searched for candidates, in meters
    pub search_radius_m: u32,

    /// Maximum candidates requested from the places API per category
    pub places_limit: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            slots_per_day: DEFAULT_SLOTS_PER_DAY,
            search_radius_m: DEFAULT_SEARCH_RADIUS_METERS,
            places_limit: DEFAULT_PLACES_LIMIT,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            slots_per_day: env::var("ITINERARY_SLOTS_PER_DAY")
                .unwrap_or_else(|_| defaults.slots_per_day.to_string())
                .parse()
                .map_err(|_| "Invalid ITINERARY_SLOTS_PER_DAY")?,

            search_radius_m: env::var("ITINERARY_SEARCH_RADIUS_M")
                .unwrap_or_else(|_| defaults.search_radius_m.to_string())
                .parse()
                .map_err(|_| "Invalid ITINERARY_SEARCH_RADIUS_M")?,

            places_limit: env::var("ITINERARY_PLACES_LIMIT")
                .unwrap_or_else(|_| defaults.places_limit.to_string())
                .parse()
                .map_err(|_| "Invalid ITINERARY_PLACES_LIMIT")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.slots_per_day == 0 {
            return Err("ITINERARY_SLOTS_PER_DAY must be at least 1".to_string());
        }
        if self.search_radius_m == 0 {
            return Err("ITINERARY_SEARCH_RADIUS_M must be greater than 0".to_string());
        }
        if !(1..=MAX_PLACES_LIMIT).contains(&self.places_limit) {
            return Err(format!(
                "ITINERARY_PLACES_LIMIT must be between 1 and {}",
                MAX_PLACES_LIMIT
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            geoapify: GeoapifyConfig::from_env()?,
            planner: PlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
