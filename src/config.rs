//! Application configuration loaded from environment variables.
//!
//! Every field has a working default pointing at the public NYC datasets,
//! so the server runs with no configuration at all. Sources can be
//! overridden with local file paths for offline use.

use std::env;

/// Default taxi trip CSV (NYC yellow cab sample).
const DEFAULT_TRIPS_SOURCE: &str =
    "https://raw.githubusercontent.com/keplergl/kepler.gl-data/master/nyctrips/data.csv";

/// Default BID boundary polygons (NYC open data).
const DEFAULT_DISTRICTS_SOURCE: &str = "https://data.cityofnewyork.us/resource/7jdm-inj8.geojson";

/// Default NTA polygons for all boroughs.
const DEFAULT_BOROUGHS_SOURCE: &str =
    "https://raw.githubusercontent.com/nycehs/NYC_geography/refs/heads/master/NTA.geo.json";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Trip CSV location (URL or local path)
    pub trips_source: String,
    /// BID GeoJSON location (URL or local path)
    pub districts_source: String,
    /// Borough GeoJSON location (URL or local path)
    pub boroughs_source: String,
    /// Borough whose area can be excluded from the districts
    pub exclusion_borough: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trips_source: DEFAULT_TRIPS_SOURCE.to_string(),
            districts_source: DEFAULT_DISTRICTS_SOURCE.to_string(),
            boroughs_source: DEFAULT_BOROUGHS_SOURCE.to_string(),
            exclusion_borough: "Manhattan".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Set TRIPS_SOURCE, DISTRICTS_SOURCE, BOROUGHS_SOURCE,
    /// EXCLUSION_BOROUGH, FRONTEND_URL or PORT to override the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            trips_source: env::var("TRIPS_SOURCE").unwrap_or(defaults.trips_source),
            districts_source: env::var("DISTRICTS_SOURCE").unwrap_or(defaults.districts_source),
            boroughs_source: env::var("BOROUGHS_SOURCE").unwrap_or(defaults.boroughs_source),
            exclusion_borough: env::var("EXCLUSION_BOROUGH").unwrap_or(defaults.exclusion_borough),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        }
    }
}
