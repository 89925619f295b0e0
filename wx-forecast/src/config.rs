use crate::city::CityRecord;
use crate::error::{Result, WidgetError};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// 7Timer! civillight endpoint (daily summary, up to a week ahead).
pub const DEFAULT_FORECAST_ENDPOINT: &str = "https://www.7timer.info/bin/civillight.php";

/// Where the widget finds its assets and its forecast API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Public base path the widget is served under (default: `WX_APP_BASE` at
    /// build time, else `/`)
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// City catalog file, relative to the base path
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Weather icon directory, relative to the base path
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    #[serde(default = "default_forecast_endpoint")]
    pub forecast_endpoint: String,

    /// Request timeout in seconds (native targets only)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_path() -> String {
    option_env!("WX_APP_BASE").unwrap_or("/").to_string()
}

fn default_catalog_file() -> String {
    "city_coordinates.csv".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_forecast_endpoint() -> String {
    DEFAULT_FORECAST_ENDPOINT.to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            catalog_file: default_catalog_file(),
            images_dir: default_images_dir(),
            forecast_endpoint: default_forecast_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WidgetConfig {
    /// Base path with exactly one leading and one trailing slash.
    pub fn base(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    pub fn catalog_path(&self) -> String {
        format!("{}{}", self.base(), self.catalog_file)
    }

    /// Absolute catalog URL for a page served from `origin`.
    pub fn catalog_url(&self, origin: &str) -> Result<Url> {
        let origin = Url::parse(origin)
            .map_err(|e| WidgetError::Config(format!("bad origin {origin:?}: {e}")))?;
        origin
            .join(&self.catalog_path())
            .map_err(|e| WidgetError::Config(format!("bad catalog path: {e}")))
    }

    /// Forecast request for a city: longitude first, then latitude, metric
    /// units, JSON output, no time-zone shift.
    pub fn forecast_url(&self, city: &CityRecord) -> Result<Url> {
        Url::parse_with_params(
            &self.forecast_endpoint,
            &[
                ("lon", city.longitude.as_str()),
                ("lat", city.latitude.as_str()),
                ("ac", "0"),
                ("unit", "metric"),
                ("output", "json"),
                ("tzshift", "0"),
            ],
        )
        .map_err(|e| {
            WidgetError::Config(format!("bad forecast endpoint {:?}: {e}", self.forecast_endpoint))
        })
    }

    /// `<img src>` for a card icon such as "pcloudy.png".
    pub fn icon_src(&self, icon: &str) -> String {
        format!("{}{}/{}", self.base(), self.images_dir, icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testville() -> CityRecord {
        CityRecord {
            latitude: "1.23".to_string(),
            longitude: "4.56".to_string(),
            name: "Testville".to_string(),
            country: "Testland".to_string(),
        }
    }

    fn with_base(base_path: &str) -> WidgetConfig {
        WidgetConfig {
            base_path: base_path.to_string(),
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn test_forecast_url_keeps_lon_lat_order() {
        let url = WidgetConfig::default().forecast_url(&testville()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.7timer.info/bin/civillight.php?lon=4.56&lat=1.23&ac=0&unit=metric&output=json&tzshift=0"
        );
    }

    #[test]
    fn test_bad_endpoint() {
        let config = WidgetConfig {
            forecast_endpoint: "not a url".to_string(),
            ..WidgetConfig::default()
        };
        assert!(matches!(
            config.forecast_url(&testville()),
            Err(WidgetError::Config(_))
        ));
    }

    #[test]
    fn test_base_normalization() {
        assert_eq!(with_base("").base(), "/");
        assert_eq!(with_base("/").base(), "/");
        assert_eq!(with_base("weather").base(), "/weather/");
        assert_eq!(with_base("/weather").base(), "/weather/");
        assert_eq!(with_base("/apps/weather/").base(), "/apps/weather/");
    }

    #[test]
    fn test_catalog_url() {
        let url = with_base("/").catalog_url("http://127.0.0.1:5173").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5173/city_coordinates.csv");

        let url = with_base("/weather/").catalog_url("https://example.org").unwrap();
        assert_eq!(url.as_str(), "https://example.org/weather/city_coordinates.csv");

        assert!(with_base("/").catalog_url("no-origin").is_err());
    }

    #[test]
    fn test_icon_src() {
        assert_eq!(with_base("/").icon_src("clear.png"), "/images/clear.png");
        assert_eq!(with_base("weather").icon_src("ts.png"), "/weather/images/ts.png");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"forecast_endpoint": "http://localhost:9000/api"}"#).unwrap();
        assert_eq!(config.forecast_endpoint, "http://localhost:9000/api");
        assert_eq!(config.catalog_file, "city_coordinates.csv");
        assert_eq!(config.images_dir, "images");
        assert_eq!(config.timeout_secs, 10);
    }
}
