//! Daily forecast entries decoded from the 7Timer! civillight product.
//!
//! The API answers with a top-level `dataseries` array:
//!
//! ```text
//! {"product":"civillight","init":"2024010100","dataseries":[
//!   {"date":20240101,"weather":"pcloudy","temp2m":{"max":12,"min":5},"wind10m_max":3}
//! ]}
//! ```

use crate::error::{Result, WidgetError};
use serde::{Deserialize, Serialize};
use wx_utils::dates::format_date_code;

/// One day of forecast. Temperatures are Celsius as delivered by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Compact YYYYMMDD date
    pub date_code: u32,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub weather_code: String,
    pub wind_max: f64,
}

/// All days returned by one fetch for one city, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    dataseries: Vec<ApiDay>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    date: u32,
    weather: String,
    temp2m: ApiTemperature,
    wind10m_max: f64,
}

#[derive(Debug, Deserialize)]
struct ApiTemperature {
    max: f64,
    min: f64,
}

impl From<ApiDay> for ForecastEntry {
    fn from(day: ApiDay) -> Self {
        ForecastEntry {
            date_code: day.date,
            temp_max_c: day.temp2m.max,
            temp_min_c: day.temp2m.min,
            weather_code: day.weather,
            wind_max: day.wind10m_max,
        }
    }
}

impl ForecastEntry {
    /// Card date ("Mon Jan 2024") in the local time zone.
    pub fn display_date(&self) -> Result<String> {
        Ok(format_date_code(&self.date_code.to_string())?)
    }
}

impl ForecastSeries {
    /// Decode a forecast response body.
    pub fn from_json(body: &str) -> Result<ForecastSeries> {
        let response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| WidgetError::ForecastUnavailable(format!("unreadable response: {e}")))?;
        Ok(ForecastSeries {
            entries: response.dataseries.into_iter().map(ForecastEntry::from).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForecastEntry> {
        self.entries.iter()
    }
}
