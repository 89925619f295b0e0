//! Render-ready forecast cards.

use crate::forecast::{ForecastEntry, ForecastSeries};
use crate::temperature::TemperatureUnit;
use crate::weather_label::weather_label;
use serde::Serialize;

/// One day's card as displayed by the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// "Mon Jan 2024", or the raw date code if it could not be parsed
    pub date: String,
    /// Icon file name, "<weather code>.png"
    pub icon: String,
    pub label: String,
    pub high: f64,
    pub low: f64,
    pub unit_symbol: &'static str,
    pub wind_max: f64,
}

impl CardView {
    fn from_entry(entry: &ForecastEntry, unit: TemperatureUnit) -> Self {
        let date = entry.display_date().unwrap_or_else(|e| {
            log::warn!("card: {}; showing raw date code", e);
            entry.date_code.to_string()
        });

        CardView {
            date,
            icon: format!("{}.png", entry.weather_code),
            label: weather_label(&entry.weather_code).to_string(),
            high: unit.from_celsius(entry.temp_max_c),
            low: unit.from_celsius(entry.temp_min_c),
            unit_symbol: unit.symbol(),
            wind_max: entry.wind_max,
        }
    }

    /// e.g. "53.6ºF"
    pub fn high_text(&self) -> String {
        format!("{}{}", self.high, self.unit_symbol)
    }

    pub fn low_text(&self) -> String {
        format!("{}{}", self.low, self.unit_symbol)
    }
}

/// Build one card per entry, in series order.
///
/// Temperatures are always derived from the stored Celsius values, so
/// rendering the same series in another unit never compounds conversions.
pub fn render(series: &ForecastSeries, unit: TemperatureUnit) -> Vec<CardView> {
    series
        .iter()
        .map(|entry| CardView::from_entry(entry, unit))
        .collect()
}
