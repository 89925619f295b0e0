//! Core of the city forecast widget.
//!
//! - `city`: the city catalog parsed from `city_coordinates.csv`
//! - `forecast`: daily forecast entries decoded from the 7Timer! `dataseries`
//! - `client`: HTTP access to the catalog file and the forecast endpoint
//! - `temperature` / `weather_label`: presentation conversions
//! - `card`: turns a forecast series into render-ready cards
//! - `panel`: unit preference plus the current-forecast slot

pub mod card;
pub mod city;
pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod panel;
pub mod temperature;
pub mod weather_label;

pub use card::{render, CardView};
pub use city::{CityCatalog, CityOption, CityRecord};
pub use client::ForecastClient;
pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
pub use forecast::{ForecastEntry, ForecastSeries};
pub use panel::{ForecastPanel, UnitStatus};
pub use temperature::TemperatureUnit;
