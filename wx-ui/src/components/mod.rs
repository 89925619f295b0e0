//! Reusable Dioxus RSX components for the forecast widget.

mod city_selector;
mod error_display;
mod forecast_cards;
mod loading_spinner;
mod unit_toggle;
mod widget_header;

pub use city_selector::CitySelector;
pub use error_display::ErrorDisplay;
pub use forecast_cards::ForecastCards;
pub use loading_spinner::LoadingSpinner;
pub use unit_toggle::UnitToggle;
pub use widget_header::WidgetHeader;
