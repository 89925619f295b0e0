//! Unit preference and current-forecast slot behind the widget.
//!
//! `ForecastPanel` is plain data so the toggle and fetch bookkeeping can be
//! driven without a UI runtime; the Dioxus layer keeps one inside a signal.

use crate::card::{render, CardView};
use crate::error::Result;
use crate::forecast::ForecastSeries;
use crate::temperature::TemperatureUnit;

/// Two-part label of the unit toggle: "Using Celsius." / "Switch to ºF".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitStatus {
    pub using: String,
    pub switch_to: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastPanel {
    unit: TemperatureUnit,
    series: Option<ForecastSeries>,
    in_flight: usize,
    error: Option<String>,
}

impl ForecastPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Last successfully fetched series, if any.
    pub fn series(&self) -> Option<&ForecastSeries> {
        self.series.as_ref()
    }

    /// Flip the unit and return the new one. Cards re-render from the stored
    /// Celsius data; with no series yet there is nothing to redraw.
    pub fn toggle_unit(&mut self) -> TemperatureUnit {
        self.unit = self.unit.toggled();
        log::debug!("panel: unit is now {}", self.unit.label());
        self.unit
    }

    pub fn status(&self) -> UnitStatus {
        UnitStatus {
            using: format!("Using {}.", self.unit.label()),
            switch_to: format!("Switch to {}", self.unit.toggled().symbol()),
        }
    }

    /// Cards for the current series in the current unit.
    pub fn cards(&self) -> Vec<CardView> {
        self.series
            .as_ref()
            .map(|series| render(series, self.unit))
            .unwrap_or_default()
    }

    /// A forecast request went out.
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    /// A forecast request finished.
    ///
    /// Fetches are neither deduplicated nor cancelled: whichever completes
    /// last owns the slot. A failure keeps the previous series on screen.
    pub fn complete_fetch(&mut self, outcome: Result<ForecastSeries>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(series) => {
                self.series = Some(series);
                self.error = None;
            }
            Err(e) => {
                log::warn!("panel: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// True while any forecast request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;
    use crate::forecast::ForecastEntry;

    fn series(max: f64) -> ForecastSeries {
        ForecastSeries {
            entries: vec![ForecastEntry {
                date_code: 20240101,
                temp_max_c: max,
                temp_min_c: max - 7.0,
                weather_code: "clear".to_string(),
                wind_max: 2.0,
            }],
        }
    }

    #[test]
    fn test_defaults() {
        let panel = ForecastPanel::new();
        assert_eq!(panel.unit(), TemperatureUnit::Celsius);
        assert!(panel.series().is_none());
        assert!(panel.cards().is_empty());
        assert!(!panel.is_loading());
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_status_labels() {
        let mut panel = ForecastPanel::new();
        assert_eq!(
            panel.status(),
            UnitStatus {
                using: "Using Celsius.".to_string(),
                switch_to: "Switch to ºF".to_string(),
            }
        );
        panel.toggle_unit();
        assert_eq!(panel.status().using, "Using Fahrenheit.");
        assert_eq!(panel.status().switch_to, "Switch to ºC");
    }

    #[test]
    fn test_toggle_without_series_is_harmless() {
        let mut panel = ForecastPanel::new();
        assert_eq!(panel.toggle_unit(), TemperatureUnit::Fahrenheit);
        assert!(panel.cards().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_cards() {
        let mut panel = ForecastPanel::new();
        panel.begin_fetch();
        panel.complete_fetch(Ok(series(12.0)));
        let original = panel.cards();

        panel.toggle_unit();
        assert_eq!(panel.cards()[0].high, 53.6);
        panel.toggle_unit();

        assert_eq!(panel.unit(), TemperatureUnit::Celsius);
        assert_eq!(panel.cards(), original);
    }

    #[test]
    fn test_unit_survives_new_selection() {
        let mut panel = ForecastPanel::new();
        panel.toggle_unit();
        panel.begin_fetch();
        panel.complete_fetch(Ok(series(0.0)));
        assert_eq!(panel.cards()[0].high, 32.0);
        assert_eq!(panel.cards()[0].unit_symbol, "ºF");
    }

    #[test]
    fn test_failure_clears_loading_and_keeps_previous_cards() {
        let mut panel = ForecastPanel::new();
        panel.begin_fetch();
        panel.complete_fetch(Ok(series(12.0)));

        panel.begin_fetch();
        assert!(panel.is_loading());
        panel.complete_fetch(Err(WidgetError::ForecastUnavailable("HTTP 502".to_string())));

        assert!(!panel.is_loading());
        assert_eq!(panel.error(), Some("Forecast unavailable: HTTP 502"));
        assert_eq!(panel.cards()[0].high, 12.0);

        panel.begin_fetch();
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_overlapping_fetches_last_completion_wins() {
        let mut panel = ForecastPanel::new();
        panel.begin_fetch();
        panel.begin_fetch();

        panel.complete_fetch(Ok(series(20.0)));
        assert!(panel.is_loading());

        panel.complete_fetch(Ok(series(5.0)));
        assert!(!panel.is_loading());
        assert_eq!(panel.cards()[0].high, 5.0);
    }
}
