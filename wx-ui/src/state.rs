//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wx_forecast::{CityCatalog, ForecastClient, ForecastPanel, WidgetConfig};

/// Shared state for the forecast widget.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<WidgetConfig>,
    /// HTTP client (None until startup has built it)
    pub client: Signal<Option<ForecastClient>>,
    /// City catalog (None until loaded)
    pub catalog: Signal<Option<CityCatalog>>,
    /// Whether the catalog is still loading
    pub booting: Signal<bool>,
    /// Startup failure; the widget cannot be used when set
    pub catalog_error: Signal<Option<String>>,
    /// Key of the selected city
    pub selected_city: Signal<Option<usize>>,
    /// Unit preference, current forecast and fetch status
    pub panel: Signal<ForecastPanel>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            config: Signal::new(WidgetConfig::default()),
            client: Signal::new(None),
            catalog: Signal::new(None),
            booting: Signal::new(true),
            catalog_error: Signal::new(None),
            selected_city: Signal::new(None),
            panel: Signal::new(ForecastPanel::new()),
        }
    }

    /// Select a city and fetch its forecast in the background.
    ///
    /// Earlier fetches are left running; the last one to finish fills the
    /// panel.
    pub fn select_city(mut self, key: usize) {
        self.selected_city.set(Some(key));

        let client = self.client.read().clone();
        let catalog = self.catalog.read().clone();
        let (Some(client), Some(catalog)) = (client, catalog) else {
            log::warn!("selection of city {} before startup finished", key);
            return;
        };

        self.panel.write().begin_fetch();
        let mut panel = self.panel;
        spawn(async move {
            let outcome = client.fetch_forecast_for(&catalog, key).await;
            panel.write().complete_fetch(outcome);
        });
    }

    pub fn toggle_unit(mut self) {
        self.panel.write().toggle_unit();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
