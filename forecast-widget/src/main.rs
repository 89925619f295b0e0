//! City Weather Forecast
//!
//! Pick a city, get a week of daily forecast cards from the 7Timer!
//! civillight product, and flip the cards between Celsius and Fahrenheit.
//!
//! Data flow:
//! 1. On mount: fetch `city_coordinates.csv` from the page's base path and
//!    fill the city selector. Failure here is fatal and shown as such.
//! 2. On selection: fetch the forecast for that city's coordinates into the
//!    single current-forecast slot (last completion wins).
//! 3. On unit toggle: re-render the cards from the stored Celsius data.

use dioxus::prelude::*;
use wx_forecast::{CityCatalog, ForecastClient, WidgetConfig, WidgetError};
use wx_ui::components::{
    CitySelector, ErrorDisplay, ForecastCards, LoadingSpinner, UnitToggle, WidgetHeader,
};
use wx_ui::state::AppState;
use wx_ui::web_bridge;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("forecast-root"))
        .launch(App);
}

/// Build the HTTP client and load the city catalog served next to the page.
async fn load_catalog(config: WidgetConfig) -> Result<(ForecastClient, CityCatalog), WidgetError> {
    let origin =
        web_bridge::page_origin().map_err(|e| WidgetError::CatalogLoad(e.to_string()))?;
    let client = ForecastClient::new(config)?;
    let catalog = client.load_catalog(&origin).await?;
    if catalog.is_empty() {
        return Err(WidgetError::CatalogLoad("the city list is empty".to_string()));
    }
    Ok((client, catalog))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load the catalog once on mount ───
    use_effect(move || {
        let config = state.config.peek().clone();
        spawn(async move {
            match load_catalog(config).await {
                Ok((client, catalog)) => {
                    log::info!("widget: {} cities available", catalog.len());
                    state.client.set(Some(client));
                    state.catalog.set(Some(catalog));
                }
                Err(e) => {
                    log::error!("widget: startup failed: {}", e);
                    state.catalog_error.set(Some(e.to_string()));
                }
            }
            state.booting.set(false);
        });
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            WidgetHeader {
                title: "City Weather Forecast".to_string(),
                subtitle: "Daily forecast data by 7Timer!".to_string(),
            }

            if let Some(err) = state.catalog_error.read().as_ref() {
                ErrorDisplay { message: err.clone(), fatal: true }
            } else if *state.booting.read() {
                LoadingSpinner { message: "Loading cities...".to_string() }
            } else {
                ForecastSection {}
            }
        }
    }
}

/// Selector, unit toggle, fetch status and the cards themselves.
#[component]
fn ForecastSection() -> Element {
    let state = use_context::<AppState>();
    let loading = state.panel.read().is_loading();
    let error = state.panel.read().error().map(str::to_string);

    rsx! {
        CitySelector {}
        UnitToggle {}

        if let Some(err) = error.as_ref() {
            ErrorDisplay { message: err.clone() }
        }

        if loading {
            LoadingSpinner { message: "Loading forecast...".to_string() }
        }

        ForecastCards {}
    }
}
