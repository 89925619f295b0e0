//! HTTP access to the city catalog and the 7Timer! forecast endpoint.
//!
//! Works natively and in the browser (reqwest uses `fetch` on wasm32).
//! Nothing is retried; a failed request surfaces as an error immediately.

use crate::city::{CityCatalog, CityRecord};
use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::forecast::ForecastSeries;
use log::{debug, info, warn};
use reqwest::{Client, Url};

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    config: WidgetConfig,
}

impl ForecastClient {
    /// Build a client. Native builds apply `timeout_secs` to every request;
    /// browsers keep their own limits.
    pub fn new(config: WidgetConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder
            .build()
            .map_err(|e| WidgetError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Fetch and parse the city catalog served next to the page at `origin`.
    pub async fn load_catalog(&self, origin: &str) -> Result<CityCatalog> {
        let url = self.config.catalog_url(origin)?;
        debug!("catalog: fetching {}", url);
        let body = self.get_text(url).await.map_err(WidgetError::CatalogLoad)?;
        CityCatalog::parse(&body)
    }

    /// Fetch the daily forecast for a city.
    pub async fn fetch_forecast(&self, city: &CityRecord) -> Result<ForecastSeries> {
        let url = self.config.forecast_url(city)?;
        debug!("forecast: fetching {}", url);
        let body = self
            .get_text(url)
            .await
            .map_err(WidgetError::ForecastUnavailable)?;
        let series = ForecastSeries::from_json(&body)?;
        info!("forecast: {} days for {}", series.len(), city.label());
        Ok(series)
    }

    /// Fetch the forecast for the catalog entry behind a selector value.
    pub async fn fetch_forecast_for(
        &self,
        catalog: &CityCatalog,
        key: usize,
    ) -> Result<ForecastSeries> {
        let city = catalog.get(key).ok_or(WidgetError::UnknownCity(key))?;
        self.fetch_forecast(city).await
    }

    async fn get_text(&self, url: Url) -> std::result::Result<String, String> {
        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("request to {} failed: {}", url, e);
                return Err(format!("request to {url} failed: {e}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered HTTP {}", url, status);
            return Err(format!("{url} answered HTTP {status}"));
        }

        response
            .text()
            .await
            .map_err(|e| format!("reading {url} failed: {e}"))
    }
}
