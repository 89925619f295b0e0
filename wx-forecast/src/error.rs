/// Error types for the forecast widget
use thiserror::Error;
use wx_utils::error::DateCodeError;

/// Main error type for catalog, forecast and rendering operations
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The city catalog could not be fetched
    #[error("Failed to load city catalog: {0}")]
    CatalogLoad(String),

    /// A catalog row did not carry the four positional fields
    #[error("Malformed catalog row on line {line}: expected 4 fields, found {found}")]
    MalformedRow { line: usize, found: usize },

    /// The forecast request failed or its body could not be decoded
    #[error("Forecast unavailable: {0}")]
    ForecastUnavailable(String),

    /// A forecast date code was not a valid YYYYMMDD date
    #[error("Invalid date code: {0}")]
    InvalidDateCode(#[from] DateCodeError),

    /// Selection referred to a key missing from the catalog
    #[error("City not found in catalog: {0}")]
    UnknownCity(usize),

    /// Endpoint or base path could not be turned into a URL
    #[error("Invalid widget configuration: {0}")]
    Config(String),
}

/// Type alias for Results using WidgetError
pub type Result<T> = std::result::Result<T, WidgetError>;
