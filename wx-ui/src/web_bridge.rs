//! Browser lookups via `web_sys`.
//!
//! The catalog lives next to the page, so its URL is resolved against the
//! page origin before the HTTP client sees it.

use anyhow::{anyhow, Result};

/// `window.location.origin`, e.g. "http://127.0.0.1:5173".
pub fn page_origin() -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
    window
        .location()
        .origin()
        .map_err(|e| anyhow!("location.origin unavailable: {:?}", e))
}
