//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Startup failures block the whole widget
    #[props(default = false)]
    pub fatal: bool,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let heading = if props.fatal {
        "Weather is unavailable: "
    } else {
        "Error: "
    };

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{heading}" }
            "{props.message}"
        }
    }
}
