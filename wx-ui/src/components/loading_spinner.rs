//! Loading indicator component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading...".to_string())]
    pub message: String,
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            id: "loading",
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "{props.message}"
        }
    }
}
