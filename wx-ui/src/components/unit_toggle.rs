//! Two-part Celsius/Fahrenheit toggle.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the unit in use and a button switching to the other one.
/// Cards re-render from the already-fetched forecast; nothing is re-fetched.
#[component]
pub fn UnitToggle() -> Element {
    let state = use_context::<AppState>();
    let status = state.panel.read().status();

    rsx! {
        div {
            id: "unit-toggle",
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { "{status.using}" }
            button {
                r#type: "button",
                onclick: move |_| state.toggle_unit(),
                "{status.switch_to}"
            }
        }
    }
}
