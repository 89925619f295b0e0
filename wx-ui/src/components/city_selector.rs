//! Dropdown selector for choosing a city.

use crate::state::AppState;
use dioxus::prelude::*;

/// City dropdown selector.
/// Option values are catalog keys; choosing one starts a forecast fetch.
#[component]
pub fn CitySelector() -> Element {
    let state = use_context::<AppState>();
    let options = state
        .catalog
        .read()
        .as_ref()
        .map(|catalog| catalog.options())
        .unwrap_or_default();
    let selected = (state.selected_city)()
        .map(|key| key.to_string())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<usize>() {
        Ok(key) => state.select_city(key),
        Err(_) => log::debug!("ignoring selector value {:?}", evt.value()),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "city-select",
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: "city-select",
                onchange: on_change,
                option {
                    value: "",
                    disabled: true,
                    selected: selected.is_empty(),
                    "Select a city"
                }
                for city in options.iter() {
                    option {
                        value: "{city.value}",
                        selected: city.value == selected,
                        "{city.label}"
                    }
                }
            }
        }
    }
}
