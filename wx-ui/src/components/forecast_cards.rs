//! Forecast card grid.

use crate::state::AppState;
use dioxus::prelude::*;

/// One card per forecast day in the current unit.
#[component]
pub fn ForecastCards() -> Element {
    let state = use_context::<AppState>();
    let cards = state.panel.read().cards();
    let config = state.config.read().clone();

    rsx! {
        div {
            id: "cards",
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 12px;",
            for card in cards.iter() {
                div {
                    class: "card",
                    style: "flex: 1 0 110px; padding: 8px; border: 1px solid #e0e0e0; border-radius: 6px; text-align: center;",
                    div {
                        style: "font-weight: bold; font-size: 13px;",
                        "{card.date}"
                    }
                    img {
                        src: config.icon_src(&card.icon),
                        alt: "{card.label}",
                        width: "64",
                    }
                    div {
                        style: "font-size: 13px; color: #444;",
                        "{card.label}"
                    }
                    div {
                        style: "font-size: 12px;",
                        "High: "
                        {card.high_text()}
                    }
                    div {
                        style: "font-size: 12px;",
                        "Low: "
                        {card.low_text()}
                    }
                    div {
                        style: "font-size: 11px; color: #888;",
                        "Wind: {card.wind_max}"
                    }
                }
            }
        }
    }
}
