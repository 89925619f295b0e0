//! Shared Dioxus components and browser bridge for the city forecast widget.
//!
//! This crate provides:
//! - `web_bridge`: page lookups that need `web_sys` (the page origin)
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: the selector, unit toggle, cards and status RSX components

pub mod components;
pub mod state;
pub mod web_bridge;
