//! Shared UI crate for Chatgraph. Cross-platform views and form logic live here.

use dioxus::prelude::*;

pub mod core;
pub mod views;

mod hero;
pub use hero::Hero;

pub mod components {
    pub mod graph_viewer;
    pub mod metric_form;

    pub use graph_viewer::GraphViewer;
    pub use metric_form::MetricForm;
}

/// Unified shared theme. Web links it as a bundled asset; the desktop build
/// embeds the same file with `include_str!` instead.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
