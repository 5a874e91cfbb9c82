use dioxus::prelude::*;

use crate::components::{GraphViewer, MetricForm};
use crate::core::form::FormState;
use crate::Hero;

/// The whole app is this one page: heading, form, graph display.
///
/// The view owns the form state; the form dispatches into it and the viewer
/// renders whatever the latest submit derived.
#[component]
pub fn Home() -> Element {
    let state = use_signal(FormState::default);
    let current = state();

    rsx! {
        section { class: "page page-home",
            Hero {}
            MetricForm { state }
            GraphViewer { request: current.request }
        }
    }
}
