use dioxus::prelude::*;

/// Heading block introducing the tool.
#[component]
pub fn Hero() -> Element {
    rsx! {
        header { class: "hero",
            h1 { class: "hero__title", "Messenger Chat Analysis" }
            p { class: "hero__tagline",
                "Simple app to view frequency and trends of a Messenger conversation."
            }
        }
    }
}
