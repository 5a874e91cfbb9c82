use dioxus::prelude::*;

use crate::core::form::GraphRequest;

/// Passive display surface for the most recent graph request.
///
/// A pure function of its prop: hand it a request and it points an image
/// element at the URL; hand it `None` (nothing submitted yet) and it shows a
/// placeholder. Whether the URL actually resolves to an image is between the
/// browser and the analytics server.
#[component]
pub fn GraphViewer(request: Option<GraphRequest>) -> Element {
    rsx! {
        section { class: "graph-viewer",
            if let Some(request) = request {
                figure { class: "graph-viewer__figure",
                    img {
                        class: "graph-viewer__image",
                        src: "{request.url}",
                        alt: "{request.caption}",
                    }
                    figcaption { class: "graph-viewer__caption", "{request.caption}" }
                }
            } else {
                p { class: "graph-viewer__placeholder",
                    "Submit the form to chart this conversation."
                }
            }
        }
    }
}
