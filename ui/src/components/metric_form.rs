use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures_util::StreamExt;

use api::MetricKind;

use crate::core::form::{reduce, FormAction, FormState, NamesStatus};

/// The form owning participant, metric, and count fields.
///
/// All input flows through one coroutine channel as [`FormAction`]s; the
/// reducer replaces the shared state wholesale. The name listing is fetched
/// once on mount inside a scope-owned future, so tearing the form down drops
/// the request and a late response cannot write into a dead component.
#[component]
pub fn MetricForm(state: Signal<FormState>) -> Element {
    let actions = use_coroutine(move |mut rx: UnboundedReceiver<FormAction>| {
        let mut state = state;
        async move {
            while let Some(action) = rx.next().await {
                let next = reduce(&state.peek(), action);
                state.set(next);
            }
        }
    });

    use_future(move || async move {
        let base = state.peek().base().to_string();
        match api::fetch_names(&base).await {
            Ok(names) => actions.send(FormAction::NamesLoaded(names)),
            Err(err) => {
                warn!(%err, "participant listing unavailable");
                actions.send(FormAction::NamesFailed(err.to_string()));
            }
        }
    });

    let current = state();
    let options = current.name_options();

    rsx! {
        form {
            class: "metric-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                actions.send(FormAction::Submitted);
            },

            div { class: "metric-form__field",
                label { class: "metric-form__label", r#for: "participant", "Name" }
                select {
                    id: "participant",
                    class: "metric-form__control",
                    value: "{current.selection.name}",
                    oninput: move |evt| actions.send(FormAction::NamePicked(evt.value())),
                    for name in options.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
                {names_hint(&current.names)}
            }

            div { class: "metric-form__field",
                label { class: "metric-form__label", r#for: "metric", "Type" }
                select {
                    id: "metric",
                    class: "metric-form__control",
                    value: "{current.selection.metric}",
                    oninput: move |evt| {
                        if let Some(kind) = MetricKind::from_param(&evt.value()) {
                            actions.send(FormAction::MetricPicked(kind));
                        }
                    },
                    for kind in MetricKind::ALL {
                        option { key: "{kind}", value: "{kind.as_param()}", "{kind.label()}" }
                    }
                }
            }

            div { class: "metric-form__field",
                label { class: "metric-form__label", r#for: "count", "Count" }
                input {
                    id: "count",
                    class: "metric-form__control",
                    r#type: "number",
                    placeholder: "Number of entries",
                    value: "{current.selection.count}",
                    oninput: move |evt| actions.send(FormAction::CountEdited(evt.value())),
                }
            }

            button { r#type: "submit", class: "button button--primary", "Submit" }
        }
    }
}

fn names_hint(names: &NamesStatus) -> Element {
    match names {
        NamesStatus::Loading => rsx! {
            span { class: "metric-form__hint", "Loading participants…" }
        },
        NamesStatus::Failed(_) => rsx! {
            span { class: "metric-form__hint metric-form__hint--error",
                "Participants unavailable; charting everyone."
            }
        },
        NamesStatus::Ready(_) => rsx! {},
    }
}
