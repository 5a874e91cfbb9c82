//! Form Controller state: one immutable state value, the actions user input
//! dispatches, and the reducer that derives each next state.
//!
//! Every event becomes a [`FormAction`] travelling through a single channel,
//! and [`reduce`] replaces the whole [`FormState`] with a fresh value. No
//! component mutates fields in place, which keeps the submit contract
//! checkable without a DOM: the graph request is re-derived only by
//! [`FormAction::Submitted`], never by edits.

use api::{GraphRequestUrl, MetricKind, NameList};

/// Numeric-input contents before the user touches the count field.
pub const DEFAULT_COUNT: &str = "20";

/// Where the name listing currently stands. `Failed` is distinct from
/// `Loading`: a failed fetch leaves the selector offering only the sentinel,
/// while a pending one may still fill it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NamesStatus {
    #[default]
    Loading,
    Ready(NameList),
    Failed(String),
}

impl NamesStatus {
    /// The fetched names, or an empty slice until the listing is ready.
    pub fn names(&self) -> &[String] {
        match self {
            NamesStatus::Ready(list) => list.as_slice(),
            _ => &[],
        }
    }
}

/// Current values of the three form fields. Updated continuously as the user
/// edits, so a submit reads modeled state rather than the live controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSelection {
    /// A participant name, or [`api::EVERYONE`] while none has been picked.
    pub name: String,
    pub metric: MetricKind,
    /// Kept verbatim; empty or non-numeric input passes into the URL as-is.
    pub count: String,
}

impl Default for FormSelection {
    fn default() -> Self {
        Self {
            name: api::EVERYONE.to_string(),
            metric: MetricKind::default(),
            count: DEFAULT_COUNT.to_string(),
        }
    }
}

/// The product of a submit: the derived URL plus the caption shown under the
/// image. The caption mirrors the title the server prints on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    pub url: GraphRequestUrl,
    pub caption: String,
}

/// Everything the form owns, replaced wholesale on each action.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    base: String,
    pub names: NamesStatus,
    pub selection: FormSelection,
    /// Most recent submit product; `None` before the first submission.
    pub request: Option<GraphRequest>,
}

impl FormState {
    /// State pointed at the production analytics server.
    pub fn new() -> Self {
        Self::with_base(api::DEFAULT_BASE_URL)
    }

    /// State pointed at an arbitrary base address. Tests use this to stand
    /// in a local server; the app itself never reconfigures the base.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            names: NamesStatus::default(),
            selection: FormSelection::default(),
            request: None,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Options the name selector offers: the fetched list verbatim, order
    /// preserved. Until names arrive (or after a failed fetch) the sentinel
    /// is the only option, so the control is never empty.
    pub fn name_options(&self) -> Vec<String> {
        let names = self.names.names();
        if names.is_empty() {
            vec![api::EVERYONE.to_string()]
        } else {
            names.to_vec()
        }
    }

    fn derive_request(&self) -> GraphRequest {
        let selection = &self.selection;
        GraphRequest {
            url: api::graph_url(&self.base, &selection.name, selection.metric, &selection.count),
            caption: graph_caption(selection),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Caption for a submitted request, matching the server's own chart title.
pub fn graph_caption(selection: &FormSelection) -> String {
    format!(
        "Top {} {} for {}",
        selection.count,
        selection.metric.as_param(),
        selection.name
    )
}

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// The one mount-time name fetch resolved.
    NamesLoaded(NameList),
    /// The fetch failed; the message is surfaced as an inline hint.
    NamesFailed(String),
    NamePicked(String),
    MetricPicked(MetricKind),
    CountEdited(String),
    /// Explicit submission, the only action that re-derives the request.
    Submitted,
}

/// Derives the next state. Pure: same state and action always produce the
/// same result, and the previous value is left untouched.
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();
    match action {
        FormAction::NamesLoaded(names) => next.names = NamesStatus::Ready(names),
        FormAction::NamesFailed(message) => next.names = NamesStatus::Failed(message),
        FormAction::NamePicked(name) => next.selection.name = name,
        FormAction::MetricPicked(metric) => next.selection.metric = metric,
        FormAction::CountEdited(count) => next.selection.count = count,
        FormAction::Submitted => next.request = Some(next.derive_request()),
    }
    next
}
