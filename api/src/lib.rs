//! Client surface for the remote chat-analytics service.
//!
//! The service is an external collaborator reached through exactly two
//! endpoints: `GET {base}getNames` returns the selectable participant names
//! as a JSON array of strings, and `GET {base}graph?name=&type=&count=`
//! returns a pre-rendered graph image. This crate owns the base address, the
//! name-listing fetch, and the derivation of graph request URLs; it renders
//! nothing and computes no analytics.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of the production analytics server. Paths below are concatenated
/// onto it verbatim, so it must keep its trailing slash.
pub const DEFAULT_BASE_URL: &str = "http://35.236.58.233/";

/// Pseudo-participant the server aggregates across the whole conversation.
/// `getNames` returns it as the first entry, and the form submits it when no
/// participant has been picked.
pub const EVERYONE: &str = "everyone";

const NAMES_PATH: &str = "getNames";
const GRAPH_PATH: &str = "graph";

/// Ordered sequence of selectable participant names, exactly as the server
/// returned them. Fetched once per mount and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// Metric families the server can chart. Wire values are the lowercase
/// names; the order here is the order the form offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    #[default]
    Words,
    Stickers,
    Mentions,
    Reactions,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Words,
        MetricKind::Stickers,
        MetricKind::Mentions,
        MetricKind::Reactions,
    ];

    /// Value sent as the `type` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            MetricKind::Words => "words",
            MetricKind::Stickers => "stickers",
            MetricKind::Mentions => "mentions",
            MetricKind::Reactions => "reactions",
        }
    }

    /// Label shown in the metric selector.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Words => "Words",
            MetricKind::Stickers => "Stickers",
            MetricKind::Mentions => "Mentions",
            MetricKind::Reactions => "Reactions",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.as_param() == value)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// The derived graph request address. Opaque to everything downstream: the
/// viewer hands it to an image element and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequestUrl(String);

impl GraphRequestUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphRequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats the graph endpoint URL for the given field values.
///
/// Values pass through verbatim, without escaping or validation. The server
/// owns validation; a value it rejects just renders as a blank image.
pub fn graph_url(base: &str, name: &str, metric: MetricKind, count: &str) -> GraphRequestUrl {
    GraphRequestUrl(format!(
        "{base}{GRAPH_PATH}?name={name}&type={metric}&count={count}"
    ))
}

/// Failures the name-listing fetch can surface. The form maps these to an
/// inline hint; nothing retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response, whether the connection
    /// failed outright or the server answered with a non-success status.
    #[error("name listing request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a JSON array of strings.
    #[error("name listing returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the participant names from `{base}getNames`, preserving the
/// server's order. Issued once per form mount; there is no retry policy.
pub async fn fetch_names(base: &str) -> Result<NameList, ApiError> {
    let url = format!("{base}{NAMES_PATH}");
    tracing::debug!(%url, "requesting participant names");

    let body = reqwest::get(&url)
        .await?
        .error_for_status()?
        .text()
        .await?;
    let names = parse_names(&body)?;

    tracing::debug!(count = names.len(), "participant names received");
    Ok(names)
}

/// Decodes a name-listing response body.
pub fn parse_names(body: &str) -> Result<NameList, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_url_formats_parameters_in_order() {
        let url = graph_url(DEFAULT_BASE_URL, "Alice", MetricKind::Words, "20");
        assert_eq!(
            url.as_str(),
            "http://35.236.58.233/graph?name=Alice&type=words&count=20"
        );
    }

    #[test]
    fn graph_url_passes_values_through_verbatim() {
        // No escaping and no validation: odd names and empty counts go out
        // exactly as the fields held them.
        let url = graph_url("http://localhost:8080/", "Mary Ann", MetricKind::Reactions, "");
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/graph?name=Mary Ann&type=reactions&count="
        );
    }

    #[test]
    fn default_base_keeps_trailing_slash() {
        // Derivation concatenates paths verbatim, so the literal must end
        // with the separator.
        assert!(DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn parse_names_preserves_order() {
        let names = parse_names(r#"["everyone","Alice","Bob"]"#).expect("valid listing");
        let got: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(got, ["everyone", "Alice", "Bob"]);
    }

    #[test]
    fn parse_names_rejects_non_array_bodies() {
        assert!(parse_names(r#"{"names":["Alice"]}"#).is_err());
        assert!(parse_names("not json").is_err());
    }

    #[test]
    fn metric_params_round_trip() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_param(kind.as_param()), Some(kind));
        }
        assert_eq!(MetricKind::from_param("emoji"), None);
    }
}
