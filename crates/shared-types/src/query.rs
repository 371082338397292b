use std::fmt;

use crate::Interest;

/// Query string of the contact page.
///
/// Only `type` is meaningful. Marketing links use it to pre-select the
/// interest (`?type=student`, `?type=partner`, `?type=recruiter`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactQuery {
    pub kind: Option<String>,
}

impl ContactQuery {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
        }
    }

    /// Interest selected by the `type` parameter, if it names one.
    pub fn interest(&self) -> Option<Interest> {
        self.kind.as_deref().and_then(Interest::from_query_type)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

impl From<&str> for ContactQuery {
    fn from(query: &str) -> Self {
        let kind = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| decode_component(key) == "type")
            .map(|(_, value)| decode_component(value));
        Self { kind }
    }
}

impl fmt::Display for ContactQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "type={}", urlencoding::encode(kind)),
            None => Ok(()),
        }
    }
}
