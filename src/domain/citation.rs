//! Citation records referenced by claims.

use serde::{Deserialize, Serialize};

use super::{nullable_string, nullable_vec};

/// Citation identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationId(String);

impl CitationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CitationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CitationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An external source believed to support one or more claims
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Full text of the source
    #[serde(default, deserialize_with = "nullable_string")]
    pub fulltext: String,

    /// Link to the original source
    #[serde(default, deserialize_with = "nullable_string")]
    pub link: String,

    /// Short summary of the source
    #[serde(default, deserialize_with = "nullable_string")]
    pub summary: String,

    /// Source type tags (e.g. "Academic", "Government")
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<String>,
}

impl Citation {
    /// First `max_chars` chars of the full text, with an ellipsis if truncated
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.fulltext.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}
