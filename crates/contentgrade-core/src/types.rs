//! Request and result types for a single grading call.
//!
//! Both values live only for the duration of one request. [`Score`] carries
//! the "not available" sentinel explicitly instead of overloading a number.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Incoming grading request body.
///
/// Both fields are optional on the wire; at least one must resolve to
/// non-empty text before grading can proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRequest {
    /// Raw text to grade verbatim.
    #[serde(default)]
    pub content: Option<String>,
    /// Page to fetch and grade when `content` is absent or empty.
    #[serde(default)]
    pub url: Option<String>,
}

impl GradeRequest {
    /// Builds a request carrying inline content only.
    pub fn from_content(content: impl Into<String>) -> Self {
        GradeRequest {
            content: Some(content.into()),
            url: None,
        }
    }

    /// Builds a request carrying a URL only.
    pub fn from_url(url: impl Into<String>) -> Self {
        GradeRequest {
            content: None,
            url: Some(url.into()),
        }
    }

    /// Returns `content` when it is present and non-empty.
    ///
    /// Whitespace-only content counts as present.
    pub fn inline_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns `url` when it is present and non-empty.
    pub fn target_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// The text that will be embedded in the grading prompt, with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInput {
    /// Content supplied directly in the request.
    Inline(String),
    /// Text extracted from a fetched page.
    Fetched { url: String, text: String },
}

impl ResolvedInput {
    /// Wraps fetched page text, rejecting pages that stripped down to nothing.
    pub fn fetched(url: impl Into<String>, text: String) -> Result<Self, CoreError> {
        if text.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        Ok(ResolvedInput::Fetched {
            url: url.into(),
            text,
        })
    }

    /// The text to grade.
    pub fn text(&self) -> &str {
        match self {
            ResolvedInput::Inline(text) => text,
            ResolvedInput::Fetched { text, .. } => text,
        }
    }

    /// Short label for logs: `inline` or the fetched URL.
    pub fn source(&self) -> &str {
        match self {
            ResolvedInput::Inline(_) => "inline",
            ResolvedInput::Fetched { url, .. } => url,
        }
    }
}

/// Total score extracted from the model reply.
///
/// Serializes as a JSON number for [`Score::Points`] and as the string
/// `"N/A"` for [`Score::NotAvailable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Points(u16),
    NotAvailable,
}

const NOT_AVAILABLE: &str = "N/A";

impl Score {
    pub fn points(&self) -> Option<u16> {
        match self {
            Score::Points(p) => Some(*p),
            Score::NotAvailable => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Points(p) => write!(f, "{}", p),
            Score::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Points(p) => serializer.serialize_u16(*p),
            Score::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Points(u16),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Points(p) => Ok(Score::Points(p)),
            Raw::Text(text) if text == NOT_AVAILABLE => Ok(Score::NotAvailable),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", got \"{}\"",
                NOT_AVAILABLE, text
            ))),
        }
    }
}

/// Parsed grade returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    pub score: Score,
    /// Bullet lines copied verbatim from the reply, in order, at most six.
    pub feedback: Vec<String>,
}
