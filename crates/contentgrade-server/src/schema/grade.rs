//! Wire types for `POST /api/grade`.

use serde::{Deserialize, Serialize};

pub use contentgrade_core::{GradeRequest, GradeResult, Score};

/// Body of every error response.
///
/// `details` is only present for upstream failures that carry a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
