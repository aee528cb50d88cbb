use serde::{Deserialize, Serialize};

pub const MSG_OWNER_OR_REPO_EMPTY: &str = "Owner Or Repo Is Empty";
pub const MSG_TAG_NOT_FOUND: &str = "Tag Not Found";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// JSON body returned by the release tag endpoint.
///
/// One of the two fields carries the outcome and the other stays empty.
/// Both keys are always serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiResponse {
    /// Tag name of the latest release.
    pub tag: String,
    /// Human-readable reason when no tag is returned.
    pub message: String,
}

impl ApiResponse {
    pub fn found(tag: impl Into<String>) -> Self {
        ApiResponse {
            tag: tag.into(),
            message: String::new(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            tag: String::new(),
            message: message.into(),
        }
    }
}
