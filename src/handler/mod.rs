/// Request Handler — turns an inbound query into a status and JSON body.
///
/// Shared by the Vercel function in `api/latest.rs` and the standalone
/// axum server, so both surfaces answer identically.

use http::StatusCode;
use tracing::{debug, info, warn};

use crate::fetcher::ReleaseFetcher;
use crate::models::query::ReleaseQuery;
use crate::models::response::{
    ApiResponse, MSG_INTERNAL_SERVER_ERROR, MSG_OWNER_OR_REPO_EMPTY, MSG_TAG_NOT_FOUND,
};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Outcome of one request, before it is written to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: ApiResponse,
}

impl Reply {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

/// Resolve the latest release tag for the `owner`/`repo` in `raw_query`.
///
/// | outcome                      | status | body                      |
/// |------------------------------|--------|---------------------------|
/// | owner or repo missing/empty  | 400    | `Owner Or Repo Is Empty`  |
/// | network or decode failure    | 500    | `Internal Server Error`   |
/// | empty tag                    | 200    | `Tag Not Found`           |
/// | tag                          | 200    | `tag` set                 |
pub async fn handle(fetcher: &ReleaseFetcher, raw_query: Option<&str>) -> Reply {
    let query = match ReleaseQuery::from_query(raw_query) {
        Ok(query) => query,
        Err(err) => {
            debug!(%err, "rejecting request");
            return Reply {
                status: StatusCode::BAD_REQUEST,
                body: ApiResponse::message(MSG_OWNER_OR_REPO_EMPTY),
            };
        }
    };

    match fetcher.fetch_latest_tag(&query.owner, &query.repo).await {
        Err(err) => {
            warn!(owner = %query.owner, repo = %query.repo, error = %err, "release lookup failed");
            Reply {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ApiResponse::message(MSG_INTERNAL_SERVER_ERROR),
            }
        }
        Ok(tag) if tag.is_empty() => {
            info!(owner = %query.owner, repo = %query.repo, "no release tag");
            Reply {
                status: StatusCode::OK,
                body: ApiResponse::message(MSG_TAG_NOT_FOUND),
            }
        }
        Ok(tag) => {
            info!(owner = %query.owner, repo = %query.repo, %tag, "release tag found");
            Reply {
                status: StatusCode::OK,
                body: ApiResponse::found(tag),
            }
        }
    }
}
