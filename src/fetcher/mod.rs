/// Release Fetcher — asks the upstream API for a project's latest release.
///
/// One inbound request maps to exactly one outbound GET. There is no retry,
/// no cache and no authentication.

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::ServiceConfig;
use crate::error::FetchError;
use crate::models::release::UpstreamRelease;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Shared HTTP client plus the upstream base URL.
///
/// Cheap to share behind an `Arc`; holds no per-request state.
#[derive(Debug, Clone)]
pub struct ReleaseFetcher {
    client: Client,
    base_url: Url,
}

impl ReleaseFetcher {
    pub fn new(config: &ServiceConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReleaseFetcher {
            client: builder.build()?,
            base_url: config.upstream_base_url.clone(),
        })
    }

    /// URL of the latest release of `owner/repo`, with both names
    /// percent-encoded as single path segments.
    pub fn release_url(&self, owner: &str, repo: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "releases", "latest"]);
        Ok(url)
    }

    /// Fetch the `tag_name` of the latest release, verbatim.
    ///
    /// The upstream status code does not change the outcome: a 404 error
    /// body decodes like any other object and yields an empty tag.
    pub async fn fetch_latest_tag(&self, owner: &str, repo: &str) -> Result<String, FetchError> {
        let url = self.release_url(owner, repo)?;
        debug!(%url, "fetching latest release");

        let resp = self
            .client
            .get(url.clone())
            .header(USER_AGENT, concat!("release-tag-api/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "upstream answered with a non-success status");
        }

        let body = resp.bytes().await?;
        let release: UpstreamRelease = serde_json::from_slice(&body)?;

        Ok(release.tag_name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mockito::Server;

    use super::*;

    fn fetcher_for(base: &str) -> ReleaseFetcher {
        let mut vars = HashMap::new();
        vars.insert("UPSTREAM_API_URL".to_string(), base.to_string());
        let config = ServiceConfig::from_map(&vars).expect("config");
        ReleaseFetcher::new(&config).expect("fetcher")
    }

    #[test]
    fn test_release_url_uses_fixed_path_template() {
        let fetcher = fetcher_for("https://api.github.com");
        let url = fetcher.release_url("golang", "go").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/golang/go/releases/latest"
        );
    }

    #[test]
    fn test_release_url_keeps_base_path_prefix() {
        let fetcher = fetcher_for("https://ghe.example.com/api/v3/");
        let url = fetcher.release_url("org", "tool").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/org/tool/releases/latest"
        );
    }

    #[test]
    fn test_release_url_encodes_reserved_characters() {
        let fetcher = fetcher_for("https://api.github.com");
        let url = fetcher.release_url("a/b", "c?d=e #f").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/a%2Fb/c%3Fd=e%20%23f/releases/latest"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[tokio::test]
    async fn test_returns_tag_name_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/golang/go/releases/latest")
            .match_header("user-agent", mockito::Matcher::Regex("^release-tag-api/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name":"go1.22.0","name":"go1.22.0","draft":false}"#)
            .create_async()
            .await;

        let tag = fetcher_for(&server.url())
            .fetch_latest_tag("golang", "go")
            .await
            .unwrap();

        assert_eq!(tag, "go1.22.0");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_body_yields_empty_tag() {
        // Upstream status is not inspected; a 404 body decodes to an empty tag.
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/nobody/nothing/releases/latest")
            .with_status(404)
            .with_body(r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#)
            .create_async()
            .await;

        let tag = fetcher_for(&server.url())
            .fetch_latest_tag("nobody", "nothing")
            .await
            .unwrap();

        assert_eq!(tag, "");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/golang/go/releases/latest")
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let err = fetcher_for(&server.url())
            .fetch_latest_tag("golang", "go")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let err = fetcher_for("http://127.0.0.1:1")
            .fetch_latest_tag("golang", "go")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    }
}
