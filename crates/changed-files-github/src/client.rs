//! GitHub REST client for the compare endpoint.

use changed_files_core::{CompareCommits, CompareRequest, Comparison};
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::{CompareResponse, GithubError, GithubResult};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Authenticated client for the GitHub REST API.
pub struct GithubClient {
    client: reqwest::Client,
    api_url: Url,
    token: SecretString,
}

impl GithubClient {
    /// Creates a client for the API rooted at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(api_url: &str, token: SecretString) -> GithubResult<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| GithubError::InvalidApiUrl(format!("{api_url}: {e}")))?;

        if api_url.cannot_be_a_base() || !matches!(api_url.scheme(), "http" | "https") {
            return Err(GithubError::InvalidApiUrl(api_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );

        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .build()
            .map_err(GithubError::Client)?;

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    /// Returns the API root.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Builds the compare URL for `request`.
    ///
    /// Each path segment is percent-encoded, so refs containing `/` stay in
    /// one segment.
    #[must_use]
    pub fn compare_url(&self, request: &CompareRequest) -> Url {
        let basehead = format!("{}...{}", request.refs.base, request.refs.head);
        let mut url = self.api_url.clone();

        // `new` rejects URLs that cannot be a base.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "repos",
                request.owner.as_str(),
                request.repo.as_str(),
                "compare",
                basehead.as_str(),
            ]);
        }

        url
    }
}

impl CompareCommits for GithubClient {
    type Error = GithubError;

    async fn compare(&self, request: &CompareRequest) -> GithubResult<Comparison> {
        let url = self.compare_url(request);
        debug!(%url, "comparing commits");

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|source| GithubError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| GithubError::Request {
                url: url.to_string(),
                source,
            })?;

        let parsed = if status.is_success() {
            CompareResponse::from_slice(&body).map_err(|source| GithubError::Decode {
                url: url.to_string(),
                source,
            })?
        } else {
            let parsed = CompareResponse::from_slice(&body).unwrap_or_default();
            warn!(
                status = status.as_u16(),
                message = parsed.message.as_deref().unwrap_or_default(),
                "comparison request was not successful"
            );
            parsed
        };

        debug!(
            status = ?parsed.status,
            files = parsed.files.as_ref().map(Vec::len),
            "comparison received"
        );

        Ok(parsed.into_comparison(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use changed_files_core::CommitRefs;

    use super::*;

    fn client(api_url: &str) -> GithubClient {
        GithubClient::new(api_url, SecretString::from("t0ken".to_string())).unwrap()
    }

    fn request(base: &str, head: &str) -> CompareRequest {
        CompareRequest {
            owner: "octocat".to_string(),
            repo: "Hello-World".to_string(),
            refs: CommitRefs::new(base, head),
        }
    }

    #[test]
    fn test_compare_url() {
        let url = client(DEFAULT_API_URL).compare_url(&request("aaa", "bbb"));
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/compare/aaa...bbb"
        );
    }

    #[test]
    fn test_compare_url_enterprise_prefix() {
        let url = client("https://ghe.example.com/api/v3/").compare_url(&request("a", "b"));
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/octocat/Hello-World/compare/a...b"
        );
    }

    #[test]
    fn test_compare_url_encodes_refs() {
        let url = client(DEFAULT_API_URL).compare_url(&request("main", "feature/x y"));
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/compare/main...feature%2Fx%20y"
        );
    }

    #[test]
    fn test_compare_url_empty_refs() {
        let url = client(DEFAULT_API_URL).compare_url(&request("", ""));
        assert!(url.as_str().ends_with("/compare/..."));
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let result = GithubClient::new("api.github.com", SecretString::from("t".to_string()));
        assert!(matches!(result, Err(GithubError::InvalidApiUrl(_))));
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        let result = GithubClient::new("mailto:octocat@github.com", SecretString::from("t".to_string()));
        assert!(matches!(result, Err(GithubError::InvalidApiUrl(_))));
    }
}
