use reqwest::blocking::{Client, Request};
use reqwest::{StatusCode, Url};
use serde_json::Value;

/// Thin client for the TMDB HTTP API.
///
/// Every call is a single blocking GET with the `api_key` query parameter
/// attached. No retries, no timeout overrides beyond the transport defaults.
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

impl TmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    /// Fetch `resource` (e.g. `movie/603`) and parse the body as JSON.
    ///
    /// Non-2xx responses become [`FetchError::Http`] carrying the status and
    /// the body text; transport failures become [`FetchError::Transport`].
    pub fn fetch(
        &self,
        resource: &str,
        append_to_response: Option<&str>,
    ) -> Result<Value, FetchError> {
        let request = self.request(resource, append_to_response)?;
        tracing::debug!(target: "api", "GET {}", request.url().path());

        let response = self.client.execute(request)?;
        let status = response.status();
        let body = response.text()?;
        tracing::debug!(target: "api", "{} -> {} ({} bytes)", resource, status, body.len());

        if !status.is_success() {
            return Err(FetchError::Http { status, body });
        }

        serde_json::from_str(&body).map_err(FetchError::InvalidJson)
    }

    /// The full URL `fetch` would request, query parameters included.
    pub fn request_url(
        &self,
        resource: &str,
        append_to_response: Option<&str>,
    ) -> Result<Url, FetchError> {
        Ok(self.request(resource, append_to_response)?.url().clone())
    }

    fn request(
        &self,
        resource: &str,
        append_to_response: Option<&str>,
    ) -> Result<Request, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, resource.trim_start_matches('/'));

        let mut builder = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())]);

        if let Some(append) = append_to_response {
            builder = builder.query(&[("append_to_response", append)]);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_includes_api_key_exactly_once() {
        let client = TmdbClient::new("https://example.test/3", "abc123");
        let url = client
            .request_url("movie/603", Some("videos,credits,images"))
            .unwrap();

        let api_keys: Vec<_> = url
            .query_pairs()
            .filter(|(key, _)| key == "api_key")
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(api_keys, vec!["abc123"]);
    }

    #[test]
    fn request_url_joins_base_and_resource() {
        let client = TmdbClient::new("https://example.test/3/", "abc123");
        let url = client.request_url("/tv/1396", None).unwrap();

        assert_eq!(url.path(), "/3/tv/1396");
        assert_eq!(url.query(), Some("api_key=abc123"));
    }

    #[test]
    fn append_to_response_is_optional() {
        let client = TmdbClient::new("https://example.test/3", "abc123");

        let without = client.request_url("movie/popular", None).unwrap();
        assert!(!without.query().unwrap().contains("append_to_response"));

        let with = client
            .request_url("movie/603", Some("videos,credits,images"))
            .unwrap();
        let append: Vec<_> = with
            .query_pairs()
            .filter(|(key, _)| key == "append_to_response")
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(append, vec!["videos,credits,images"]);
    }
}
