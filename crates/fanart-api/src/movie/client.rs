//! `FanartClient` - fanart.tv movie artwork API client implementation.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use tracing::instrument;
use url::Url;

use super::api::MovieArtApi;
use super::params::{MovieArtParams, ResponseFormat};

/// Default base URL for the movie artwork webservice.
///
/// Must end with a trailing slash; composed URLs append path segments
/// directly to it.
const DEFAULT_BASE_URL: &str = "http://api.fanart.tv/webservice/movie/";

/// Default User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("fanart-api/", env!("CARGO_PKG_VERSION"));

/// fanart.tv movie artwork API client.
///
/// Immutable after construction; one outbound request per call and no
/// shared mutable state, so a single instance is safe to use from
/// multiple threads.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FanartClient {
    /// HTTP client (reqwest blocking, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key, inserted into the URL verbatim.
    api_key: String,
    /// Response serialization requested from the service.
    response_format: ResponseFormat,
}

/// Builder for `FanartClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FanartClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    response_format: Option<ResponseFormat>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl FanartClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            response_format: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    ///
    /// The URL must end with a trailing slash.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    ///
    /// The key is not validated; an empty key yields an empty path
    /// segment that the remote server rejects.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the response serialization (required).
    #[must_use]
    pub const fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Sets the User-Agent (default: `fanart-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the request timeout (default: transport default).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `response_format` is not set.
    /// - `reqwest::blocking::Client` build fails.
    pub fn build(self) -> Result<FanartClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let response_format = self.response_format.context("response_format is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let mut client_builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let http_client = client_builder
            .build()
            .context("failed to build HTTP client")?;

        Ok(FanartClient {
            http_client,
            base_url,
            api_key,
            response_format,
        })
    }
}

impl FanartClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> FanartClientBuilder {
        FanartClientBuilder::new()
    }

    /// Composes the request URL for a movie artwork lookup.
    ///
    /// Default parameters select the short template; any deviation
    /// selects the full template, which carries the format segment
    /// twice. That repetition is the remote API's literal URL shape and
    /// must not be deduplicated. `api_key` and `id` are substituted
    /// verbatim, without percent-encoding.
    fn movie_url(&self, id: &str, params: &MovieArtParams) -> String {
        let base = self.base_url.as_str();
        let key = &self.api_key;
        let format = self.response_format.as_segment();

        if params.is_service_default() {
            return format!("{base}{key}/{id}/{format}/");
        }

        format!(
            "{base}{key}/{format}/{category}/{sort}/{limit}/{format}/",
            category = params.category.as_segment(),
            sort = params.sort.ordinal(),
            limit = params.limit.ordinal(),
        )
    }
}

impl MovieArtApi for FanartClient {
    #[instrument(skip_all)]
    fn fetch_by_movie_id(&self, id: &str, params: &MovieArtParams) -> Result<String> {
        let url = self.movie_url(id, params);

        tracing::debug!(url = %url, "fanart API request");

        let response = self
            .http_client
            .get(&url)
            .send()
            .with_context(|| format!("request failed: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            bail!("fanart API error (HTTP {status}): {body}");
        }

        response
            .text()
            .with_context(|| format!("failed to read response body: {url}"))
    }
}
