// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::album::AlbumService;
use crate::artist::ArtistService;
use crate::error::{DeezerError, Result};
use crate::response::{check_response, Response};

/// Base URL for all the API methods.
const DEEZER_API_BASE: &str = "https://api.deezer.com/";

const USER_AGENT: &str = concat!("deezer-client/", env!("CARGO_PKG_VERSION"));

/// Deezer API client.
///
/// Cheap to clone; every call's state is call-local, so one client
/// can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct DeezerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DeezerClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> DeezerClientBuilder {
        DeezerClientBuilder::default()
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Album endpoints.
    pub fn albums(&self) -> AlbumService<'_> {
        AlbumService::new(self)
    }

    /// Artist endpoints.
    pub fn artists(&self) -> ArtistService<'_> {
        ArtistService::new(self)
    }

    /// Build a request for `path` resolved against the base URL.
    ///
    /// The `url` crate strips tabs and newlines while parsing, so
    /// control characters are rejected up front instead of being
    /// silently folded into a valid-looking URL.
    pub fn new_request(&self, method: Method, path: &str) -> Result<Request> {
        if path.chars().any(|c| c.is_ascii_control()) {
            return Err(DeezerError::MalformedUrl(format!(
                "control character in path {path:?}"
            )));
        }

        let url = self
            .base_url
            .join(path)
            .map_err(|e| DeezerError::MalformedUrl(format!("{path}: {e}")))?;

        let mut request = Request::new(method, url);
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(request)
    }

    /// Execute a request and classify the outcome.
    ///
    /// Dropping the returned future aborts the in-flight exchange;
    /// the builder's timeout bounds its duration. Failures before any
    /// status exists surface as [`DeezerError::Transport`]; completed
    /// exchanges go through classification, so a returned [`Response`]
    /// is always safe to hand to the decoder.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        trace!(target: "deezer", "{} {}", method, url);

        let started = Instant::now();
        let outcome = self.http.execute(request).await;
        let elapsed = started.elapsed();

        let raw = match outcome {
            Ok(raw) => {
                debug!(
                    target: "deezer",
                    method = %method,
                    host = url.host_str().unwrap_or(""),
                    status = raw.status().as_u16(),
                    ?elapsed,
                    "exchange completed"
                );
                raw
            }
            Err(error) => {
                debug!(
                    target: "deezer",
                    method = %method,
                    host = url.host_str().unwrap_or(""),
                    error = %error,
                    ?elapsed,
                    "exchange failed"
                );
                return Err(DeezerError::Transport(error));
            }
        };

        let status = raw.status();
        let headers = raw.headers().clone();
        let body = raw.bytes().await.map_err(DeezerError::BodyRead)?;

        check_response(&method, &url, status, &body)?;

        Ok(Response::new(method, url, status, headers, body))
    }

    /// GET `path` and decode the body into a record.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<(T, Response)>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.new_request(Method::GET, path)?;
        let response = self.execute(request).await?;
        let record = response.json()?;
        Ok((record, response))
    }

    /// GET `path` and return the body verbatim.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<(Bytes, Response)> {
        let request = self.new_request(Method::GET, path)?;
        let response = self.execute(request).await?;
        let body = response.bytes();
        Ok((body, response))
    }
}

/// Builder for configuring a Deezer client.
#[derive(Debug, Default)]
pub struct DeezerClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl DeezerClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout duration (default 30 seconds).
    ///
    /// Ignored when a transport is injected with
    /// [`http_client`](Self::http_client); configure the timeout on
    /// that client instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Inject a preconfigured transport for the underlying exchanges.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the Deezer client.
    pub fn build(self) -> Result<DeezerClient> {
        let base_url = self.base_url.as_deref().unwrap_or(DEEZER_API_BASE);
        let mut base_url = Url::parse(base_url)
            .map_err(|e| DeezerError::MalformedUrl(format!("{base_url}: {e}")))?;

        // Url::join treats the last segment as a file unless the base
        // path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
                .user_agent(USER_AGENT)
                .build()
                .map_err(DeezerError::Transport)?,
        };

        Ok(DeezerClient { http, base_url })
    }
}
