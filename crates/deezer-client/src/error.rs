// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, DeezerError>;

/// Error type returned by the Deezer API client.
#[derive(Debug, Error)]
pub enum DeezerError {
    /// A resource path or base URL could not be turned into a request URL.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// The exchange failed before any status code existed: DNS
    /// failure, refused connection, timeout, canceled call.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be fully read.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The exchange completed but was classified as a failure: a
    /// non-2xx status, an API error embedded in a 2xx body, or a body
    /// that did not decode into the requested record.
    #[error(transparent)]
    Response(Box<ErrorResponse>),
}

impl From<ErrorResponse> for DeezerError {
    fn from(response: ErrorResponse) -> Self {
        DeezerError::Response(Box::new(response))
    }
}

/// The single error entity produced for every classified failure.
///
/// `error` is populated when the service reported a logical failure
/// inside a 2xx body. `carrier` holds the underlying parse cause when
/// a successful body failed to decode into the requested record.
#[derive(Debug)]
pub struct ErrorResponse {
    /// Method of the request that produced this error.
    pub method: Method,
    /// URL of the request that produced this error.
    pub url: Url,
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Human-readable message; the raw body text for HTTP status and
    /// decode errors.
    pub message: String,
    /// Error returned by the API on a successful HTTP exchange.
    pub error: Option<ApiError>,
    /// Carries any other error up the chain.
    pub carrier: Option<serde_json::Error>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.method,
            self.url,
            self.status.as_u16(),
            self.message
        )?;
        if let Some(error) = &self.error {
            write!(f, " {error}")?;
        }
        if let Some(carrier) = &self.carrier {
            write!(f, " {carrier}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.carrier
            .as_ref()
            .map(|carrier| carrier as &(dyn std::error::Error + 'static))
    }
}

/// Structured error the API embeds in a 2xx JSON body.
///
/// See <https://developers.deezer.com/api/errors>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error class reported by the API (e.g. "DataException").
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_response() -> ErrorResponse {
        ErrorResponse {
            method: Method::GET,
            url: Url::parse("https://api.deezer.com/album/1").unwrap(),
            status: StatusCode::OK,
            message: "boom".to_string(),
            error: None,
            carrier: None,
        }
    }

    #[test]
    fn display_reports_method_url_status_and_message() {
        let err = error_response();
        assert_eq!(
            err.to_string(),
            "GET https://api.deezer.com/album/1: 200 boom"
        );
    }

    #[test]
    fn display_appends_api_error_and_carrier() {
        let mut err = error_response();
        err.error = Some(ApiError {
            kind: "DataException".to_string(),
            message: "no data".to_string(),
            code: 800,
        });
        err.carrier = serde_json::from_str::<serde_json::Value>("{").err();

        let rendered = err.to_string();
        assert!(rendered.contains("DataException (800): no data"));
        assert!(rendered.contains("EOF"));
    }

    #[test]
    fn source_is_the_carrier() {
        use std::error::Error as _;

        let mut err = error_response();
        assert!(err.source().is_none());

        err.carrier = serde_json::from_str::<serde_json::Value>("{").err();
        assert!(err.source().is_some());
    }
}
