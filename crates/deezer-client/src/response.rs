// SPDX-License-Identifier: GPL-3.0-or-later

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::{ApiError, DeezerError, ErrorResponse, Result};

/// Wrapper around a completed, classified HTTP exchange.
///
/// The body has already been read into memory by the time a
/// `Response` exists, so dropping it releases everything; there is no
/// stream left to close.
#[derive(Debug, Clone)]
pub struct Response {
    method: Method,
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,

    // TODO: populate these from the list envelope's total/prev/next
    // once paginated navigation is exposed on the services.
    /// Total number of records in a paginated listing.
    pub total: Option<u64>,
    /// URL of the previous page of a paginated listing.
    pub prev_page: Option<String>,
    /// URL of the next page of a paginated listing.
    pub next_page: Option<String>,
}

impl Response {
    pub(crate) fn new(
        method: Method,
        url: Url,
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
    ) -> Self {
        Self {
            method,
            url,
            status,
            headers,
            body,
            total: None,
            prev_page: None,
            next_page: None,
        }
    }

    /// Method of the request that produced this response.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL the exchange was made against.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP status of the exchange.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body bytes, exactly as received.
    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    /// Consume the response, keeping only the body bytes.
    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Decode the body into a record.
    ///
    /// An empty body decodes to the record's default value; some
    /// endpoints legitimately return nothing for certain inputs.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.body.is_empty() {
            return Ok(T::default());
        }

        serde_json::from_slice(&self.body).map_err(|carrier| {
            DeezerError::from(ErrorResponse {
                method: self.method.clone(),
                url: self.url.clone(),
                status: self.status,
                message: String::from_utf8_lossy(&self.body).into_owned(),
                error: None,
                carrier: Some(carrier),
            })
        })
    }
}

/// Shape the API uses to report logical failures inside 2xx bodies.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<ApiError>,
}

/// Decide whether a completed exchange is a success.
///
/// The API reports some failures (e.g. "no data for this id") with
/// status 200 and an `error` object in the JSON body, so every 2xx
/// body is probed for that shape before it reaches the decoder. A 2xx
/// body that does not decode as the envelope counts as success; the
/// typed decode reports malformed JSON on its own. Outside 2xx the
/// exchange always fails, with the verbatim body text as the message.
pub(crate) fn check_response(
    method: &Method,
    url: &Url,
    status: StatusCode,
    body: &Bytes,
) -> Result<()> {
    if status.is_success() {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            if let Some(error) = envelope.error {
                return Err(ErrorResponse {
                    method: method.clone(),
                    url: url.clone(),
                    status,
                    message: envelope.message.unwrap_or_default(),
                    error: Some(error),
                    carrier: None,
                }
                .into());
            }
        }
        return Ok(());
    }

    Err(ErrorResponse {
        method: method.clone(),
        url: url.clone(),
        status,
        message: String::from_utf8_lossy(body).into_owned(),
        error: None,
        carrier: None,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Record {
        #[serde(default)]
        key: String,
    }

    fn exchange(status: u16, body: &str) -> (Method, Url, StatusCode, Bytes) {
        (
            Method::GET,
            Url::parse("https://api.deezer.com/album/1").unwrap(),
            StatusCode::from_u16(status).unwrap(),
            Bytes::copy_from_slice(body.as_bytes()),
        )
    }

    fn check(status: u16, body: &str) -> Result<()> {
        let (method, url, status, body) = exchange(status, body);
        check_response(&method, &url, status, &body)
    }

    fn response(status: u16, body: &str) -> Response {
        let (method, url, status, body) = exchange(status, body);
        Response::new(method, url, status, HeaderMap::new(), body)
    }

    #[test]
    fn success_body_without_error_key_is_ok() {
        assert!(check(200, r#"{"id": 44132881}"#).is_ok());
    }

    #[test]
    fn empty_success_body_is_ok() {
        assert!(check(200, "").is_ok());
    }

    #[test]
    fn non_object_success_body_is_ok() {
        // Arrays and scalars cannot carry the error envelope.
        assert!(check(200, "[1, 2, 3]").is_ok());
        assert!(check(200, r#""plain string""#).is_ok());
    }

    #[test]
    fn null_error_member_is_ok() {
        assert!(check(200, r#"{"error": null, "message": "fine"}"#).is_ok());
    }

    #[test]
    fn embedded_api_error_fails_classification() {
        let err = check(
            200,
            r#"{"error":{"type":"DataException","message":"no data","code":800}}"#,
        )
        .unwrap_err();

        match err {
            DeezerError::Response(response) => {
                let error = response.error.expect("expected an API error");
                assert_eq!(error.kind, "DataException");
                assert_eq!(error.message, "no data");
                assert_eq!(error.code, 800);
            }
            other => panic!("expected a response error, got {other:?}"),
        }
    }

    #[test]
    fn non_success_status_carries_raw_body() {
        let err = check(404, "not found here").unwrap_err();

        match err {
            DeezerError::Response(response) => {
                assert_eq!(response.status.as_u16(), 404);
                assert_eq!(response.message, "not found here");
                assert!(response.error.is_none());
            }
            other => panic!("expected a response error, got {other:?}"),
        }
    }

    #[test]
    fn non_success_body_is_not_parsed_as_envelope() {
        // Outside 2xx the body stays verbatim text even when it
        // happens to be a valid error envelope.
        let body = r#"{"error":{"type":"Exception","message":"x","code":4}}"#;
        let err = check(500, body).unwrap_err();

        match err {
            DeezerError::Response(response) => {
                assert_eq!(response.message, body);
                assert!(response.error.is_none());
            }
            other => panic!("expected a response error, got {other:?}"),
        }
    }

    #[test]
    fn decode_reads_the_buffered_body() {
        let decoded: Record = response(200, r#"{"key": "value"}"#).json().unwrap();
        assert_eq!(decoded, Record { key: "value".to_string() });
    }

    #[test]
    fn decode_of_empty_body_yields_default() {
        let decoded: Record = response(200, "").json().unwrap();
        assert_eq!(decoded, Record::default());
    }

    #[test]
    fn decode_failure_keeps_body_and_carrier() {
        let err = response(200, r#"{"key": "value""#).json::<Record>().unwrap_err();

        match err {
            DeezerError::Response(response) => {
                assert_eq!(response.message, r#"{"key": "value""#);
                assert!(response.error.is_none());
                assert!(response.carrier.is_some());
            }
            other => panic!("expected a response error, got {other:?}"),
        }
    }
}
