//! Request building and response resolution shared by every service
//!
//! A [`Requester`] knows the base URL, the API key and the transport. Each
//! service holds one scoped to its path prefix and turns every operation into
//! a single [`Requester::execute`] call.

use std::sync::Arc;

use log::debug;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::pagination::QueryParams;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::{ApiError, ApiErrorBody, Result};

/// Name of the query parameter carrying the API key
pub const API_KEY_PARAM: &str = "api_key";

const USER_AGENT: &str = concat!("stacksmith-rs/", env!("CARGO_PKG_VERSION"));

/// A decoded response together with the raw response metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: Vec<(String, String)>,

    /// Decoded body
    pub data: T,
}

impl<T> Response<T> {
    /// Discard the metadata and keep the decoded body.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Look up a response header (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

struct BaseConfig {
    base_url: Url,
    api_key: String,
    transport: Arc<dyn Transport>,
}

/// Builds and executes requests against the Stacksmith API.
///
/// Cloning is cheap; clones share the base configuration.
#[derive(Clone)]
pub struct Requester {
    base: Arc<BaseConfig>,
    prefix: String,
}

impl std::fmt::Debug for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requester")
            .field("base_url", &self.base.base_url.as_str())
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Requester {
    /// Create a root requester. A trailing slash is added to `base_url` if missing.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> std::result::Result<Self, ApiError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid base URL {}: {}", base_url, e)))?;

        Ok(Self {
            base: Arc::new(BaseConfig {
                base_url,
                api_key: api_key.into(),
                transport,
            }),
            prefix: String::new(),
        })
    }

    /// A requester sharing this configuration with `prefix` appended to the path prefix.
    pub fn scoped(&self, prefix: &str) -> Self {
        Self {
            base: Arc::clone(&self.base),
            prefix: format!("{}{}", self.prefix, prefix),
        }
    }

    /// The base URL all paths are resolved against.
    pub fn base_url(&self) -> &str {
        self.base.base_url.as_str()
    }

    /// Resolve `path` under the prefix and attach the query string.
    ///
    /// Per-call parameters come first; `api_key` is always appended last and
    /// exactly once.
    pub fn url(&self, path: &str, query: &[&dyn QueryParams]) -> std::result::Result<Url, ApiError> {
        let relative = format!("{}{}", self.prefix, path);
        let mut url = self
            .base
            .base_url
            .join(&relative)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid path {}: {}", relative, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for params in query {
                for (key, value) in params.to_query_params() {
                    if key == API_KEY_PARAM {
                        continue;
                    }
                    pairs.append_pair(key, &value);
                }
            }
            pairs.append_pair(API_KEY_PARAM, &self.base.api_key);
        }

        Ok(url)
    }

    /// Build the plain-data request for a call without sending it.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        query: &[&dyn QueryParams],
        body: Option<String>,
    ) -> std::result::Result<HttpRequest, ApiError> {
        let url = self.url(path, query)?;

        let mut headers = vec![
            ("accept".to_string(), "application/json".to_string()),
            ("user-agent".to_string(), USER_AGENT.to_string()),
        ];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Send one request and decode the answer into `T`.
    pub async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        query: &[&dyn QueryParams],
        body: Option<String>,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.build(method.clone(), path, query, body)?;
        debug!("{} {}{}", method, self.prefix, path);

        let (response, transport_error) = match self.base.transport.send(request).await {
            Ok(response) => (response, None),
            Err(err) => (HttpResponse::default(), Some(err)),
        };

        let envelope = match transport_error {
            Some(_) => ApiErrorBody::default(),
            None => error_envelope(&response),
        };
        if let Some(err) = resolve_error(transport_error, response.status, envelope) {
            debug!("{} {}{} failed: {}", method, self.prefix, path, err);
            return Err(err.into());
        }

        debug!("{} {}{} -> {}", method, self.prefix, path, response.status);
        decode(response).map_err(Into::into)
    }

    pub async fn get<T>(&self, path: &str, query: &[&dyn QueryParams]) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.execute(Method::GET, path, query, None).await
    }

    /// POST with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    /// POST without a body (action endpoints).
    pub async fn post_empty<T>(&self, path: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.execute(Method::POST, path, &[], None).await
    }

    /// PATCH with a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.execute(Method::PATCH, path, &[], Some(body)).await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.execute(Method::DELETE, path, &[], None).await
    }
}

/// Pick the effective error of a round trip.
///
/// A transport failure always wins: when it happened, the envelope could not
/// have been read. Otherwise the envelope is an error only if it has content.
pub fn resolve_error(
    transport_error: Option<ApiError>,
    code: u16,
    envelope: ApiErrorBody,
) -> Option<ApiError> {
    if let Some(err) = transport_error {
        return Some(err);
    }
    if envelope.is_empty() {
        None
    } else {
        Some(ApiError::Response {
            code,
            body: envelope,
        })
    }
}

/// Read the error envelope from a received response.
///
/// Non-2xx bodies are read as-is. A 2xx body only counts when it carries an
/// `error` message, so success payloads with a `status` field are not
/// mistaken for errors.
fn error_envelope(response: &HttpResponse) -> ApiErrorBody {
    let envelope: ApiErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
    if response.is_success() && envelope.message.is_empty() {
        ApiErrorBody::default()
    } else {
        envelope
    }
}

/// Decode a response that carried no error envelope.
fn decode<T>(response: HttpResponse) -> std::result::Result<Response<T>, ApiError>
where
    T: DeserializeOwned + Default,
{
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            body: response.text(),
        });
    }

    let data = if response.body.iter().all(u8::is_ascii_whitespace) {
        T::default()
    } else {
        serde_json::from_slice(&response.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?
    };

    Ok(Response {
        status: response.status,
        headers: response.headers,
        data,
    })
}

/// Serialize a request body as JSON.
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> std::result::Result<String, ApiError> {
    serde_json::to_string(body)
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to encode body: {}", e)))
}

/// Percent-encode a caller-supplied value for use as one path segment.
///
/// Empty and dot-only values are rejected since they would change the
/// resolved path.
pub fn segment(value: &str) -> std::result::Result<String, ApiError> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid path segment: {:?}",
            value
        )));
    }

    Ok(urlencoding::encode(value).into_owned())
}
