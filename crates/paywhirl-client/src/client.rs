//! PayWhirl HTTP client implementation.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::params::{flatten, ParamEncoding, Params};

/// Redirects followed before a request fails.
const MAX_REDIRECTS: usize = 10;

/// PayWhirl API client.
///
/// Holds the credentials and base URL and sends every call through [`get`]
/// or [`post`]. Cloning is cheap and clones share one connection pool.
///
/// [`get`]: ApiClient::get
/// [`post`]: ApiClient::post
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    post_encoding: ParamEncoding,
}

impl ApiClient {
    /// Create a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if either credential is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_secret))
    }

    /// Create a client against a different base URL (staging, tests).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if either credential is empty or
    /// the base URL is invalid.
    pub fn with_base_url(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_secret).with_base_url(base_url))
    }

    /// Create a client from configuration loaded by [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the configuration cannot be
    /// loaded or is incomplete.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from explicit configuration.
    ///
    /// No request is sent; invalid configuration is reported here instead of
    /// as an authentication failure on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert("api_key", credential_header("api_key", &config.api_key)?);
        headers.insert(
            "api_secret",
            credential_header("api_secret", &config.api_secret)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("paywhirl-rust/", env!("CARGO_PKG_VERSION")))
            .redirect(same_origin_redirects())
            .build()
            .map_err(|e| ClientError::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            post_encoding: config.post_encoding,
        })
    }

    /// The base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET request and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response arrives,
    /// [`ClientError::Api`] for a non-success status, and
    /// [`ClientError::Decode`] if the body is not JSON.
    pub async fn get(&self, path: &str, params: Params) -> Result<Value> {
        self.get_as(path, params).await
    }

    /// Send a POST request with the configured encoding and return the
    /// decoded JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn post(&self, path: &str, params: Params) -> Result<Value> {
        self.post_as(path, params).await
    }

    /// Send a POST request with an explicit parameter encoding.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn post_with(
        &self,
        path: &str,
        params: Params,
        encoding: ParamEncoding,
    ) -> Result<Value> {
        self.send(Method::POST, path, &params, encoding).await
    }

    /// Send a GET request and decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`]; a body that does not match `T` is a
    /// [`ClientError::Decode`].
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str, params: Params) -> Result<T> {
        self.send(Method::GET, path, &params, ParamEncoding::Query).await
    }

    /// Send a POST request and decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_as`].
    pub async fn post_as<T: DeserializeOwned>(&self, path: &str, params: Params) -> Result<T> {
        self.send(Method::POST, path, &params, self.post_encoding).await
    }

    /// Decode a raw response into one of the typed shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the value does not match `T`.
    pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
        let body = value.to_string();
        serde_json::from_value(value).map_err(|source| ClientError::Decode { body, source })
    }

    /// Join the base URL and a path with exactly one slash.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        encoding: ParamEncoding,
    ) -> Result<T> {
        let url = self.url(path);

        let request = self.client.request(method.clone(), &url);
        let request = match encoding {
            ParamEncoding::Query => request.query(&flatten(params)),
            ParamEncoding::Form => request.form(&flatten(params)),
            ParamEncoding::Json => request.json(params),
        };

        tracing::debug!(
            method = %method,
            url = %url,
            encoding = %encoding,
            param_count = params.len(),
            "Sending PayWhirl request"
        );

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "PayWhirl response received"
        );

        if !status.is_success() {
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "PayWhirl API returned an error"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            body: String::from_utf8_lossy(&bytes).into_owned(),
            source,
        })
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("post_encoding", &self.post_encoding)
            .finish_non_exhaustive()
    }
}

/// Follow redirects only while they stay on the origin that was given the
/// credentials. A redirect elsewhere is returned to the caller as the 3xx
/// response itself.
fn same_origin_redirects() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        let same_origin = attempt
            .previous()
            .first()
            .is_some_and(|first| first.origin() == attempt.url().origin());
        if same_origin {
            attempt.follow()
        } else {
            tracing::warn!(
                location = %attempt.url(),
                "Not following PayWhirl redirect to another origin"
            );
            attempt.stop()
        }
    })
}

/// Build a sensitive header value for a credential. The value is sent as
/// given.
fn credential_header(name: &str, value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        ClientError::Configuration(format!("{name} contains characters not allowed in a header"))
    })?;
    header.set_sensitive(true);
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::with_base_url("key", "secret", base_url).unwrap()
    }

    #[test]
    fn client_creation() {
        let client = ApiClient::new("key", "secret").unwrap();
        assert_eq!(client.base_url(), "https://api.paywhirl.com");
        assert_eq!(client.post_encoding, ParamEncoding::Query);
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = client("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn url_joins_with_single_slash() {
        let client = client("http://localhost:8080/");
        assert_eq!(client.url("customers"), "http://localhost:8080/customers");
        assert_eq!(client.url("/customer/5"), "http://localhost:8080/customer/5");
        assert_eq!(client.url("a//b"), "http://localhost:8080/a//b");
    }

    #[test]
    fn empty_credentials_rejected() {
        assert!(matches!(
            ApiClient::new("", "secret"),
            Err(ClientError::Configuration(_))
        ));
        assert!(matches!(
            ApiClient::new("key", ""),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn credentials_with_newlines_rejected() {
        assert!(matches!(
            ApiClient::new("key\nInjected: yes", "secret"),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn credentials_are_sent_verbatim() {
        let header = credential_header("api_key", " pwpk_key ").unwrap();
        assert_eq!(header.as_bytes(), b" pwpk_key ");
        assert!(header.is_sensitive());
    }

    #[test]
    fn debug_hides_credentials() {
        let client = ApiClient::new("top-secret-key", "top-secret-secret").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn decode_maps_mismatch_to_decode_error() {
        let customer: paywhirl_core::Customer =
            ApiClient::decode(serde_json::json!({ "id": 3 })).unwrap();
        assert_eq!(customer.id, paywhirl_core::CustomerId::new(3));

        let err = ApiClient::decode::<paywhirl_core::Customer>(serde_json::json!([1]))
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }
}
