//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::{ClientError, Result};
use crate::params::ParamEncoding;

/// Production PayWhirl API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.paywhirl.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// PayWhirl API key.
    pub api_key: String,

    /// PayWhirl API secret.
    pub api_secret: String,

    /// API base URL (default: `https://api.paywhirl.com`).
    pub base_url: String,

    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,

    /// Encoding for POST parameters (default: query string).
    pub post_encoding: ParamEncoding,
}

/// Secrets file structure.
#[derive(Debug, Deserialize)]
struct PayWhirlSecrets {
    api_key: String,
    api_secret: String,
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    timeout_seconds: Option<u64>,
    #[serde(default)]
    post_encoding: Option<ParamEncoding>,
}

impl ClientConfig {
    /// Create a configuration with the given credentials and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Self::default()
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the encoding used for POST parameters.
    #[must_use]
    pub fn with_post_encoding(mut self, encoding: ParamEncoding) -> Self {
        self.post_encoding = encoding;
        self
    }

    /// Load configuration from a secrets file or environment variables.
    ///
    /// The secrets file is looked up at `$PAYWHIRL_SECRETS_FILE`, then
    /// `.secrets/paywhirl.json`, then `../.secrets/paywhirl.json`. Without a
    /// file, `PAYWHIRL_API_KEY`, `PAYWHIRL_API_SECRET`, `PAYWHIRL_API_BASE`,
    /// `PAYWHIRL_TIMEOUT_SECONDS` and `PAYWHIRL_POST_ENCODING` are read.
    ///
    /// Missing credentials are left empty; building a client from the result
    /// reports them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `PAYWHIRL_SECRETS_FILE` names
    /// an unreadable file or an environment value fails to parse.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var("PAYWHIRL_SECRETS_FILE") {
            return Self::from_secrets_file(&path);
        }

        for path in [".secrets/paywhirl.json", "../.secrets/paywhirl.json"] {
            if Path::new(path).exists() {
                return Self::from_secrets_file(path);
            }
        }

        tracing::debug!("PayWhirl secrets file not found, using environment variables");
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from a JSON secrets file.
    ///
    /// The file holds `api_key` and `api_secret`, and optionally `api_base`,
    /// `timeout_seconds` and `post_encoding`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file cannot be read or parsed.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: PayWhirlSecrets = serde_json::from_str(&contents).map_err(|e| {
            ClientError::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), "Loaded PayWhirl secrets from file");

        let defaults = Self::default();
        Ok(Self {
            api_key: secrets.api_key,
            api_secret: secrets.api_secret,
            base_url: secrets.api_base.unwrap_or(defaults.base_url),
            timeout_seconds: secrets.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            post_encoding: secrets.post_encoding.unwrap_or(defaults.post_encoding),
        })
    }

    /// Build configuration from a variable lookup.
    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let timeout_seconds = match get("PAYWHIRL_TIMEOUT_SECONDS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!("invalid PAYWHIRL_TIMEOUT_SECONDS: {raw}"))
            })?,
            None => defaults.timeout_seconds,
        };

        let post_encoding = match get("PAYWHIRL_POST_ENCODING") {
            Some(raw) => raw.parse()?,
            None => defaults.post_encoding,
        };

        Ok(Self {
            api_key: get("PAYWHIRL_API_KEY").unwrap_or_default(),
            api_secret: get("PAYWHIRL_API_SECRET").unwrap_or_default(),
            base_url: get("PAYWHIRL_API_BASE").unwrap_or(defaults.base_url),
            timeout_seconds,
            post_encoding,
        })
    }

    /// Check that the configuration can produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] for empty credentials, a zero
    /// timeout, or a base URL that is not an absolute http(s) URL or that
    /// carries a query string or fragment.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Configuration("api_key is empty".into()));
        }
        if self.api_secret.trim().is_empty() {
            return Err(ClientError::Configuration("api_secret is empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(ClientError::Configuration(
                "timeout_seconds must be positive".into(),
            ));
        }

        let url = url::Url::parse(&self.base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base_url {:?}: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Configuration(format!(
                "base_url must use http or https, got {}",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ClientError::Configuration(format!(
                "base_url must not have a query or fragment: {:?}",
                self.base_url
            )));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            post_encoding: ParamEncoding::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("post_encoding", &self.post_encoding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.paywhirl.com");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.post_encoding, ParamEncoding::Query);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("key", "secret")
            .with_base_url("http://localhost:9000")
            .with_timeout_seconds(5)
            .with_post_encoding(ParamEncoding::Json);

        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.post_encoding, ParamEncoding::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        let err = ClientConfig::new("", "secret").validate().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(ref m) if m.contains("api_key")));

        let err = ClientConfig::new("key", "   ").validate().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(ref m) if m.contains("api_secret")));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = ClientConfig::new("key", "secret").with_base_url("not a url");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("key", "secret").with_base_url("ftp://api.paywhirl.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_query_and_fragment() {
        for base in [
            "http://localhost/?v=1",
            "https://api.paywhirl.com?debug",
            "http://localhost/#x",
        ] {
            let config = ClientConfig::new("key", "secret").with_base_url(base);
            assert!(
                matches!(config.validate(), Err(ClientError::Configuration(_))),
                "{base} should be rejected"
            );
        }

        let config =
            ClientConfig::new("key", "secret").with_base_url("https://api.paywhirl.com/v1/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_vars() {
        let config = ClientConfig::from_vars(lookup(&[
            ("PAYWHIRL_API_KEY", "pk"),
            ("PAYWHIRL_API_SECRET", "ps"),
            ("PAYWHIRL_API_BASE", "https://staging.paywhirl.test"),
            ("PAYWHIRL_TIMEOUT_SECONDS", "12"),
            ("PAYWHIRL_POST_ENCODING", "form"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "pk");
        assert_eq!(config.api_secret, "ps");
        assert_eq!(config.base_url, "https://staging.paywhirl.test");
        assert_eq!(config.timeout_seconds, 12);
        assert_eq!(config.post_encoding, ParamEncoding::Form);
    }

    #[test]
    fn test_from_vars_defaults_and_errors() {
        let config = ClientConfig::from_vars(lookup(&[])).unwrap();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let err = ClientConfig::from_vars(lookup(&[("PAYWHIRL_TIMEOUT_SECONDS", "soon")]));
        assert!(matches!(err, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_from_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"api_key":"file-key","api_secret":"file-secret","post_encoding":"json"}}"#
        )
        .unwrap();

        let config = ClientConfig::from_secrets_file(file.path()).unwrap();
        assert_eq!(config.api_key, "file-key");
        assert_eq!(config.api_secret, "file-secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.post_encoding, ParamEncoding::Json);
    }

    #[test]
    fn test_from_secrets_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_secrets_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = ClientConfig::new("very-secret-key", "very-secret-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
