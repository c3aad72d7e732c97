//! Lookup configuration.
//!
//! Values resolve in this order, first hit wins:
//!
//! | Source | API key | Endpoint |
//! |--------|---------|----------|
//! | explicit override (CLI flag) | `--api-key` | `--endpoint` |
//! | environment | `FIGIHOVER_OPENFIGI_API_KEY` | `FIGIHOVER_ENDPOINT` |
//! | host settings file | `isin-code.OpenFIGIAPIKey` | - |
//! | default | none | [`DEFAULT_MAPPING_ENDPOINT`] |
//!
//! An empty API key anywhere in the chain means "no key".

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ConfigError, ValidationError};

pub const DEFAULT_MAPPING_ENDPOINT: &str = "https://api.openfigi.com/v1/mapping";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const API_KEY_ENV: &str = "FIGIHOVER_OPENFIGI_API_KEY";
pub const ENDPOINT_ENV: &str = "FIGIHOVER_ENDPOINT";

/// Settings key used by the editor for the OpenFIGI API key.
pub const API_KEY_SETTING: &str = "isin-code.OpenFIGIAPIKey";

pub const API_KEY_HEADER: &str = "X-OPENFIGI-APIKEY";

/// Read-only configuration for the mapping call.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupConfig {
    endpoint: String,
    api_key: Option<String>,
    timeout_ms: u64,
}

impl LookupConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout_ms: u64,
    ) -> Result<Self, ValidationError> {
        let endpoint = endpoint.into();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ValidationError::InvalidEndpoint { value: endpoint });
        }
        if timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(Self {
            endpoint,
            api_key: normalize_api_key(api_key),
            timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// `X-OPENFIGI-APIKEY` header pair, if a key is configured.
    pub fn api_key_header(&self) -> Option<(&'static str, &str)> {
        self.api_key().map(|key| (API_KEY_HEADER, key))
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_MAPPING_ENDPOINT),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Editor settings relevant to lookups, loaded from a JSON settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSettings {
    pub api_key: Option<String>,
}

impl HostSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;
        Self::from_json(&value)
    }

    /// Accepts both the flat form (`{"isin-code.OpenFIGIAPIKey": ".."}`) and
    /// the nested form (`{"isin-code": {"OpenFIGIAPIKey": ".."}}`).
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let Some(root) = value.as_object() else {
            return Ok(Self::default());
        };

        let raw = root
            .get(API_KEY_SETTING)
            .or_else(|| nested_setting(root, API_KEY_SETTING));

        let api_key = match raw {
            None | Some(Value::Null) => None,
            Some(Value::String(key)) => normalize_api_key(Some(key.clone())),
            Some(_) => {
                return Err(ConfigError::NotAString {
                    key: API_KEY_SETTING,
                })
            }
        };

        Ok(Self { api_key })
    }
}

fn nested_setting<'a>(root: &'a Map<String, Value>, dotted: &str) -> Option<&'a Value> {
    let (section, key) = dotted.split_once('.')?;
    root.get(section)?.as_object()?.get(key)
}

/// Builder resolving a [`LookupConfig`] from overrides, environment and settings.
#[derive(Default)]
pub struct LookupConfigBuilder {
    api_key: Option<String>,
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
    settings: Option<HostSettings>,
    use_env: bool,
}

impl LookupConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_settings(mut self, settings: HostSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_env(mut self) -> Self {
        self.use_env = true;
        self
    }

    pub fn build(self) -> Result<LookupConfig, ValidationError> {
        let env = |name: &str| {
            if self.use_env {
                std::env::var(name).ok()
            } else {
                None
            }
        };

        let api_key = normalize_api_key(self.api_key.clone())
            .or_else(|| normalize_api_key(env(API_KEY_ENV)))
            .or_else(|| self.settings.as_ref().and_then(|s| s.api_key.clone()));

        let endpoint = self
            .endpoint
            .clone()
            .or_else(|| env(ENDPOINT_ENV))
            .unwrap_or_else(|| String::from(DEFAULT_MAPPING_ENDPOINT));

        LookupConfig::new(
            endpoint,
            api_key,
            self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        )
    }
}

fn normalize_api_key(api_key: Option<String>) -> Option<String> {
    api_key
        .map(|key| key.trim().to_owned())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_api_key_means_no_header() {
        let config = LookupConfig::new(DEFAULT_MAPPING_ENDPOINT, Some(String::from("  ")), 100)
            .expect("valid config");
        assert_eq!(config.api_key(), None);
        assert_eq!(config.api_key_header(), None);
    }

    #[test]
    fn rejects_non_http_endpoint_and_zero_timeout() {
        assert!(matches!(
            LookupConfig::new("ftp://example.test", None, 100),
            Err(ValidationError::InvalidEndpoint { .. })
        ));
        assert_eq!(
            LookupConfig::new(DEFAULT_MAPPING_ENDPOINT, None, 0),
            Err(ValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = LookupConfig::new(DEFAULT_MAPPING_ENDPOINT, Some(String::from("secret")), 100)
            .expect("valid config");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn settings_accept_flat_and_nested_keys() {
        let flat = HostSettings::from_json(&json!({ "isin-code.OpenFIGIAPIKey": "flat-key" }))
            .expect("flat settings");
        assert_eq!(flat.api_key.as_deref(), Some("flat-key"));

        let nested =
            HostSettings::from_json(&json!({ "isin-code": { "OpenFIGIAPIKey": "nested-key" } }))
                .expect("nested settings");
        assert_eq!(nested.api_key.as_deref(), Some("nested-key"));

        let empty = HostSettings::from_json(&json!({ "isin-code.OpenFIGIAPIKey": "" }))
            .expect("empty key");
        assert_eq!(empty.api_key, None);
    }

    #[test]
    fn settings_reject_non_string_key() {
        let err = HostSettings::from_json(&json!({ "isin-code.OpenFIGIAPIKey": 42 }))
            .expect_err("number must fail");
        assert!(matches!(err, ConfigError::NotAString { .. }));
    }

    #[test]
    fn explicit_override_beats_settings() {
        let config = LookupConfigBuilder::new()
            .with_api_key(Some(String::from("cli-key")))
            .with_settings(HostSettings {
                api_key: Some(String::from("settings-key")),
            })
            .build()
            .expect("valid config");
        assert_eq!(config.api_key(), Some("cli-key"));

        let config = LookupConfigBuilder::new()
            .with_api_key(Some(String::new()))
            .with_settings(HostSettings {
                api_key: Some(String::from("settings-key")),
            })
            .build()
            .expect("valid config");
        assert_eq!(config.api_key(), Some("settings-key"));
        assert_eq!(config.endpoint(), DEFAULT_MAPPING_ENDPOINT);
        assert_eq!(config.timeout_ms(), DEFAULT_TIMEOUT_MS);
    }
}
