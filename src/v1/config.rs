use std::env;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use thiserror::Error;
use url::Url;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const ENDPOINT_PREFIX: &str = "macie2";

/// Where requests are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    region: String,
    endpoint: Option<Url>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
        }
    }
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> Result<Self, ConfigError> {
        let region = region.into();
        validate_region(&region)?;
        Ok(Self {
            region,
            endpoint: None,
        })
    }

    /// Overrides the regional endpoint, e.g. for a local emulator.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: "expected an absolute http(s) URL".to_string(),
            });
        }
        self.endpoint = Some(url);
        Ok(self)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint_override(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// The override if set, else `https://macie2.{region}.amazonaws.com`.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        match &self.endpoint {
            Some(url) => Ok(url.clone()),
            None => {
                let endpoint = format!("https://{}.{}.amazonaws.com", ENDPOINT_PREFIX, self.region);
                Url::parse(&endpoint).map_err(|e| ConfigError::InvalidEndpoint {
                    endpoint,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Reads `AWS_REGION`/`AWS_DEFAULT_REGION` and `MACIE2_ENDPOINT`, after
    /// loading a `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let region = set("AWS_REGION")
            .or_else(|| set("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let config = Self::new(region)?;
        match set("MACIE2_ENDPOINT") {
            Some(endpoint) => config.with_endpoint(&endpoint),
            None => Ok(config),
        }
    }

    pub fn from_sdk_config(config: &SdkConfig) -> Result<Self, ConfigError> {
        let region = config
            .region()
            .map(|region| region.to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let client_config = Self::new(region)?;
        match config.endpoint_url() {
            Some(endpoint) => client_config.with_endpoint(endpoint),
            None => Ok(client_config),
        }
    }

    /// Resolves the shared AWS configuration (profiles, environment, IMDS).
    pub async fn load(region: Option<String>) -> Result<Self, ConfigError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;
        Self::from_sdk_config(&sdk_config)
    }
}

fn validate_region(region: &str) -> Result<(), ConfigError> {
    let valid = !region.is_empty()
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidRegion(region.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("InvalidRegion: '{0}'")]
    InvalidRegion(String),
    #[error("InvalidEndpoint: '{endpoint}', {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_endpoint_follows_region() {
        let config = ClientConfig::new("eu-west-1").unwrap();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "https://macie2.eu-west-1.amazonaws.com/"
        );
        assert_eq!(ClientConfig::default().region(), "us-east-1");
    }

    #[test]
    fn rejects_malformed_region_and_endpoint() {
        assert_eq!(
            ClientConfig::new("EU West"),
            Err(ConfigError::InvalidRegion("EU West".to_string()))
        );
        assert!(ClientConfig::default().with_endpoint("localhost:4566").is_err());
        assert!(ClientConfig::default().with_endpoint("ftp://example.com").is_err());
    }

    #[test]
    fn lookup_precedence() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-central-1"),
            ("MACIE2_ENDPOINT", "http://localhost:4566"),
        ]))
        .unwrap();
        assert_eq!(config.region(), "us-west-2");
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://localhost:4566/"
        );

        let config =
            ClientConfig::from_lookup(lookup(&[("AWS_DEFAULT_REGION", "eu-central-1")])).unwrap();
        assert_eq!(config.region(), "eu-central-1");
        assert_eq!(config.endpoint_override(), None);

        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn empty_region_falls_through() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
            ("MACIE2_ENDPOINT", ""),
        ]))
        .unwrap();
        assert_eq!(config.region(), "eu-west-1");
        assert_eq!(config.endpoint_override(), None);

        let config = ClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", ""),
        ]))
        .unwrap();
        assert_eq!(config.region(), DEFAULT_REGION);
    }
}
