//! Backend configuration.
//!
//! The managed service generates an `aws-exports` JSON file describing the
//! GraphQL endpoint and how to authenticate against it. Only the AppSync keys
//! are read; anything else in the file is ignored.

use serde::Deserialize;

use crate::error::ConfigError;

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Sent as the `x-api-key` header.
    ApiKey(String),
    /// Sent as the `Authorization` header (user pool or OIDC token).
    Bearer(String),
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::ApiKey(_) => f.write_str("ApiKey(..)"),
            AuthMode::Bearer(_) => f.write_str("Bearer(..)"),
        }
    }
}

/// Where the GraphQL API lives and how to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub endpoint: String,
    pub region: Option<String>,
    pub auth: AuthMode,
    /// Page size requested from `listGifs`.
    pub page_size: Option<u32>,
}

#[derive(Deserialize)]
struct AwsExports {
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    endpoint: String,
    #[serde(rename = "aws_appsync_region", default)]
    region: Option<String>,
    #[serde(rename = "aws_appsync_authenticationType", default = "default_auth_type")]
    authentication_type: String,
    #[serde(rename = "aws_appsync_apiKey", default)]
    api_key: Option<String>,
}

fn default_auth_type() -> String {
    "API_KEY".to_string()
}

impl BackendConfig {
    /// Parse the contents of an `aws-exports.json` file.
    ///
    /// `token` supplies the credential for token-based modes, which the
    /// exports file never contains.
    pub fn from_aws_exports(json: &str, token: Option<String>) -> Result<Self, ConfigError> {
        let exports: AwsExports = serde_json::from_str(json)?;
        let auth = match exports.authentication_type.as_str() {
            "API_KEY" => AuthMode::ApiKey(
                exports
                    .api_key
                    .filter(|k| !k.is_empty())
                    .ok_or(ConfigError::MissingCredential("API_KEY", "an API key"))?,
            ),
            "AMAZON_COGNITO_USER_POOLS" | "OPENID_CONNECT" | "AWS_LAMBDA" => AuthMode::Bearer(
                token
                    .filter(|t| !t.is_empty())
                    .ok_or(ConfigError::MissingCredential("token", "an auth token"))?,
            ),
            other => return Err(ConfigError::UnsupportedAuth(other.to_string())),
        };

        Self::new(exports.endpoint, exports.region, auth)
    }

    pub fn from_file(
        path: impl AsRef<std::path::Path>,
        token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_aws_exports(&json, token)
    }

    /// Build a config, validating the endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        region: Option<String>,
        auth: AuthMode,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }
        Ok(Self {
            endpoint,
            region,
            auth,
            page_size: None,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
