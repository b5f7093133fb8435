use std::net::SocketAddr;

use aws_sdk_dynamodb::Client;
use shared::repositories::game_repository::DEFAULT_STATUS_INDEX;
use thiserror::Error;

pub const DEFAULT_GAMES_TABLE: &str = "draughts-games";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDRESS {value}: {reason}")]
    InvalidBindAddress { value: String, reason: String },
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub games_table: String,
    pub status_index: String,
    /// Overrides the DynamoDB endpoint, e.g. for DynamoDB Local.
    pub dynamodb_endpoint: Option<String>,
    /// Serve plain HTTP here instead of running under the Lambda runtime.
    pub bind_address: Option<SocketAddr>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let games_table = non_empty(&lookup, "GAMES_TABLE", DEFAULT_GAMES_TABLE)?;
        let status_index = non_empty(&lookup, "GAMES_STATUS_INDEX", DEFAULT_STATUS_INDEX)?;
        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT").filter(|v| !v.trim().is_empty());

        let bind_address = match lookup("BIND_ADDRESS").filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(value.trim().parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidBindAddress {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(ApiConfig {
            games_table,
            status_index,
            dynamodb_endpoint,
            bind_address,
        })
    }

    pub async fn dynamodb_client(&self) -> Client {
        let sdk_config = aws_config::load_from_env().await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &self.dynamodb_endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        Client::from_conf(builder.build())
    }
}

fn non_empty<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default.to_string()),
    }
}
