use super::models::Config;
use reqwest::Url;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid service base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Unsupported base_url scheme '{scheme}', expected 'http' or 'https'")]
    UnsupportedScheme { scheme: String },

    #[error("Timeout must be positive: {field} = 0")]
    ZeroTimeout { field: String },

    #[error("user_agent must not be empty")]
    EmptyUserAgent,

    #[error("Invalid logging filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_service(config)?;
    validate_logging(config)?;
    Ok(())
}

fn validate_service(config: &Config) -> Result<(), ValidationError> {
    let service = &config.service;

    let url = Url::parse(&service.base_url).map_err(|e| ValidationError::InvalidBaseUrl {
        url: service.base_url.clone(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ValidationError::InvalidBaseUrl {
            url: service.base_url.clone(),
            reason: "query and fragment are not allowed".to_string(),
        });
    }

    if service.connect_timeout_ms == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "connect_timeout_ms".to_string(),
        });
    }

    if service.request_timeout_ms == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "request_timeout_ms".to_string(),
        });
    }

    if service.user_agent.trim().is_empty() {
        return Err(ValidationError::EmptyUserAgent);
    }

    Ok(())
}

fn validate_logging(config: &Config) -> Result<(), ValidationError> {
    EnvFilter::try_new(&config.logging.filter).map_err(|e| ValidationError::InvalidLogFilter {
        filter: config.logging.filter.clone(),
        reason: e.to_string(),
    })?;

    Ok(())
}
