use thiserror::Error;

use crate::notification::NotificationError;
use crate::router::RouteError;

#[derive(Debug, Error)]
pub enum LeadlineError {
    #[error("Invalid base URL '{0}': expected an http:// or https:// address")]
    InvalidBaseUrl(String),

    #[error("Invalid start route: {0}")]
    InvalidRoute(#[from] RouteError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a backend base URL before any request is made
pub fn validate_base_url(base_url: &str) -> Result<String, LeadlineError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(LeadlineError::InvalidBaseUrl(base_url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url_accepts_http_and_https() {
        assert_eq!(
            validate_base_url("http://localhost:8080").unwrap(),
            "http://localhost:8080"
        );
        assert_eq!(
            validate_base_url("https://crm.example.com/").unwrap(),
            "https://crm.example.com"
        );
    }

    #[test]
    fn test_validate_base_url_rejects_other_schemes() {
        assert!(matches!(
            validate_base_url("ftp://crm.example.com"),
            Err(LeadlineError::InvalidBaseUrl(_))
        ));
        assert!(validate_base_url("crm.example.com").is_err());
        assert!(validate_base_url("http://").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = validate_base_url("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid base URL 'nope': expected an http:// or https:// address"
        );

        let err: LeadlineError = RouteError::Unknown("/x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid start route: No page matches '/x'");
    }
}
