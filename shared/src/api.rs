//! API wire types and error definitions
//!
//! This module defines the contract with the two external collaborators the
//! dashboard talks to: the static configuration document and the
//! machine-list source. Both are fetched by the frontend with `gloo-net`.

use serde::{Deserialize, Serialize};

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Server returned a non-success status
    #[error("Server error ({status})")]
    Server { status: u16 },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration lookup or URL construction failed
    #[error("Config error: {0}")]
    Config(String),
}

/// Configuration document served next to the frontend.
///
/// Only `device_id` is read; anything else in the document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub device_id: String,
}

/// One entry of the machine-list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineEntry {
    #[serde(default)]
    pub hostport: Option<String>,
    pub token: String,
}

/// Decode a machine-list response body.
pub fn parse_machine_entries(body: &str) -> Result<Vec<MachineEntry>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Decode the configuration document.
pub fn parse_device_config(body: &str) -> Result<DeviceConfig, ApiError> {
    let config: DeviceConfig =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if config.device_id.trim().is_empty() {
        return Err(ApiError::Config("device_id is empty".to_string()));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn machine_entries_ignore_extra_fields() {
        let body = json!([
            {"hostport": "10.0.0.5:5900", "token": "Workstation-01", "owner": "ops"},
            {"token": "Server-Alpha"}
        ])
        .to_string();

        let entries = parse_machine_entries(&body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hostport.as_deref(), Some("10.0.0.5:5900"));
        assert_eq!(entries[0].token, "Workstation-01");
        assert_eq!(entries[1].hostport, None);
    }

    #[test]
    fn machine_entries_require_token() {
        let body = json!([{"hostport": "10.0.0.5:5900"}]).to_string();
        assert!(matches!(
            parse_machine_entries(&body),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn device_config_reads_identifier() {
        let body = json!({"device_id": "lab-7", "theme": "dark"}).to_string();
        let config = parse_device_config(&body).unwrap();
        assert_eq!(config.device_id, "lab-7");
    }

    #[test]
    fn device_config_rejects_blank_identifier() {
        let body = json!({"device_id": "  "}).to_string();
        assert_eq!(
            parse_device_config(&body),
            Err(ApiError::Config("device_id is empty".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Server { status: 502 }.to_string(),
            "Server error (502)"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
