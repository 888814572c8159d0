//! Endpoint configuration and URL construction.
//!
//! Locations are fixed at build time through environment variables read
//! with `option_env!`, falling back to local development defaults.

use crate::api::ApiError;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "/config.json";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_VIEWER_URL: &str = "http://localhost:6080/vnc.html";

/// How the embedded viewer should behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMode {
    /// Grid thumbnail: no input forwarded.
    Thumbnail,
    /// Enlarged view: interactive.
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Configuration document; absolute or relative to the page origin.
    pub config_path: String,
    pub api_base: String,
    pub viewer_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            viewer_url: DEFAULT_VIEWER_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn from_build_env() -> Self {
        Self {
            config_path: option_env!("MACHINE_DASH_CONFIG_PATH")
                .unwrap_or(DEFAULT_CONFIG_PATH)
                .to_string(),
            api_base: option_env!("MACHINE_DASH_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            viewer_url: option_env!("MACHINE_DASH_VIEWER_URL")
                .unwrap_or(DEFAULT_VIEWER_URL)
                .to_string(),
        }
    }

    /// Resolve the configuration document against the page origin.
    pub fn config_url(&self, origin: &str) -> Result<String, ApiError> {
        if let Ok(absolute) = Url::parse(&self.config_path) {
            return Ok(absolute.into());
        }
        let base = parse(origin)?;
        base.join(&self.config_path)
            .map(Into::into)
            .map_err(|e| ApiError::Config(format!("invalid config path: {}", e)))
    }

    /// `{api_base}/devices/{device_id}/tokens`
    pub fn machines_url(&self, device_id: &str) -> Result<String, ApiError> {
        let mut url = parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("not a base URL: {}", self.api_base)))?
            .pop_if_empty()
            .extend(&["devices", device_id, "tokens"]);
        Ok(url.into())
    }

    /// Viewer page URL carrying the machine token as connection credential.
    pub fn viewer_url(&self, token: &str, mode: ViewerMode) -> Result<String, ApiError> {
        let mut url = parse(&self.viewer_url)?;
        let token: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
        let view_only = match mode {
            ViewerMode::Thumbnail => "true",
            ViewerMode::Interactive => "false",
        };
        url.query_pairs_mut()
            .append_pair("autoconnect", "true")
            .append_pair("resize", "scale")
            .append_pair("view_only", view_only)
            .append_pair("reconnect", "true")
            .append_pair("path", &format!("websockify?token={}", token));
        Ok(url.into())
    }
}

fn parse(raw: &str) -> Result<Url, ApiError> {
    Url::parse(raw).map_err(|e| ApiError::Config(format!("invalid URL {}: {}", raw, e)))
}
