use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the person collection lives and how patient to be with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL of the collection endpoint itself. Per-record operations
    /// append `/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000/api/people".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_request_timeout() -> u32 {
    30
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}
