use serde::{Deserialize, Serialize};

/// CMS credentials handed to the browser client via `GET /config`. Built
/// once at startup and passed into [`crate::AppState`]; handlers never
/// read the environment directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub cms_url: String,
}

impl AppConfig {
    /// Unset variables become empty strings, mirroring a plain
    /// `process.env` passthrough.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("CLIENT_SECRET").unwrap_or_default(),
            cms_url: std::env::var("CMS_URL").unwrap_or_default(),
        }
    }
}
