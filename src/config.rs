/// Connection settings for a LibreNMS server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the protocol, without a trailing slash
    pub base_url: String,
    /// Value sent in the X-Auth-Token header
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Root of the v0 REST API
    pub fn api_root(&self) -> String {
        format!("{}/api/v0", self.base_url)
    }
}

/// clap value parser for the LibreNMS base URL
pub fn parse_base_url(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(format!(
            "'{}' has no protocol. Make sure to include it - i.e 'http://127.0.0.1'",
            value
        ))
    }
}
