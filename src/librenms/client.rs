use crate::config::ApiConfig;
use crate::error::{InventoryError, Result};
use crate::librenms::types::{
    Device, DeviceGroup, DevicesResponse, ErrorResponse, GroupMembersResponse, GroupsResponse,
};
use crate::librenms::InventorySource;
use reqwest::blocking::{Client, Response};

const AUTH_HEADER: &str = "X-Auth-Token";

/// Blocking client for the LibreNMS v0 API
pub struct LibreNmsClient {
    config: ApiConfig,
    client: Client,
}

impl LibreNmsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_root(), path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(self.url(path))
            .header(AUTH_HEADER, &self.config.api_key)
            .send()?;
        Ok(response)
    }
}

impl InventorySource for LibreNmsClient {
    fn list_devices(&self) -> Result<Vec<Device>> {
        let response = self.get("devices")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text()?;
            return Err(remote_error(status, &body));
        }

        let parsed: DevicesResponse = response.json()?;
        Ok(parsed.devices)
    }

    fn list_groups(&self) -> Result<Vec<DeviceGroup>> {
        let parsed: GroupsResponse = self.get("devicegroups")?.json()?;
        Ok(parsed.groups)
    }

    fn list_group_members(&self, group_id: u64) -> Result<Vec<u64>> {
        let parsed: GroupMembersResponse = self.get(&format!("devicegroups/{}", group_id))?.json()?;
        Ok(parsed.devices.into_iter().map(|member| member.device_id).collect())
    }
}

/// Builds the fatal error for a failed device listing, preferring the API's
/// own `message` field over the raw body
fn remote_error(status: u16, body: &str) -> InventoryError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.trim().to_string());

    InventoryError::Remote { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_api_root() {
        let client = LibreNmsClient::new(ApiConfig::new("http://127.0.0.1/", "token"));
        assert_eq!(client.url("devices"), "http://127.0.0.1/api/v0/devices");
        assert_eq!(client.url("/devicegroups/4"), "http://127.0.0.1/api/v0/devicegroups/4");
    }

    #[test]
    fn test_remote_error_uses_message_field() {
        let err = remote_error(403, r#"{"status": "error", "message": "Insufficient permissions"}"#);
        match err {
            InventoryError::Remote { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Insufficient permissions");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_remote_error_falls_back_to_body() {
        let err = remote_error(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "Failed to get device info: Bad Gateway (502)");
    }
}
