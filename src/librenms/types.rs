use serde::Deserialize;

/// A monitored device as reported by `GET /devices`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Device {
    #[serde(rename = "device_id")]
    pub id: u64,
    #[serde(rename = "sysName", default)]
    pub raw_name: Option<String>,
    #[serde(rename = "hostname", default)]
    pub raw_hostname: String,
    #[serde(rename = "location", default)]
    pub raw_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceGroup {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Deserialize)]
pub struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<DeviceGroup>,
}

#[derive(Debug, Deserialize)]
pub struct GroupMembersResponse {
    #[serde(default)]
    pub devices: Vec<GroupMember>,
}

#[derive(Debug, Deserialize)]
pub struct GroupMember {
    pub device_id: u64,
}

/// Body LibreNMS sends alongside an error status
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}
