// LibreNMS API access
pub mod client;
pub mod types;

pub use client::LibreNmsClient;
pub use types::{Device, DeviceGroup};

use crate::error::Result;

/// The three read operations the inventory pipeline needs from LibreNMS
pub trait InventorySource {
    fn list_devices(&self) -> Result<Vec<Device>>;
    fn list_groups(&self) -> Result<Vec<DeviceGroup>>;
    fn list_group_members(&self, group_id: u64) -> Result<Vec<u64>>;
}
