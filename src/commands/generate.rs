use crate::commands::report_collisions;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::inventory::collect_full_inventory;
use crate::inventory::emit::{aggregate_inventory, emit, hosts_inventory};
use crate::librenms::LibreNmsClient;
use crate::output::{print_info, print_success};
use chrono::Utc;
use std::path::Path;

// Numeric prefixes fix the order Ansible loads the files in
pub const HOSTS_PATH: &str = "inventory/01-librenms-hosts.yml";
pub const GROUPS_PATH: &str = "inventory/02-librenms-groups.yml";
pub const LOCATIONS_PATH: &str = "inventory/03-librenms-locations.yml";

pub fn handle_generate_command(config: ApiConfig) -> Result<()> {
    print_info(&format!("Querying LibreNMS at {}", config.base_url));
    let client = LibreNmsClient::new(config);

    let collected = collect_full_inventory(&client)?;
    report_collisions(&collected.hosts);

    let generated_at = Utc::now();
    let documents = [
        (HOSTS_PATH, hosts_inventory(&collected.hosts.hosts)),
        (GROUPS_PATH, aggregate_inventory(&collected.groups)),
        (LOCATIONS_PATH, aggregate_inventory(&collected.locations)),
    ];

    for (path, inventory) in &documents {
        emit(inventory, Path::new(path), generated_at)?;
        print_success(&format!("Wrote {} ({} entries)", path, inventory.len()));
    }

    print_success(&format!(
        "Inventory complete: {} hosts, {} groups, {} locations",
        collected.hosts.hosts.len(),
        collected.groups.len(),
        collected.locations.len()
    ));
    Ok(())
}
