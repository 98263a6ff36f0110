use crate::commands::generate::{GROUPS_PATH, HOSTS_PATH, LOCATIONS_PATH};
use crate::commands::report_collisions;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::inventory::collect_full_inventory;
use crate::inventory::emit::{aggregate_inventory, hosts_inventory, render};
use crate::librenms::LibreNmsClient;
use crate::output::{output_data, print_info};
use chrono::Utc;

pub fn handle_show_command(config: ApiConfig, format: &str) -> Result<()> {
    let client = LibreNmsClient::new(config);

    let collected = collect_full_inventory(&client)?;
    report_collisions(&collected.hosts);

    let documents = [
        (HOSTS_PATH, hosts_inventory(&collected.hosts.hosts)),
        (GROUPS_PATH, aggregate_inventory(&collected.groups)),
        (LOCATIONS_PATH, aggregate_inventory(&collected.locations)),
    ];

    for (path, inventory) in &documents {
        print_info(path);
        if format == "yaml" {
            // Same text `generate` would write, empty host values included
            println!("{}", render(inventory, Utc::now())?);
        } else {
            output_data(inventory, format)?;
        }
    }
    Ok(())
}
