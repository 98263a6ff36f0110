use crate::error::Result;
use crate::inventory::aggregate::{aggregate_groups, aggregate_hosts, aggregate_locations, Aggregate, HostAggregation};
use crate::librenms::InventorySource;
use crate::output::print_info;

/// Everything one run produces, ready to be emitted
#[derive(Debug)]
pub struct CollectedInventory {
    pub hosts: HostAggregation,
    pub groups: Aggregate,
    pub locations: Aggregate,
}

/// Fetches devices and groups from `source` and builds all three aggregates.
/// The host pass runs first since groups and locations resolve members
/// through its id -> name lookup.
pub fn collect_full_inventory<S: InventorySource>(source: &S) -> Result<CollectedInventory> {
    let devices = source.list_devices()?;
    print_info(&format!("Fetched {} devices", devices.len()));

    let hosts = aggregate_hosts(&devices);

    let groups = source.list_groups()?;
    print_info(&format!("Processing {} groups...", groups.len()));

    let mut groups_with_members = Vec::with_capacity(groups.len());
    for group in groups {
        let members = source.list_group_members(group.id)?;
        print_info(&format!("Processing group {}... done", group.name));
        groups_with_members.push((group, members));
    }

    let groups = aggregate_groups(&groups_with_members, &hosts.names_by_id);
    let locations = aggregate_locations(&devices, &hosts.names_by_id);

    Ok(CollectedInventory {
        hosts,
        groups,
        locations,
    })
}
