use crate::inventory::normalize::{normalize, normalize_opt, NormalizedName};
use crate::librenms::{Device, DeviceGroup};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Connection attributes Ansible needs for one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVars {
    pub ansible_host: String,
}

/// Named collection of host names, used for both groups and locations
pub type Aggregate = BTreeMap<NormalizedName, BTreeSet<NormalizedName>>;

/// Second device that landed on an already-used host name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub name: NormalizedName,
    pub replaced_host: String,
    pub device_id: u64,
}

#[derive(Debug, Default)]
pub struct HostAggregation {
    pub hosts: BTreeMap<NormalizedName, HostVars>,
    /// Normalized name of every device that made it into `hosts`
    pub names_by_id: BTreeMap<u64, NormalizedName>,
    pub collisions: Vec<NameCollision>,
}

/// Builds the flat host mapping. Devices without a usable name are skipped;
/// on a name collision the device seen last wins.
pub fn aggregate_hosts(devices: &[Device]) -> HostAggregation {
    let mut result = HostAggregation::default();

    for device in devices {
        let Some(name) = normalize_opt(device.raw_name.as_deref()) else {
            continue;
        };

        let vars = HostVars {
            ansible_host: device.raw_hostname.clone(),
        };

        if let Some(previous) = result.hosts.insert(name.clone(), vars) {
            result.collisions.push(NameCollision {
                name: name.clone(),
                replaced_host: previous.ansible_host,
                device_id: device.id,
            });
        }
        result.names_by_id.insert(device.id, name);
    }

    result
}

/// Builds group membership. Every named group appears in the result, even
/// when none of its members could be resolved to a host name.
pub fn aggregate_groups(
    groups: &[(DeviceGroup, Vec<u64>)],
    names_by_id: &BTreeMap<u64, NormalizedName>,
) -> Aggregate {
    let mut aggregate = Aggregate::new();

    for (group, member_ids) in groups {
        let Some(group_name) = normalize(&group.name) else {
            continue;
        };

        let members = aggregate.entry(group_name).or_default();
        for id in member_ids {
            if let Some(name) = names_by_id.get(id) {
                members.insert(name.clone());
            }
        }
    }

    aggregate
}

pub fn aggregate_locations(devices: &[Device], names_by_id: &BTreeMap<u64, NormalizedName>) -> Aggregate {
    let mut aggregate = Aggregate::new();

    for device in devices {
        let Some(name) = names_by_id.get(&device.id) else {
            continue;
        };
        let Some(location) = normalize_opt(device.raw_location.as_deref()) else {
            continue;
        };

        aggregate.entry(location).or_default().insert(name.clone());
    }

    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: u64, name: Option<&str>, hostname: &str, location: Option<&str>) -> Device {
        Device {
            id,
            raw_name: name.map(str::to_string),
            raw_hostname: hostname.to_string(),
            raw_location: location.map(str::to_string),
        }
    }

    fn group(id: u64, name: &str) -> DeviceGroup {
        DeviceGroup {
            id,
            name: name.to_string(),
        }
    }

    fn key(raw: &str) -> NormalizedName {
        normalize(raw).unwrap()
    }

    fn sample_devices() -> Vec<Device> {
        vec![
            device(1, Some("Core Switch-1"), "10.0.0.1", Some("DC One")),
            device(2, Some("  "), "10.0.0.2", Some("DC One")),
            device(3, None, "10.0.0.3", Some("Lab")),
            device(4, Some("edge-rtr-1"), "edge1.example.net", Some("")),
            device(5, Some("Edge RTR 2"), "edge2.example.net", None),
        ]
    }

    #[test]
    fn test_hosts_skip_unnamed_devices() {
        let hosts = aggregate_hosts(&sample_devices());

        let names: Vec<&str> = hosts.hosts.keys().map(NormalizedName::as_str).collect();
        assert_eq!(names, vec!["core_switch_1", "edge_rtr_1", "edge_rtr_2"]);
        assert_eq!(hosts.hosts[&key("Core Switch-1")].ansible_host, "10.0.0.1");
        assert!(!hosts.names_by_id.contains_key(&2));
        assert!(!hosts.names_by_id.contains_key(&3));
        assert!(hosts.collisions.is_empty());
    }

    #[test]
    fn test_hosts_last_write_wins() {
        let devices = vec![
            device(10, Some("Router A"), "10.0.0.1", None),
            device(11, Some("Router A"), "10.0.0.2", None),
        ];
        let hosts = aggregate_hosts(&devices);

        assert_eq!(hosts.hosts.len(), 1);
        assert_eq!(hosts.hosts[&key("router_a")].ansible_host, "10.0.0.2");
        assert_eq!(
            hosts.collisions,
            vec![NameCollision {
                name: key("router_a"),
                replaced_host: "10.0.0.1".to_string(),
                device_id: 11,
            }]
        );
        assert_eq!(hosts.names_by_id[&10], key("router_a"));
        assert_eq!(hosts.names_by_id[&11], key("router_a"));
    }

    #[test]
    fn test_group_with_only_unnamed_members_is_kept() {
        let devices = sample_devices();
        let hosts = aggregate_hosts(&devices);
        let groups = vec![
            (group(1, "Edge Routers"), vec![3]),
            (group(2, "Core"), vec![1, 2, 99]),
            (group(3, "--"), vec![1]),
        ];

        let aggregate = aggregate_groups(&groups, &hosts.names_by_id);

        assert_eq!(aggregate.len(), 2);
        assert!(aggregate[&key("edge_routers")].is_empty());
        let core: Vec<&str> = aggregate[&key("core")].iter().map(NormalizedName::as_str).collect();
        assert_eq!(core, vec!["core_switch_1"]);
    }

    #[test]
    fn test_groups_normalizing_alike_merge() {
        let devices = sample_devices();
        let hosts = aggregate_hosts(&devices);
        let groups = vec![(group(1, "Edge Routers"), vec![4]), (group(2, "edge-routers"), vec![5])];

        let aggregate = aggregate_groups(&groups, &hosts.names_by_id);

        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[&key("edge_routers")].len(), 2);
    }

    #[test]
    fn test_locations_skip_unnamed_and_unlocated() {
        let devices = sample_devices();
        let hosts = aggregate_hosts(&devices);

        let locations = aggregate_locations(&devices, &hosts.names_by_id);

        assert_eq!(locations.len(), 1);
        let members: Vec<&str> = locations[&key("dc_one")].iter().map(NormalizedName::as_str).collect();
        assert_eq!(members, vec!["core_switch_1"]);
    }

    #[test]
    fn test_members_reference_existing_hosts() {
        let devices = sample_devices();
        let hosts = aggregate_hosts(&devices);
        let groups = vec![(group(1, "All"), vec![1, 2, 3, 4, 5])];

        let aggregates = [
            aggregate_groups(&groups, &hosts.names_by_id),
            aggregate_locations(&devices, &hosts.names_by_id),
        ];

        for aggregate in &aggregates {
            for members in aggregate.values() {
                for member in members {
                    assert!(hosts.hosts.contains_key(member), "{} is not a host", member);
                }
            }
        }
    }
}
