use crate::error::{InventoryError, Result};
use crate::inventory::aggregate::{Aggregate, HostVars};
use crate::inventory::normalize::NormalizedName;
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Top-level key Ansible uses for hosts outside any group
pub const UNGROUPED: &str = "ungrouped";

/// Value stored under a host name inside a `hosts:` mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostValue {
    Vars(HostVars),
    /// Host is listed but defined elsewhere; written as an empty scalar
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HostGroup {
    pub hosts: BTreeMap<String, HostValue>,
}

/// One inventory document: group name -> hosts
pub type Inventory = BTreeMap<String, HostGroup>;

pub fn hosts_inventory(hosts: &BTreeMap<NormalizedName, HostVars>) -> Inventory {
    let group = HostGroup {
        hosts: hosts
            .iter()
            .map(|(name, vars)| (name.to_string(), HostValue::Vars(vars.clone())))
            .collect(),
    };

    let mut inventory = Inventory::new();
    inventory.insert(UNGROUPED.to_string(), group);
    inventory
}

pub fn aggregate_inventory(aggregate: &Aggregate) -> Inventory {
    aggregate
        .iter()
        .map(|(name, members)| {
            let hosts = members
                .iter()
                .map(|member| (member.to_string(), HostValue::Empty))
                .collect();
            (name.to_string(), HostGroup { hosts })
        })
        .collect()
}

// Plain scalars PyYAML (and so Ansible) resolves to something other than a
// string under YAML 1.1: booleans, nulls, ints with `_`, octal, sexagesimal
const YAML11_IMPLICIT_RE: &str = r"^(?:y|Y|yes|Yes|YES|n|N|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF|~|null|Null|NULL|[-+]?0b[0-1_]+|[-+]?0[0-7_]+|[-+]?(?:0|[1-9][0-9_]*)|[-+]?0x[0-9a-fA-F_]+|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+|[-+]?[0-9][0-9_]*\.[0-9_]*(?:[eE][-+][0-9]+)?|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$";

/// Serializes an inventory as block-style YAML, headed by a generator comment
pub fn render(inventory: &Inventory, generated_at: DateTime<Utc>) -> Result<String> {
    let body = serde_yaml::to_string(inventory)?;
    let implicit = Regex::new(YAML11_IMPLICIT_RE)?;

    Ok(format!(
        "# Generated by {} at {}\n{}",
        env!("CARGO_PKG_NAME"),
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ansible_compatible(&body, &implicit)
    ))
}

pub fn emit(inventory: &Inventory, destination: &Path, generated_at: DateTime<Utc>) -> Result<()> {
    let text = render(inventory, generated_at)?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| InventoryError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(destination, text).map_err(|source| InventoryError::Io {
        path: destination.to_path_buf(),
        source,
    })
}

// serde_yaml writes YAML 1.2 while Ansible loads YAML 1.1, so every bare
// key or value the older resolver would not read as a string gets quoted.
// Only `HostValue::Empty` serializes to a bare `null`; it becomes an empty
// value, which Ansible accepts where it rejects `null`.
fn ansible_compatible(yaml: &str, implicit: &Regex) -> String {
    let mut out = String::with_capacity(yaml.len());
    for line in yaml.lines() {
        out.push_str(&rewrite_line(line, implicit));
        out.push('\n');
    }
    out
}

fn rewrite_line(line: &str, implicit: &Regex) -> String {
    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];

    let (key, value) = if let Some(key) = body.strip_suffix(':') {
        (key, None)
    } else if let Some((key, value)) = body.split_once(": ") {
        (key, Some(value))
    } else {
        return line.to_string();
    };

    let quote = |scalar: &str| {
        if implicit.is_match(scalar) {
            format!("'{}'", scalar)
        } else {
            scalar.to_string()
        }
    };

    match value {
        None | Some("null") => format!("{}{}:", indent, quote(key)),
        Some(value) => format!("{}{}: {}", indent, quote(key), quote(value)),
    }
}
