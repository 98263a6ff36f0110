use serde::Serialize;
use std::fmt;

/// An Ansible-safe identifier: lowercase ASCII letters, digits and single
/// underscores, never empty
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercases `raw` and collapses every run of characters outside `[a-z0-9]`
/// (underscore included) into one `_`, dropping separators at either end.
/// Returns `None` when nothing usable is left.
pub fn normalize(raw: &str) -> Option<NormalizedName> {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(NormalizedName(out))
    }
}

pub fn normalize_opt(raw: Option<&str>) -> Option<NormalizedName> {
    raw.and_then(normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn norm(raw: &str) -> Option<String> {
        normalize(raw).map(|n| n.as_str().to_string())
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(norm("Core Switch-1"), Some("core_switch_1".to_string()));
        assert_eq!(norm("Edge Routers"), Some("edge_routers".to_string()));
        assert_eq!(norm("rtr__01--lab"), Some("rtr_01_lab".to_string()));
        assert_eq!(norm("DC-1 / Rack 4"), Some("dc_1_rack_4".to_string()));
    }

    #[test]
    fn test_normalize_trims_edge_separators() {
        assert_eq!(norm("  Leaf 3  "), Some("leaf_3".to_string()));
        assert_eq!(norm("_private_"), Some("private".to_string()));
    }

    #[test]
    fn test_normalize_sentinel() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("  "), None);
        assert_eq!(norm("-_- "), None);
        assert_eq!(normalize_opt(None), None);
    }

    #[test]
    fn test_normalize_non_ascii_is_separator() {
        assert_eq!(norm("Zürich Core"), Some("z_rich_core".to_string()));
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(raw in ".*") {
            if let Some(once) = normalize(&raw) {
                prop_assert_eq!(normalize(once.as_str()), Some(once.clone()));
            }
        }

        #[test]
        fn prop_normalize_charset(raw in ".*") {
            if let Some(name) = normalize(&raw) {
                let s = name.as_str();
                prop_assert!(!s.is_empty());
                prop_assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
                prop_assert!(!s.contains("__"));
                prop_assert!(!s.starts_with('_') && !s.ends_with('_'));
            }
        }
    }
}
