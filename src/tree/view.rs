//! Read-only views over built trees.
//!
//! These back the chart front-end: hiding aggregate sectors, ordering
//! sectors largest first, collapsing a country to its sector totals,
//! and looking a country up by code or full name.

use super::node::{CountryTree, FlatTree, HierarchicalDataset, LeafNode};
use crate::utils::config::{COUNTRY_CODE_ALIASES, FLAT_ROOT_NAME};
use log::debug;

/// Remove sectors whose name appears in `excluded`
///
/// **Public** - used by convert (--exclude) and inspect
pub fn exclude_sectors<S: AsRef<str>>(tree: &CountryTree, excluded: &[S]) -> CountryTree {
    let children = tree
        .children
        .iter()
        .filter(|sector| !excluded.iter().any(|name| name.as_ref() == sector.name))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "{}: kept {} of {} sectors",
        tree.name,
        children.len(),
        tree.children.len()
    );

    CountryTree {
        name: tree.name.clone(),
        children,
    }
}

/// Order sectors by value, largest first
///
/// Ties keep their input order.
pub fn sort_by_value(tree: &mut CountryTree) {
    tree.children
        .sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));
}

/// Collapse a country to one leaf per sector carrying the sector total
pub fn flatten(tree: &CountryTree) -> FlatTree {
    FlatTree {
        name: FLAT_ROOT_NAME.to_string(),
        children: tree
            .children
            .iter()
            .map(|sector| LeafNode::new(sector.name.as_str(), sector.value.clone()))
            .collect(),
    }
}

/// Map a full country name to its code, or upper-case anything else
///
/// # Example
/// ```ignore
/// assert_eq!(resolve_country_code("china"), "CHN");
/// assert_eq!(resolve_country_code("civ"), "CIV");
/// ```
pub fn resolve_country_code(name: &str) -> String {
    let name = name.trim();

    COUNTRY_CODE_ALIASES
        .iter()
        .find(|(full_name, _)| full_name.eq_ignore_ascii_case(name))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| name.to_uppercase())
}

/// Look up a country tree by code or known full name
pub fn find_country<'a>(dataset: &'a HierarchicalDataset, name: &str) -> Option<&'a CountryTree> {
    dataset.get(resolve_country_code(name).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::SectorNode;
    use pretty_assertions::assert_eq;

    fn sector(name: &str, value: f64) -> SectorNode {
        SectorNode {
            name: name.to_string(),
            value: value.into(),
            children: vec![LeafNode::new("leaf", value)],
        }
    }

    fn sample_tree() -> CountryTree {
        CountryTree {
            name: "CHN".to_string(),
            children: vec![
                sector("waste", 5.0),
                sector("Total including LUCF", 100.0),
                sector("power", 60.0),
                sector("buildings", 5.0),
            ],
        }
    }

    fn names(tree: &CountryTree) -> Vec<&str> {
        tree.children.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_exclude_sectors() {
        let tree = sample_tree();
        let filtered = exclude_sectors(&tree, &["Total including LUCF"]);

        assert_eq!(names(&filtered), vec!["waste", "power", "buildings"]);
        // Source tree untouched
        assert_eq!(tree.children.len(), 4);
    }

    #[test]
    fn test_exclude_nothing() {
        let tree = sample_tree();
        let filtered = exclude_sectors::<&str>(&tree, &[]);
        assert_eq!(filtered, tree);
    }

    #[test]
    fn test_sort_by_value_is_stable() {
        let mut tree = sample_tree();
        sort_by_value(&mut tree);

        assert_eq!(
            names(&tree),
            vec!["Total including LUCF", "power", "waste", "buildings"]
        );
    }

    #[test]
    fn test_flatten() {
        let flat = flatten(&sample_tree());

        assert_eq!(flat.name, "Sectors");
        assert_eq!(flat.children.len(), 4);
        assert_eq!(flat.children[2], LeafNode::new("power", 60.0));
    }

    #[test]
    fn test_resolve_country_code() {
        assert_eq!(resolve_country_code("China"), "CHN");
        assert_eq!(resolve_country_code("united states"), "USA");
        assert_eq!(resolve_country_code(" Brazil "), "BRA");
        assert_eq!(resolve_country_code("civ"), "CIV");
    }

    #[test]
    fn test_find_country() {
        let mut dataset = HierarchicalDataset::new();
        dataset.insert("CHN".to_string(), sample_tree());

        assert!(find_country(&dataset, "china").is_some());
        assert!(find_country(&dataset, "chn").is_some());
        assert!(find_country(&dataset, "India").is_none());
    }
}
