//! Build hierarchical trees from raw emissions data.
//!
//! Input:  country -> sector -> { sub-sector: value, ..., sectorTotal: value }
//! Output: country -> { name, children: [ { name, value, children: [ { name, value } ] } ] }
//!
//! Example: `{"CHN": {"energy": {"coal": 10.0, "sectorTotal": 10.0}}}`
//! becomes a CHN root with one "energy" node (value 10.0) holding one "coal" leaf.

use super::node::{CountryTree, HierarchicalDataset, LeafNode, SectorNode};
use crate::parser::{parse_dataset, RawDataset, SectorMap, SubSectorMap};
use crate::utils::error::ParseError;
use log::debug;

/// Build the hierarchical dataset from a typed raw dataset
///
/// **Public** - main entry point for the transform
///
/// # Arguments
/// * `raw` - Parsed raw dataset
///
/// # Returns
/// One `CountryTree` per input country. Sectors and leaves keep input order;
/// `sectorTotal` becomes the sector's value and never a leaf.
pub fn build_tree(raw: &RawDataset) -> HierarchicalDataset {
    debug!("Building trees for {} countries", raw.len());

    raw.iter()
        .map(|(country, sectors)| (country.clone(), build_country(country, sectors)))
        .collect()
}

/// Shape-check untyped JSON and build the hierarchical dataset in one call
///
/// **Public** - convenience for callers holding a `serde_json::Value`
///
/// # Errors
/// * `ParseError::TypeMismatch` - a level of the document has the wrong type
pub fn build_tree_from_value(document: &serde_json::Value) -> Result<HierarchicalDataset, ParseError> {
    let raw = parse_dataset(document)?;
    Ok(build_tree(&raw))
}

/// Build the tree for a single country
///
/// **Public** - used when only one country is needed
pub fn build_country(country: &str, sectors: &SectorMap) -> CountryTree {
    CountryTree {
        name: country.to_string(),
        children: sectors
            .iter()
            .map(|(sector, sub_dict)| build_sector(sector, sub_dict))
            .collect(),
    }
}

/// Build one sector node
///
/// **Private** - internal helper for build_country
fn build_sector(sector: &str, sub_dict: &SubSectorMap) -> SectorNode {
    let children = sub_dict
        .sub_sectors
        .iter()
        .map(|(sub_sector, value)| LeafNode::new(sub_sector.as_str(), value.clone()))
        .collect();

    SectorNode {
        name: sector.to_string(),
        value: sub_dict.total_or_default(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_build_sector_without_total() {
        let raw = parse_dataset(&json!({"IND": {"agriculture": {"a": 1.0, "b": 2.0}}})).unwrap();
        let trees = build_tree(&raw);

        let sector = &trees["IND"].children[0];
        assert_eq!(sector.value, 0.0);
        assert_eq!(sector.children, vec![LeafNode::new("a", 1.0), LeafNode::new("b", 2.0)]);
    }

    #[test]
    fn test_build_country_without_sectors() {
        let trees = build_tree_from_value(&json!({"BRA": {}})).unwrap();

        assert_eq!(
            trees["BRA"],
            CountryTree {
                name: "BRA".to_string(),
                children: vec![],
            }
        );
    }

    #[test]
    fn test_build_empty_dataset() {
        let trees = build_tree(&RawDataset::new());
        assert!(trees.is_empty());
    }

    #[test]
    fn test_build_from_value_reports_shape_error() {
        let err = build_tree_from_value(&json!({"CHN": {"power": "lots"}})).unwrap_err();
        assert!(matches!(err, ParseError::TypeMismatch { .. }));
    }

    #[test]
    fn test_integers_stay_integers() {
        let trees = build_tree_from_value(&json!({
            "USA": {
                "waste": {"landfills": 7, "sectorTotal": 7},
                "power": {"coal": 2.5}
            }
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&trees["USA"]).unwrap(),
            json!({
                "name": "USA",
                "children": [
                    {"name": "waste", "value": 7, "children": [{"name": "landfills", "value": 7}]},
                    {"name": "power", "value": 0, "children": [{"name": "coal", "value": 2.5}]}
                ]
            })
        );
        let text = serde_json::to_string(&trees).unwrap();
        assert!(text.contains(r#""value":7,"#));
        assert!(text.contains(r#""value":0,"#));
    }

    #[test]
    fn test_sector_total_only() {
        let trees = build_tree_from_value(&json!({"RUS": {"waste": {"sectorTotal": 4.5}}})).unwrap();

        let sector = &trees["RUS"].children[0];
        assert_eq!(sector.value, 4.5);
        assert!(sector.children.is_empty());
    }
}
