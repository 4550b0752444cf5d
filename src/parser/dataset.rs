//! Raw dataset loader.
//!
//! Converts untyped JSON into `RawDataset` records, checking the shape
//! at every level. Anything that is not an object where a mapping is
//! expected, or not a number where a value is expected, is rejected
//! with `ParseError::TypeMismatch` naming the offending path.

use super::schema::{Emission, RawDataset, SectorMap, SubSectorMap};
use crate::utils::config::SECTOR_TOTAL_KEY;
use crate::utils::error::ParseError;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a raw emissions dataset from a JSON file
///
/// **Public** - entry point for the load stage
///
/// # Errors
/// * `ParseError::ReadFailed` - file missing or unreadable
/// * `ParseError::JsonError` - not valid JSON
/// * `ParseError::TypeMismatch` - valid JSON with the wrong shape
pub fn load_dataset(input_path: impl AsRef<Path>) -> Result<RawDataset, ParseError> {
    let input_path = input_path.as_ref();

    info!("Loading raw dataset from: {}", input_path.display());

    let file = File::open(input_path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_dataset(&document)
}

/// Parse an untyped JSON document into a `RawDataset`
///
/// **Public** - main entry point for shape checking
///
/// # Arguments
/// * `document` - Parsed JSON, expected to be country -> sector -> sub-sector -> number
///
/// # Returns
/// Typed dataset with key order preserved at every level
pub fn parse_dataset(document: &Value) -> Result<RawDataset, ParseError> {
    let countries = expect_object(document, "$")?;

    let mut dataset = RawDataset::with_capacity(countries.len());

    for (country, sectors) in countries {
        let path = child_path("$", country);
        let sectors = parse_sectors(expect_object(sectors, &path)?, &path)?;
        dataset.insert(country.clone(), sectors);
    }

    debug!("Parsed {} countries", dataset.len());

    Ok(dataset)
}

/// Parse the sector level of one country
///
/// **Private** - internal helper for parse_dataset
fn parse_sectors(sectors: &Map<String, Value>, country_path: &str) -> Result<SectorMap, ParseError> {
    let mut sector_map = SectorMap::with_capacity(sectors.len());

    for (sector, sub_dict) in sectors {
        let path = child_path(country_path, sector);
        let sub_sectors = parse_sub_sectors(expect_object(sub_dict, &path)?, &path)?;
        sector_map.insert(sector.clone(), sub_sectors);
    }

    Ok(sector_map)
}

/// Parse the sub-sector level of one sector, splitting off `sectorTotal`
///
/// **Private** - internal helper for parse_sectors
fn parse_sub_sectors(
    sub_dict: &Map<String, Value>,
    sector_path: &str,
) -> Result<SubSectorMap, ParseError> {
    let mut parsed = SubSectorMap::default();

    for (key, value) in sub_dict {
        let number = expect_number(value, || child_path(sector_path, key))?;

        if key == SECTOR_TOTAL_KEY {
            parsed.sector_total = Some(number);
        } else {
            parsed.sub_sectors.insert(key.clone(), number);
        }
    }

    Ok(parsed)
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ParseError> {
    value.as_object().ok_or_else(|| ParseError::TypeMismatch {
        path: path.to_string(),
        expected: "object",
        found: json_type_name(value),
    })
}

fn expect_number(value: &Value, path: impl FnOnce() -> String) -> Result<Emission, ParseError> {
    match value {
        Value::Number(number) => Ok(Emission::from(number.clone())),
        other => Err(ParseError::TypeMismatch {
            path: path(),
            expected: "number",
            found: json_type_name(other),
        }),
    }
}

/// Extend a location path with one key
///
/// Simple keys use dot notation (`$.CHN.power`); anything else is bracketed
/// and quoted (`$.CHN["Total excluding LUCF"]`, `$["a.b"]`).
fn child_path(parent: &str, key: &str) -> String {
    let is_simple = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if is_simple {
        format!("{}.{}", parent, key)
    } else {
        // Serializing a str cannot fail
        let quoted = serde_json::to_string(key).unwrap_or_default();
        format!("{}[{}]", parent, quoted)
    }
}

/// Human-readable JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
