//! Typed records for the raw emissions dataset.
//!
//! The raw JSON is a three-level mapping:
//! country code -> sector name -> sub-sector name -> value,
//! where the reserved key `sectorTotal` carries the sector aggregate.
//! Key order is preserved exactly as it appears in the document.

use crate::utils::config::DEFAULT_SECTOR_TOTAL;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Country code -> sectors
pub type RawDataset = IndexMap<String, SectorMap>;

/// Sector name -> sub-sector breakdown
pub type SectorMap = IndexMap<String, SubSectorMap>;

/// An emissions value, kept in the representation it was read with
///
/// Integers stay integers (`7`) and floats stay floats (`7.0`) when written back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emission(Number);

impl Emission {
    /// Numeric value for arithmetic and ordering
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_i64() || self.0.is_u64()
    }
}

impl From<Number> for Emission {
    fn from(number: Number) -> Self {
        Self(number)
    }
}

impl From<i64> for Emission {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

/// Non-finite values have no JSON form and collapse to `DEFAULT_SECTOR_TOTAL`
impl From<f64> for Emission {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Self)
            .unwrap_or_else(|| Self::from(DEFAULT_SECTOR_TOTAL))
    }
}

impl PartialEq<f64> for Emission {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

/// Sub-sector breakdown of a single sector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubSectorMap {
    /// Value of the reserved `sectorTotal` key, if the sector had one
    pub sector_total: Option<Emission>,

    /// Every other key, in document order
    pub sub_sectors: IndexMap<String, Emission>,
}

impl SubSectorMap {
    /// Sector total, falling back to `DEFAULT_SECTOR_TOTAL` when absent
    pub fn total_or_default(&self) -> Emission {
        self.sector_total
            .clone()
            .unwrap_or_else(|| Emission::from(DEFAULT_SECTOR_TOTAL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_defaults_to_integer_zero() {
        let total = SubSectorMap::default().total_or_default();
        assert_eq!(total, 0.0);
        assert!(total.is_integer());
        assert_eq!(serde_json::to_string(&total).unwrap(), "0");
    }

    #[test]
    fn test_total_when_present() {
        let sub = SubSectorMap {
            sector_total: Some(Emission::from(3.0)),
            ..Default::default()
        };
        assert_eq!(sub.total_or_default(), 3.0);
    }

    #[test]
    fn test_emission_keeps_representation() {
        assert_eq!(serde_json::to_string(&Emission::from(7i64)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Emission::from(7.0)).unwrap(), "7.0");
        assert_eq!(Emission::from(7i64), 7.0);
        assert_ne!(Emission::from(7i64), Emission::from(7.0));
    }

    #[test]
    fn test_non_finite_collapses_to_zero() {
        assert_eq!(Emission::from(f64::NAN), Emission::from(0i64));
    }
}
