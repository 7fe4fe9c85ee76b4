//! # Reference Rate Tables
//!
//! The fixed lookup tables every estimate is priced against:
//!
//! - **Services**: design offerings with a per-area rate
//! - **Quality levels**: percentage multipliers for finish quality (100 = x1.0)
//! - **Urgency levels**: percentage multipliers for delivery speed (100 = x1.0)
//! - **Quality factors**: raw multipliers used when pricing a [`Building`](crate::building::Building)
//!
//! Tables are keyed by id. A lookup miss returns `None`; turning a miss into
//! a [`CalcError`] is the calculator's job.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::rates::RateTables;
//!
//! let tables = RateTables::global();
//! let service = tables.service(1).unwrap();
//! assert_eq!(service.rate, 100.0);
//! assert!(tables.urgency(999).is_none());
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A design offering with a per-area cost rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    /// Cost per unit of project area
    pub rate: f64,
}

/// Finish-quality multiplier, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityLevel {
    pub id: u32,
    /// Display label (older data files call this field `quality`)
    #[serde(alias = "quality")]
    pub label: String,
    pub percentage: f64,
}

/// Delivery-speed multiplier, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyLevel {
    pub id: u32,
    /// Display label (older data files call this field `urgency`)
    #[serde(alias = "urgency")]
    pub label: String,
    pub percentage: f64,
}

/// Raw building-cost multiplier (1.0 = standard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityFactor {
    pub id: u32,
    pub label: String,
    pub factor: f64,
}

impl QualityLevel {
    /// Percentage as a scale factor (50% -> 0.5)
    pub fn multiplier(&self) -> f64 {
        self.percentage / 100.0
    }
}

impl UrgencyLevel {
    /// Percentage as a scale factor (200% -> 2.0)
    pub fn multiplier(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Records that live in an id-keyed table.
trait TableRecord {
    const TABLE: &'static str;
    fn id(&self) -> u32;
}

impl TableRecord for Service {
    const TABLE: &'static str = "services";
    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRecord for QualityLevel {
    const TABLE: &'static str = "qualities";
    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRecord for UrgencyLevel {
    const TABLE: &'static str = "urgencies";
    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRecord for QualityFactor {
    const TABLE: &'static str = "quality_factors";
    fn id(&self) -> u32 {
        self.id
    }
}

fn index_by_id<T: TableRecord>(records: Vec<T>) -> CalcResult<BTreeMap<u32, T>> {
    let mut table = BTreeMap::new();
    for record in records {
        let id = record.id();
        if table.insert(id, record).is_some() {
            return Err(CalcError::invalid_input(
                format!("{}.id", T::TABLE),
                id.to_string(),
                "Duplicate id in reference table",
            ));
        }
    }
    Ok(table)
}

// ============================================================================
// Built-in data
// ============================================================================

const BUILTIN_SERVICES: [(u32, &str, f64); 5] = [
    (1, "Architectural Design", 100.0),
    (2, "Structural Design", 80.0),
    (3, "Interior Design", 120.0),
    (4, "MEP Design", 60.0),
    (5, "Landscape Design", 40.0),
];

const BUILTIN_QUALITIES: [(u32, &str, f64); 3] = [
    (1, "High", 100.0),
    (2, "Standard", 50.0),
    (3, "Basic", 30.0),
];

const BUILTIN_URGENCIES: [(u32, &str, f64); 3] = [
    (1, "Very Urgent", 200.0),
    (2, "Urgent", 150.0),
    (3, "Normal delivery", 100.0),
];

const BUILTIN_QUALITY_FACTORS: [(u32, &str, f64); 3] = [
    (1, "Luxury", 1.5),
    (2, "Standard", 1.0),
    (3, "Economy", 0.75),
];

static GLOBAL_TABLES: Lazy<RateTables> = Lazy::new(RateTables::builtin);

/// Immutable set of reference tables keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTables {
    services: BTreeMap<u32, Service>,
    qualities: BTreeMap<u32, QualityLevel>,
    urgencies: BTreeMap<u32, UrgencyLevel>,
    quality_factors: BTreeMap<u32, QualityFactor>,
}

impl RateTables {
    /// Build tables from record lists.
    ///
    /// Fails with `InvalidInput` if any collection repeats an id.
    pub fn from_records(
        services: Vec<Service>,
        qualities: Vec<QualityLevel>,
        urgencies: Vec<UrgencyLevel>,
        quality_factors: Vec<QualityFactor>,
    ) -> CalcResult<Self> {
        Ok(RateTables {
            services: index_by_id(services)?,
            qualities: index_by_id(qualities)?,
            urgencies: index_by_id(urgencies)?,
            quality_factors: index_by_id(quality_factors)?,
        })
    }

    /// The tables shipped with the library.
    pub fn builtin() -> Self {
        RateTables {
            services: BUILTIN_SERVICES
                .iter()
                .map(|&(id, name, rate)| (id, Service { id, name: name.to_string(), rate }))
                .collect(),
            qualities: BUILTIN_QUALITIES
                .iter()
                .map(|&(id, label, percentage)| {
                    (id, QualityLevel { id, label: label.to_string(), percentage })
                })
                .collect(),
            urgencies: BUILTIN_URGENCIES
                .iter()
                .map(|&(id, label, percentage)| {
                    (id, UrgencyLevel { id, label: label.to_string(), percentage })
                })
                .collect(),
            quality_factors: builtin_quality_factors()
                .into_iter()
                .map(|f| (f.id, f))
                .collect(),
        }
    }

    /// Shared built-in tables, initialized on first use.
    pub fn global() -> &'static RateTables {
        &GLOBAL_TABLES
    }

    pub fn service(&self, id: u32) -> Option<&Service> {
        self.services.get(&id)
    }

    pub fn quality(&self, id: u32) -> Option<&QualityLevel> {
        self.qualities.get(&id)
    }

    pub fn urgency(&self, id: u32) -> Option<&UrgencyLevel> {
        self.urgencies.get(&id)
    }

    pub fn quality_factor(&self, id: u32) -> Option<&QualityFactor> {
        self.quality_factors.get(&id)
    }

    /// All services in ascending id order
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    /// All quality levels in ascending id order
    pub fn qualities(&self) -> impl Iterator<Item = &QualityLevel> {
        self.qualities.values()
    }

    /// All urgency levels in ascending id order
    pub fn urgencies(&self) -> impl Iterator<Item = &UrgencyLevel> {
        self.urgencies.values()
    }

    /// All quality factors in ascending id order
    pub fn quality_factors(&self) -> impl Iterator<Item = &QualityFactor> {
        self.quality_factors.values()
    }
}

impl Default for RateTables {
    fn default() -> Self {
        RateTables::builtin()
    }
}

/// Built-in quality factor records, used standalone when a data directory
/// has no factor file.
pub(crate) fn builtin_quality_factors() -> Vec<QualityFactor> {
    BUILTIN_QUALITY_FACTORS
        .iter()
        .map(|&(id, label, factor)| QualityFactor { id, label: label.to_string(), factor })
        .collect()
}

// ============================================================================
// Global lookups
// ============================================================================

/// List every service in the global tables.
pub fn get_service_list() -> Vec<Service> {
    RateTables::global().services().cloned().collect()
}

/// Look up a quality level in the global tables.
pub fn get_quality_values(id: u32) -> Option<QualityLevel> {
    RateTables::global().quality(id).cloned()
}

/// Look up an urgency level in the global tables.
pub fn get_urgency_index(id: u32) -> Option<UrgencyLevel> {
    RateTables::global().urgency(id).cloned()
}

/// Look up a building quality factor in the global tables.
pub fn get_quality_factor(id: u32) -> Option<QualityFactor> {
    RateTables::global().quality_factor(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_list() {
        let services = get_service_list();
        assert!(!services.is_empty());
        assert_eq!(services[0].id, 1);
        assert_eq!(services[0].name, "Architectural Design");
        assert_eq!(services[0].rate, 100.0);
    }

    #[test]
    fn test_quality_lookup() {
        let high = get_quality_values(1).unwrap();
        assert_eq!(high.label, "High");
        assert_eq!(high.percentage, 100.0);

        let standard = get_quality_values(2).unwrap();
        assert_eq!(standard.label, "Standard");
        assert!((standard.multiplier() - 0.5).abs() < 1e-12);

        assert!(get_quality_values(999).is_none());
    }

    #[test]
    fn test_urgency_lookup() {
        let very_urgent = get_urgency_index(1).unwrap();
        assert_eq!(very_urgent.label, "Very Urgent");
        assert_eq!(very_urgent.percentage, 200.0);

        let normal = get_urgency_index(3).unwrap();
        assert_eq!(normal.label, "Normal delivery");
        assert_eq!(normal.percentage, 100.0);

        assert!(get_urgency_index(999).is_none());
    }

    #[test]
    fn test_quality_factor_lookup() {
        assert_eq!(get_quality_factor(2).unwrap().factor, 1.0);
        assert!(get_quality_factor(0).is_none());
    }

    #[test]
    fn test_listing_is_ordered_by_id() {
        let tables = RateTables::from_records(
            vec![
                Service { id: 9, name: "Late".into(), rate: 1.0 },
                Service { id: 3, name: "Early".into(), rate: 2.0 },
            ],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();
        let ids: Vec<u32> = tables.services().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = RateTables::from_records(
            vec![],
            vec![
                QualityLevel { id: 1, label: "A".into(), percentage: 100.0 },
                QualityLevel { id: 1, label: "B".into(), percentage: 50.0 },
            ],
            vec![],
            vec![],
        );
        match result {
            Err(CalcError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "qualities.id");
                assert_eq!(value, "1");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_label_keys() {
        let quality: QualityLevel =
            serde_json::from_str(r#"{"id": 1, "quality": "High", "percentage": 100}"#).unwrap();
        assert_eq!(quality.label, "High");

        let urgency: UrgencyLevel =
            serde_json::from_str(r#"{"id": 3, "urgency": "Normal delivery", "percentage": 100}"#).unwrap();
        assert_eq!(urgency.label, "Normal delivery");
    }
}
