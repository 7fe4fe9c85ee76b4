//! # Building
//!
//! A second entity shape used for whole-building cost. Its area formula
//! has no story offset:
//!
//! ```text
//! area = land_area * 720 * (percent_covered / 100) * number_of_stories
//! cost = area * quality_factor * 2000
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::project::AREA_FACTOR;
use crate::rates::RateTables;

/// Cost per unit of built area before the quality factor is applied
pub const BUILDING_UNIT_COST: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub land_area: f64,

    /// Ground coverage in percent (0-100)
    pub percent_covered: f64,

    pub number_of_stories: i32,
}

impl Building {
    pub fn new(land_area: f64, percent_covered: f64, number_of_stories: i32) -> Self {
        Building {
            land_area,
            percent_covered,
            number_of_stories,
        }
    }

    /// Total built area. Zero when either stories or coverage is zero.
    pub fn build_area(&self) -> f64 {
        self.land_area
            * AREA_FACTOR
            * (self.percent_covered / 100.0)
            * f64::from(self.number_of_stories)
    }

    /// Building cost for a raw quality multiplier (linear in the factor).
    pub fn building_cost(&self, quality_factor: f64) -> f64 {
        self.build_area() * quality_factor * BUILDING_UNIT_COST
    }
}

/// Construct a [`Building`] from its three inputs.
pub fn define_building(land_area: f64, percent_covered: f64, number_of_stories: i32) -> Building {
    Building::new(land_area, percent_covered, number_of_stories)
}

pub fn build_area(building: &Building) -> f64 {
    building.build_area()
}

pub fn get_building_cost(building: &Building, quality_factor: f64) -> f64 {
    building.building_cost(quality_factor)
}

impl RateTables {
    /// Price a building using a factor from the quality-factor table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use estimate_core::building::define_building;
    /// use estimate_core::rates::RateTables;
    ///
    /// let building = define_building(100.0, 50.0, 2);
    /// let cost = RateTables::global().building_cost_for(&building, 2)?;
    /// assert_eq!(cost, building.building_cost(1.0));
    /// # Ok::<(), estimate_core::errors::CalcError>(())
    /// ```
    pub fn building_cost_for(&self, building: &Building, quality_factor_id: u32) -> CalcResult<f64> {
        let factor = self
            .quality_factor(quality_factor_id)
            .ok_or_else(|| CalcError::quality_factor_not_found(quality_factor_id))?;

        let cost = building.building_cost(factor.factor);
        debug!(
            quality_factor = %factor.label,
            area = building.build_area(),
            cost,
            "building cost computed"
        );
        Ok(cost)
    }
}
