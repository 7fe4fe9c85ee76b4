//! # Project
//!
//! Raw geometric inputs for a priced design job. A `Project` is built per
//! estimate and discarded afterwards; nothing mutates it after construction.
//!
//! ## Area Formula
//!
//! ```text
//! area = land_area * 720 * (number_of_story - 1) * (ground_coverage / 100)
//! ```
//!
//! The story count is offset by one, so a single-story project has zero
//! area and a zero-story project has negative area. This differs from
//! [`Building::build_area`](crate::building::Building::build_area).
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::project::define_project;
//!
//! let project = define_project(500.0, 2, 50.0);
//! assert_eq!(project.calculate_area(), 180_000.0);
//! ```

use serde::{Deserialize, Serialize};

/// Area multiplier applied to land area in both entity formulas
pub const AREA_FACTOR: f64 = 720.0;

/// Geometric inputs for a cost estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "land_area": 500.0,
///   "number_of_story": 2,
///   "ground_coverage": 50.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Land area of the plot
    pub land_area: f64,

    /// Number of stories (signed; zero and one are accepted as-is)
    pub number_of_story: i32,

    /// Ground coverage in percent (0-100)
    pub ground_coverage: f64,
}

impl Project {
    pub fn new(land_area: f64, number_of_story: i32, ground_coverage: f64) -> Self {
        Project {
            land_area,
            number_of_story,
            ground_coverage,
        }
    }

    /// Chargeable area for this project.
    pub fn calculate_area(&self) -> f64 {
        self.land_area
            * AREA_FACTOR
            * (f64::from(self.number_of_story) - 1.0)
            * (self.ground_coverage / 100.0)
    }
}

/// Construct a [`Project`] from its three inputs.
pub fn define_project(land_area: f64, number_of_story: i32, ground_coverage: f64) -> Project {
    Project::new(land_area, number_of_story, ground_coverage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_area() {
        let project = define_project(500.0, 2, 50.0);
        // 500 * 720 * 1 * 0.5
        assert!((project.calculate_area() - 180_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_story_has_zero_area() {
        assert_eq!(define_project(500.0, 1, 50.0).calculate_area(), 0.0);
    }

    #[test]
    fn test_zero_stories_gives_negative_area() {
        let area = define_project(500.0, 0, 50.0).calculate_area();
        assert!((area + 180_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_minimum_story_count_stays_negative() {
        let area = define_project(500.0, i32::MIN, 50.0).calculate_area();
        // 500 * 720 * (-2147483648 - 1) * 0.5
        let expected = 500.0 * 720.0 * -2_147_483_649.0 * 0.5;
        assert!(area < 0.0);
        assert!((area - expected).abs() <= 1e-9 * expected.abs());
    }

    #[test]
    fn test_area_scales_with_coverage() {
        let half = define_project(100.0, 3, 50.0).calculate_area();
        let full = define_project(100.0, 3, 100.0).calculate_area();
        assert!((full - 2.0 * half).abs() < 1e-6);
    }

    #[test]
    fn test_project_serialization() {
        let project = define_project(250.0, 4, 60.0);
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"number_of_story\":4"));
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, roundtrip);
    }
}
