//! # Cost Calculator
//!
//! Prices a [`Project`] for one service at a chosen quality and urgency.
//!
//! ## Procedure
//!
//! 1. Look up the service, then the quality level, then the urgency level.
//!    The first miss fails the whole request.
//! 2. `base_cost = project.calculate_area() * service.rate`
//! 3. `final_cost = base_cost * (quality% / 100) * (urgency% / 100)`
//!
//! No rounding is applied.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::estimate::calculate_cost;
//! use estimate_core::project::define_project;
//!
//! let project = define_project(500.0, 2, 50.0);
//! // Architectural design, standard quality, very urgent
//! let cost = calculate_cost(&project, 1, 2, 1)?;
//! assert!((cost - 18_000_000.0).abs() < 1e-6);
//! # Ok::<(), estimate_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::project::Project;
use crate::rates::RateTables;

/// One pricing request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "project": { "land_area": 500.0, "number_of_story": 2, "ground_coverage": 50.0 },
///   "service_id": 1,
///   "quality_id": 2,
///   "urgency_id": 1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub project: Project,
    pub service_id: u32,
    pub quality_id: u32,
    pub urgency_id: u32,
}

/// Priced result with every intermediate value kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub service: String,
    pub quality: String,
    pub urgency: String,

    /// Project area from [`Project::calculate_area`]
    pub area: f64,

    pub rate: f64,

    /// area * rate
    pub base_cost: f64,

    /// Quality percentage as a scale factor
    pub quality_multiplier: f64,

    /// Urgency percentage as a scale factor
    pub urgency_multiplier: f64,

    pub final_cost: f64,
}

impl RateTables {
    /// Price a request against these tables.
    pub fn estimate(&self, request: &EstimateRequest) -> CalcResult<CostEstimate> {
        let service = self
            .service(request.service_id)
            .ok_or_else(|| CalcError::service_not_found(request.service_id))?;
        let quality = self
            .quality(request.quality_id)
            .ok_or_else(|| CalcError::quality_not_found(request.quality_id))?;
        let urgency = self
            .urgency(request.urgency_id)
            .ok_or_else(|| CalcError::urgency_not_found(request.urgency_id))?;

        let area = request.project.calculate_area();
        let base_cost = area * service.rate;
        let quality_multiplier = quality.multiplier();
        let urgency_multiplier = urgency.multiplier();
        let final_cost = base_cost * quality_multiplier * urgency_multiplier;

        debug!(
            service = %service.name,
            quality = %quality.label,
            urgency = %urgency.label,
            area,
            final_cost,
            "estimate computed"
        );

        Ok(CostEstimate {
            service: service.name.clone(),
            quality: quality.label.clone(),
            urgency: urgency.label.clone(),
            area,
            rate: service.rate,
            base_cost,
            quality_multiplier,
            urgency_multiplier,
            final_cost,
        })
    }

    /// Final cost only. Same lookups and errors as [`RateTables::estimate`].
    pub fn calculate_cost(
        &self,
        project: &Project,
        service_id: u32,
        quality_id: u32,
        urgency_id: u32,
    ) -> CalcResult<f64> {
        let request = EstimateRequest {
            project: *project,
            service_id,
            quality_id,
            urgency_id,
        };
        self.estimate(&request).map(|e| e.final_cost)
    }
}

/// Price a project against the built-in tables.
pub fn calculate_cost(project: &Project, service_id: u32, quality_id: u32, urgency_id: u32) -> CalcResult<f64> {
    RateTables::global().calculate_cost(project, service_id, quality_id, urgency_id)
}
