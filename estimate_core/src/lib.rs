//! # estimate_core - Construction Cost Estimation Engine
//!
//! `estimate_core` prices construction design work from a few fixed
//! reference tables (service rates, quality and urgency multipliers)
//! and two simple area formulas. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable inputs
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Lookup misses are typed errors, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::{calculate_cost, define_project};
//!
//! let project = define_project(500.0, 2, 50.0);
//! let cost = calculate_cost(&project, 1, 2, 1).unwrap();
//! assert!((cost - 18_000_000.0).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`rates`] - Reference tables and id lookups
//! - [`project`] - Project entity and its area formula
//! - [`building`] - Building entity, area and building cost
//! - [`estimate`] - The cost calculator
//! - [`file_io`] - Loading and saving tables as JSON
//! - [`config`] - Where tables are loaded from
//! - [`errors`] - Structured error types

pub mod building;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod file_io;
pub mod project;
pub mod rates;

// Re-export commonly used types at crate root for convenience
pub use building::{build_area, define_building, get_building_cost, Building};
pub use config::EstimatorConfig;
pub use errors::{CalcError, CalcResult};
pub use estimate::{calculate_cost, CostEstimate, EstimateRequest};
pub use file_io::{load_rate_tables, save_rate_tables};
pub use project::{define_project, Project};
pub use rates::{
    get_quality_factor, get_quality_values, get_service_list, get_urgency_index, QualityFactor,
    QualityLevel, RateTables, Service, UrgencyLevel,
};
