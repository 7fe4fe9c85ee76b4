//! Estimator configuration.
//!
//! The only setting is where reference tables come from. With no data
//! directory the built-in tables are used.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::file_io::load_rate_tables;
use crate::rates::RateTables;

/// Environment variable naming a reference-data directory
pub const DATA_DIR_ENV: &str = "ESTIMATE_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Directory holding `services.json` and friends
    pub data_dir: Option<PathBuf>,
}

impl EstimatorConfig {
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        EstimatorConfig { data_dir }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Load the configured tables, falling back to the built-in set.
    pub fn rate_tables(&self) -> CalcResult<RateTables> {
        match &self.data_dir {
            Some(dir) => load_rate_tables(dir),
            None => Ok(RateTables::builtin()),
        }
    }
}
