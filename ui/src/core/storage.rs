//! Loading helpers for comparison sets (a with/without run pair).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::sim::SimulationResult;

const DEMO_SET_JSON: &str = include_str!("../../assets/demo/comparison.json");

/// Both runs of one scenario, as exported by the simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSet {
    pub with: SimulationResult,
    pub without: SimulationResult,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("couldn't read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed comparison set: {0}")]
    Json(#[from] serde_json::Error),
}

impl ComparisonSet {
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        let set: ComparisonSet = serde_json::from_str(raw)?;
        debug!(
            with_samples = set.with.samples.len(),
            without_samples = set.without.samples.len(),
            "parsed comparison set"
        );
        Ok(set)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_json(&raw)?;
        info!(path = %path.display(), "loaded comparison set");
        Ok(set)
    }

    /// Built-in scenario bundled with the app so the panel is never empty.
    pub fn demo() -> Self {
        // The bundled file is covered by `demo_set_parses`; a failure here is a packaging bug.
        Self::from_json(DEMO_SET_JSON).expect("bundled demo comparison set is valid")
    }
}
