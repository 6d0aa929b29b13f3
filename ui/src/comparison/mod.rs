mod panel;
pub use panel::MetricsPanel;

mod toggle;
pub use toggle::{mode_label, ComparisonToggle};

mod export;
pub use export::{build_csv, chart_svg, ChartExportPanel, ExportError};
#[cfg(not(target_arch = "wasm32"))]
pub use export::rasterize_png;

mod utils;
pub(crate) use utils::*;

use std::path::Path;

use tracing::warn;

use crate::core::storage::ComparisonSet;

/// Shared state for the comparison page: the loaded run pair, where it came
/// from, and any load error (the demo set stands in when loading fails).
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonState {
    pub set: ComparisonSet,
    pub source: String,
    pub error: Option<String>,
}

impl ComparisonState {
    pub fn demo() -> Self {
        Self {
            set: ComparisonSet::demo(),
            source: "demo".to_string(),
            error: None,
        }
    }

    pub fn load(path: &Path) -> Self {
        match ComparisonSet::load(path) {
            Ok(set) => Self {
                set,
                source: path.display().to_string(),
                error: None,
            },
            Err(err) => {
                warn!(%err, "falling back to demo comparison set");
                Self {
                    error: Some(format!("Couldn't load comparison set: {err}")),
                    ..Self::demo()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_keeps_demo_data_and_reports() {
        let state = ComparisonState::load(Path::new("/no/such/comparison.json"));
        assert_eq!(state.source, "demo");
        assert_eq!(state.set, ComparisonSet::demo());
        let error = state.error.expect("error message");
        assert!(error.starts_with("Couldn't load comparison set"));
    }
}
