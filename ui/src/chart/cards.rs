//! Summary cards shown above the chart: max error, recovery time and safety
//! status of the primary run. Pure formatting, total over its input.

use crate::core::format;
use crate::core::sim::SimulationResult;

/// Semantic accent for a card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Plain,
    Highlight,
    Positive,
    Caution,
}

impl Accent {
    /// Suggested CSS modifier, e.g. `metric-card__value--positive`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Accent::Plain => "metric-card__value--plain",
            Accent::Highlight => "metric-card__value--highlight",
            Accent::Positive => "metric-card__value--positive",
            Accent::Caution => "metric-card__value--caution",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    MaxError,
    RecoveryTime,
    SafetyStatus,
}

impl MetricKind {
    pub fn label(&self) -> String {
        match self {
            MetricKind::MaxError => crate::t!("metric-max-error"),
            MetricKind::RecoveryTime => crate::t!("metric-recovery-time"),
            MetricKind::SafetyStatus => crate::t!("metric-safety-status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub value: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub max_error: MetricCard,
    pub recovery: MetricCard,
    pub safety: MetricCard,
}

impl SummaryCards {
    pub fn build(primary: &SimulationResult) -> Self {
        let safety_accent = if primary.safety_status.is_maintained() {
            Accent::Positive
        } else {
            Accent::Caution
        };

        Self {
            max_error: MetricCard {
                kind: MetricKind::MaxError,
                value: format::format_km(primary.max_error_km),
                accent: Accent::Highlight,
            },
            recovery: MetricCard {
                kind: MetricKind::RecoveryTime,
                value: format::format_recovery(primary.recovery_time_sec),
                accent: Accent::Plain,
            },
            safety: MetricCard {
                kind: MetricKind::SafetyStatus,
                value: primary.safety_status.as_str().to_string(),
                accent: safety_accent,
            },
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> [&MetricCard; 3] {
        [&self.max_error, &self.recovery, &self.safety]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sim::SafetyStatus;

    fn primary(max: f64, recovery: Option<f64>, status: &str) -> SimulationResult {
        SimulationResult {
            samples: Vec::new(),
            max_error_km: max,
            recovery_time_sec: recovery,
            safety_status: SafetyStatus::new(status),
        }
    }

    #[test]
    fn maintained_run_is_positive() {
        let cards = SummaryCards::build(&primary(8.44, Some(27.4), "maintained"));
        assert_eq!(cards.max_error.value, "8.4 km");
        assert_eq!(cards.max_error.accent, Accent::Highlight);
        assert_eq!(cards.recovery.value, "27s");
        assert_eq!(cards.recovery.accent, Accent::Plain);
        assert_eq!(cards.safety.value, "maintained");
        assert_eq!(cards.safety.accent, Accent::Positive);
    }

    #[test]
    fn unrecovered_run_shows_placeholder_and_caution() {
        let cards = SummaryCards::build(&primary(21.6, None, "breached"));
        assert_eq!(cards.recovery.value, "—");
        assert_eq!(cards.safety.value, "breached");
        assert_eq!(cards.safety.accent, Accent::Caution);
        assert_eq!(cards.safety.accent.css_class(), "metric-card__value--caution");
    }

    #[test]
    fn cards_keep_display_order() {
        let cards = SummaryCards::build(&primary(1.0, Some(0.0), "maintained"));
        let kinds: Vec<MetricKind> = cards.cards().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MetricKind::MaxError,
                MetricKind::RecoveryTime,
                MetricKind::SafetyStatus
            ]
        );
        assert_eq!(cards.recovery.value, "0s");
    }
}
