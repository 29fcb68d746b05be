// Threshold table and severity classification
use crate::domain::error::DomainError;
use crate::domain::reading::{Metric, Severity};
use serde::{Deserialize, Serialize};

/// Cutoffs for one metric. Values at or above `orange` need attention,
/// values at or above `red` need action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub orange: f64,
    pub red: f64,
}

impl Thresholds {
    pub const fn new(orange: f64, red: f64) -> Self {
        Self { orange, red }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub pressure: Thresholds,
    pub temperature: Thresholds,
    pub humidity: Thresholds,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            pressure: Thresholds::new(325.0, 350.0),
            temperature: Thresholds::new(40.0, 50.0),
            humidity: Thresholds::new(25.0, 50.0),
        }
    }
}

impl ThresholdTable {
    pub fn get(&self, metric: Metric) -> Thresholds {
        match metric {
            Metric::Pressure => self.pressure,
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for metric in Metric::ALL {
            let Thresholds { orange, red } = self.get(metric);
            if !orange.is_finite() || !red.is_finite() {
                return Err(DomainError::InvalidThresholds(format!(
                    "{metric} cutoffs must be finite"
                )));
            }
            if red <= orange {
                return Err(DomainError::InvalidThresholds(format!(
                    "{metric} red cutoff {red} must exceed orange cutoff {orange}"
                )));
            }
        }
        Ok(())
    }

    /// Classify a single reading. Paused devices never raise an alarm, and
    /// both cutoffs are inclusive.
    pub fn classify(&self, metric: Metric, value: f64, paused: bool) -> Severity {
        if paused {
            return Severity::Good;
        }

        let thresholds = self.get(metric);
        if value >= thresholds.red {
            Severity::Red
        } else if value >= thresholds.orange {
            Severity::Orange
        } else {
            Severity::Good
        }
    }
}
