// Device domain model
use crate::domain::reading::{Metric, Readings, Severity};
use crate::domain::threshold::ThresholdTable;
use serde::{Deserialize, Serialize};

pub const CALIBRATION_STEPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: usize,
    pub name: String,
    pub signal: String,
    pub log_to: String,
    pub location: String,
    /// Calibration weights in grams, one per calibration step.
    pub calibration: [f64; CALIBRATION_STEPS],
    #[serde(flatten)]
    pub readings: Readings,
    pub paused: bool,
    pub expanded: bool,
}

impl Device {
    /// Effective severity of one metric. The stored reading is untouched when
    /// the device is paused; only its classification changes.
    pub fn severity(&self, metric: Metric, thresholds: &ThresholdTable) -> Severity {
        thresholds.classify(metric, self.readings.get(metric), self.paused)
    }

    pub fn severities(&self, thresholds: &ThresholdTable) -> [Severity; 3] {
        Metric::ALL.map(|metric| self.severity(metric, thresholds))
    }
}

/// Make ids match positions again after a removal.
pub fn reindex(devices: &mut [Device]) {
    for (index, device) in devices.iter_mut().enumerate() {
        device.id = index;
    }
}
