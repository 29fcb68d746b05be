// Fleet aggregation: reduce many severities to one
use crate::domain::device::Device;
use crate::domain::reading::{Metric, Severity};
use crate::domain::threshold::ThresholdTable;

/// Any red wins, then any orange, otherwise good. An empty slice is good.
pub fn worst_severity(severities: &[Severity]) -> Severity {
    if severities.iter().any(|s| *s == Severity::Red) {
        return Severity::Red;
    }
    if severities.iter().any(|s| *s == Severity::Orange) {
        return Severity::Orange;
    }
    Severity::Good
}

pub fn summary_text(severity: Severity) -> &'static str {
    match severity {
        Severity::Red => "Act Now",
        Severity::Orange => "Pay Attention",
        Severity::Good => "Good Job",
    }
}

/// Card severity of a single device across its three metrics.
pub fn device_severity(device: &Device, thresholds: &ThresholdTable) -> Severity {
    worst_severity(&device.severities(thresholds))
}

/// Fleet-wide severity of one metric.
pub fn fleet_metric_severity(devices: &[Device], metric: Metric, thresholds: &ThresholdTable) -> Severity {
    let severities: Vec<Severity> = devices
        .iter()
        .map(|device| device.severity(metric, thresholds))
        .collect();
    worst_severity(&severities)
}

/// Dashboard severity: the worst of the three fleet-wide metric severities.
pub fn overall_severity(devices: &[Device], thresholds: &ThresholdTable) -> Severity {
    let per_metric = Metric::ALL.map(|metric| fleet_metric_severity(devices, metric, thresholds));
    worst_severity(&per_metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::Readings;

    fn device(id: usize, pressure: f64, temperature: f64, humidity: f64) -> Device {
        Device {
            id,
            name: format!("HT1{id}0"),
            signal: "-77dBm".to_string(),
            log_to: String::new(),
            location: "Right Heel".to_string(),
            calibration: [30.0, 40.0, 50.0],
            readings: Readings::new(pressure, temperature, humidity),
            paused: false,
            expanded: false,
        }
    }

    #[test]
    fn test_worst_severity() {
        assert_eq!(worst_severity(&[]), Severity::Good);
        assert_eq!(
            worst_severity(&[Severity::Good, Severity::Orange, Severity::Good]),
            Severity::Orange
        );
        assert_eq!(worst_severity(&[Severity::Red, Severity::Good]), Severity::Red);
        assert_eq!(worst_severity(&[Severity::Orange, Severity::Red]), Severity::Red);
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(Severity::Red), "Act Now");
        assert_eq!(summary_text(Severity::Orange), "Pay Attention");
        assert_eq!(summary_text(Severity::Good), "Good Job");
    }

    #[test]
    fn test_device_at_red_pressure_cutoff() {
        let thresholds = ThresholdTable::default();
        let sensor = device(0, 350.0, 20.0, 20.0);
        let severity = device_severity(&sensor, &thresholds);
        assert_eq!(severity, Severity::Red);
        assert_eq!(summary_text(severity), "Act Now");
    }

    #[test]
    fn test_paused_device_is_good() {
        let thresholds = ThresholdTable::default();
        let mut sensor = device(0, 350.0, 20.0, 20.0);
        sensor.paused = true;
        assert_eq!(device_severity(&sensor, &thresholds), Severity::Good);
    }

    #[test]
    fn test_fleet_metric_takes_worst_device() {
        let thresholds = ThresholdTable::default();
        // The first device is orange; a later device is red and must still win.
        let devices = vec![device(0, 330.0, 20.0, 20.0), device(1, 360.0, 20.0, 20.0)];
        assert_eq!(
            fleet_metric_severity(&devices, Metric::Pressure, &thresholds),
            Severity::Red
        );
        assert_eq!(
            fleet_metric_severity(&devices, Metric::Humidity, &thresholds),
            Severity::Good
        );
    }

    #[test]
    fn test_overall_severity() {
        let thresholds = ThresholdTable::default();
        assert_eq!(overall_severity(&[], &thresholds), Severity::Good);

        let devices = vec![device(0, 300.0, 20.0, 30.0), device(1, 300.0, 20.0, 10.0)];
        assert_eq!(overall_severity(&devices, &thresholds), Severity::Orange);

        let devices = vec![device(0, 300.0, 55.0, 30.0)];
        assert_eq!(overall_severity(&devices, &thresholds), Severity::Red);
    }
}
