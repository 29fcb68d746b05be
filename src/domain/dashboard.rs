// Display-ready status dashboard and chart models
use crate::domain::device::Device;
use crate::domain::fleet::{device_severity, fleet_metric_severity, overall_severity, summary_text};
use crate::domain::palette::{resolve_color, resolve_icon, summary_color, summary_icon, AssetKey, Color};
use crate::domain::reading::{Metric, Severity};
use crate::domain::threshold::ThresholdTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub severity: Severity,
    pub text: &'static str,
    pub icon: AssetKey,
    pub color: Color,
}

impl Summary {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            text: summary_text(severity),
            icon: summary_icon(severity),
            color: summary_color(severity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingView {
    pub metric: Metric,
    pub value: f64,
    pub unit: &'static str,
    pub severity: Severity,
    pub color: Color,
    pub icon: AssetKey,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCard {
    pub id: usize,
    pub name: String,
    pub location: String,
    pub signal: String,
    pub paused: bool,
    pub expanded: bool,
    pub caption_color: Color,
    pub readings: Vec<ReadingView>,
    pub summary: Summary,
}

impl DeviceCard {
    pub fn build(device: &Device, thresholds: &ThresholdTable, dark: bool) -> Self {
        let readings = Metric::ALL
            .iter()
            .map(|&metric| {
                let severity = device.severity(metric, thresholds);
                ReadingView {
                    metric,
                    value: device.readings.get(metric),
                    unit: metric.unit(),
                    severity,
                    color: resolve_color(severity, dark),
                    icon: resolve_icon(metric, severity, dark),
                }
            })
            .collect();

        Self {
            id: device.id,
            name: device.name.clone(),
            location: device.location.clone(),
            signal: device.signal.clone(),
            paused: device.paused,
            expanded: device.expanded,
            caption_color: Color::TextSecondary { dark },
            readings,
            summary: Summary::new(device_severity(device, thresholds)),
        }
    }
}

/// Fleet-wide tile for one metric. Healthy tiles are theme coloured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTile {
    pub metric: Metric,
    pub severity: Severity,
    pub color: Color,
    pub icon: AssetKey,
}

impl MetricTile {
    pub fn build(devices: &[Device], metric: Metric, thresholds: &ThresholdTable, dark: bool) -> Self {
        let severity = fleet_metric_severity(devices, metric, thresholds);
        Self {
            metric,
            severity,
            color: resolve_color(severity, dark),
            icon: resolve_icon(metric, severity, dark),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDashboard {
    pub dark: bool,
    pub devices: Vec<DeviceCard>,
    pub metrics: Vec<MetricTile>,
    pub overall: Summary,
}

impl StatusDashboard {
    pub fn build(devices: &[Device], thresholds: &ThresholdTable, dark: bool) -> Self {
        Self {
            dark,
            devices: devices
                .iter()
                .map(|device| DeviceCard::build(device, thresholds, dark))
                .collect(),
            metrics: Metric::ALL
                .iter()
                .map(|&metric| MetricTile::build(devices, metric, thresholds, dark))
                .collect(),
            overall: Summary::new(overall_severity(devices, thresholds)),
        }
    }
}

/// One row of a per-metric device list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub id: usize,
    pub location: String,
    pub value: f64,
    pub severity: Severity,
    pub badge: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricList {
    pub tile: MetricTile,
    pub unit: &'static str,
    pub rows: Vec<MetricRow>,
}

impl MetricList {
    pub fn build(devices: &[Device], metric: Metric, thresholds: &ThresholdTable, dark: bool) -> Self {
        let rows = devices
            .iter()
            .map(|device| {
                let severity = device.severity(metric, thresholds);
                MetricRow {
                    id: device.id,
                    location: device.location.clone(),
                    value: device.readings.get(metric),
                    severity,
                    badge: summary_color(severity).alpha(),
                }
            })
            .collect();

        Self {
            tile: MetricTile::build(devices, metric, thresholds, dark),
            unit: metric.unit(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub id: String,
    pub name: String,
    pub color: Option<Color>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(id: &str, name: &str, color: Option<Color>, values: Vec<f64>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}
