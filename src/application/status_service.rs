// Status service - Builds the dashboard and charts from the current fleet
use crate::application::device_repository::DeviceRepository;
use crate::domain::dashboard::{ChartPanel, ChartSeries, MetricList, StatusDashboard};
use crate::domain::error::DomainError;
use crate::domain::palette::Color;
use crate::domain::reading::Metric;
use crate::domain::series::{average_windows, labels_for_series, scale};
use crate::domain::threshold::ThresholdTable;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::Arc;

/// Scaling factors of the synthetic comparison series drawn next to the
/// averaged ADC trace. They carry no colour of their own.
const COMPARISON_FACTORS: [(&str, &str, f64); 3] = [
    ("adc-x0.5", "ADC x0.5", 0.5),
    ("adc-x0.8", "ADC x0.8", 0.8),
    ("adc-x0.6", "ADC x0.6", 0.6),
];

#[derive(Clone)]
pub struct StatusService {
    repository: Arc<dyn DeviceRepository>,
    thresholds: ThresholdTable,
    sample_interval_secs: i64,
    adc_samples: Arc<Vec<f64>>,
}

impl StatusService {
    pub fn new(
        repository: Arc<dyn DeviceRepository>,
        thresholds: ThresholdTable,
        sample_interval_secs: i64,
        adc_samples: Vec<f64>,
    ) -> Self {
        Self {
            repository,
            thresholds,
            sample_interval_secs,
            adc_samples: Arc::new(adc_samples),
        }
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    pub async fn dashboard(&self, dark: bool) -> Result<StatusDashboard, DomainError> {
        let devices = self.repository.list().await?;
        let dashboard = StatusDashboard::build(&devices, &self.thresholds, dark);
        tracing::debug!(
            "Built dashboard for {} devices, overall {:?}",
            devices.len(),
            dashboard.overall.severity
        );
        Ok(dashboard)
    }

    pub async fn metric_list(&self, metric: Metric, dark: bool) -> Result<MetricList, DomainError> {
        let devices = self.repository.list().await?;
        Ok(MetricList::build(&devices, metric, &self.thresholds, dark))
    }

    /// Averaged ADC trace plus comparison series, labelled so that the last
    /// point falls on `now`.
    pub fn charts<Tz>(&self, now: &DateTime<Tz>) -> Result<ChartPanel, DomainError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let window = usize::try_from(self.sample_interval_secs).unwrap_or(0);
        let averaged = average_windows(&self.adc_samples, window)?;
        let labels = labels_for_series(&averaged, self.sample_interval_secs, now)?;

        let mut series = vec![ChartSeries::new("adc", "ADC", Some(Color::Green), averaged.clone())];
        for (id, name, factor) in COMPARISON_FACTORS {
            series.push(ChartSeries::new(id, name, None, scale(&averaged, factor)));
        }

        Ok(ChartPanel { labels, series })
    }
}
