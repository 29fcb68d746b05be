// Reading domain model: metrics, severities and per-device values
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Pressure,
    Temperature,
    Humidity,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Pressure, Metric::Temperature, Metric::Humidity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Pressure => "pressure",
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
        }
    }

    /// Display unit appended to a reading value.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pressure => "mmHg",
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pressure" => Ok(Metric::Pressure),
            "temperature" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            other => Err(DomainError::UnknownMetric(other.to_string())),
        }
    }
}

/// Urgency of a reading. Variant order is the severity order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Good,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub pressure: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl Readings {
    pub fn new(pressure: f64, temperature: f64, humidity: f64) -> Self {
        Self {
            pressure,
            temperature,
            humidity,
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Pressure => self.pressure,
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
        }
    }
}
