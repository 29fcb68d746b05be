// Display palette: severity to colour and icon resolution
use crate::domain::reading::{Metric, Severity};
use serde::{Serialize, Serializer};

/// Colour tokens handed to the front end. Theme colours depend on dark mode,
/// the status palette does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    TextPrimary { dark: bool },
    TextSecondary { dark: bool },
    Green,
    Orange,
    Red,
    GreenAlpha,
    OrangeAlpha,
    RedAlpha,
}

impl Color {
    pub fn hex(&self) -> &'static str {
        match self {
            Color::TextPrimary { dark: true } => "#FCFCFC",
            Color::TextPrimary { dark: false } => "#0A1930",
            Color::TextSecondary { dark: true } => "#767676",
            Color::TextSecondary { dark: false } => "#8C8C8C",
            Color::Green => "#22C55E",
            Color::Orange => "#FF9922",
            Color::Red => "#FD3C4A",
            Color::GreenAlpha => "rgba(34, 197, 94, 0.2)",
            Color::OrangeAlpha => "rgba(255, 153, 34, 0.2)",
            Color::RedAlpha => "rgba(253, 60, 74, 0.2)",
        }
    }

    /// Low-opacity variant used for badge and row backgrounds. Theme colours
    /// have no translucent variant and are returned unchanged.
    pub fn alpha(self) -> Color {
        match self {
            Color::Green => Color::GreenAlpha,
            Color::Orange => Color::OrangeAlpha,
            Color::Red => Color::RedAlpha,
            other => other,
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// Opaque image reference understood by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetKey(&'static str);

impl AssetKey {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Text colour for a single reading. Healthy readings stay theme neutral.
pub fn resolve_color(severity: Severity, dark: bool) -> Color {
    match severity {
        Severity::Good => Color::TextPrimary { dark },
        Severity::Orange => Color::Orange,
        Severity::Red => Color::Red,
    }
}

/// Card border and summary badge colour. Unlike [`resolve_color`], a healthy
/// summary is explicitly green.
pub fn summary_color(severity: Severity) -> Color {
    match severity {
        Severity::Good => Color::Green,
        Severity::Orange => Color::Orange,
        Severity::Red => Color::Red,
    }
}

pub fn resolve_icon(metric: Metric, severity: Severity, dark: bool) -> AssetKey {
    let key = match (metric, severity, dark) {
        (Metric::Pressure, Severity::Red, _) => "pressure-red",
        (Metric::Pressure, Severity::Orange, _) => "pressure-orange",
        (Metric::Pressure, Severity::Good, true) => "pressure-dark",
        (Metric::Pressure, Severity::Good, false) => "pressure-light",
        (Metric::Temperature, Severity::Red, _) => "temperature-red",
        (Metric::Temperature, Severity::Orange, _) => "temperature-orange",
        (Metric::Temperature, Severity::Good, true) => "temperature-dark",
        (Metric::Temperature, Severity::Good, false) => "temperature-light",
        (Metric::Humidity, Severity::Red, _) => "humidity-red",
        (Metric::Humidity, Severity::Orange, _) => "humidity-orange",
        (Metric::Humidity, Severity::Good, true) => "humidity-dark",
        (Metric::Humidity, Severity::Good, false) => "humidity-light",
    };
    AssetKey(key)
}

pub fn summary_icon(severity: Severity) -> AssetKey {
    match severity {
        Severity::Red => AssetKey("act-now"),
        Severity::Orange => AssetKey("pay-attention"),
        Severity::Good => AssetKey("good-job"),
    }
}
