// Series reduction for charts: window averaging and axis labels
use crate::domain::error::SeriesError;
use chrono::{DateTime, TimeDelta, TimeZone};
use std::fmt::Display;

/// Number of labels shown under a chart.
pub const LABEL_COUNT: usize = 4;

/// Mean of each complete, non-overlapping window of `window` samples.
/// A trailing partial window is dropped.
pub fn average_windows(samples: &[f64], window: usize) -> Result<Vec<f64>, SeriesError> {
    if window == 0 {
        return Err(SeriesError::EmptyWindow);
    }

    Ok(samples
        .chunks_exact(window)
        .map(|chunk| chunk.iter().sum::<f64>() / window as f64)
        .collect())
}

pub fn scale(series: &[f64], factor: f64) -> Vec<f64> {
    series.iter().map(|value| value * factor).collect()
}

/// `HH:MM AM/PM` time of every sample, assuming the last one was taken at
/// `now` and each earlier one `seconds_per_sample` before its successor.
pub fn reading_times<Tz>(
    samples: &[f64],
    seconds_per_sample: i64,
    now: &DateTime<Tz>,
) -> Result<Vec<String>, SeriesError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if seconds_per_sample < 0 {
        return Err(SeriesError::NegativeInterval(seconds_per_sample));
    }

    let last = samples.len().saturating_sub(1);
    (0..samples.len())
        .map(|index| {
            let time = i64::try_from(last - index)
                .ok()
                .and_then(|steps| seconds_per_sample.checked_mul(steps))
                .and_then(TimeDelta::try_seconds)
                .and_then(|back| now.clone().checked_sub_signed(back))
                .ok_or(SeriesError::TimeOutOfRange)?;
            Ok(time.format("%I:%M %p").to_string())
        })
        .collect()
}

/// Keep `count` evenly spaced labels, the last one always included.
///
/// Picks the labels at 1-indexed positions `floor(k * n / count)` for
/// `k = 1..=count`. When `n` is a multiple of `count` this is every
/// `(n / count)`-th label. Fewer than `count` labels are returned unchanged.
pub fn downsample_labels(labels: Vec<String>, count: usize) -> Vec<String> {
    let n = labels.len();
    if count == 0 || n <= count {
        return labels;
    }

    (1..=count)
        .map(|k| labels[k * n / count - 1].clone())
        .collect()
}

pub fn labels_for_series<Tz>(
    samples: &[f64],
    seconds_per_sample: i64,
    now: &DateTime<Tz>,
) -> Result<Vec<String>, SeriesError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let times = reading_times(samples, seconds_per_sample, now)?;
    Ok(downsample_labels(times, LABEL_COUNT))
}
