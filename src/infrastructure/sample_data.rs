// Example fleet, patient and ADC trace loaded at startup
use crate::domain::device::Device;
use crate::domain::patient::{LengthUnit, MassUnit, Patient};
use crate::domain::reading::Readings;
use std::num::ParseFloatError;

const EXAMPLE_ADC: &str = include_str!("../../data/example_adc.csv");
const EXAMPLE_LOG_TARGET: &str = "content://com.android.externalstorage.documents/tree/primary%3APUPSys";

fn example_device(id: usize, name: &str, signal: &str, location: &str, readings: Readings) -> Device {
    Device {
        id,
        name: name.to_string(),
        signal: signal.to_string(),
        log_to: EXAMPLE_LOG_TARGET.to_string(),
        location: location.to_string(),
        calibration: [30.0, 40.0, 50.0],
        readings,
        paused: false,
        expanded: false,
    }
}

pub fn example_devices() -> Vec<Device> {
    vec![
        example_device(0, "HT100", "-77dBm", "Left Hip", Readings::new(350.0, 50.0, 50.0)),
        example_device(1, "HT110", "-50dBm", "Right Hip", Readings::new(300.0, 40.0, 20.0)),
        example_device(2, "HT120", "-111dBm", "Left Heel", Readings::new(300.0, 30.0, 20.0)),
        example_device(3, "HT130", "-121dBm", "Right Heel", Readings::new(300.0, 30.0, 20.0)),
    ]
}

pub fn example_patient() -> Patient {
    Patient {
        name: "Joe Dobbelaar".to_string(),
        weight: 78.0,
        weight_unit: MassUnit::Lb,
        height: 72.0,
        height_unit: LengthUnit::In,
        age: 21,
        conditions: Vec::new(),
        notes: String::new(),
    }
}

/// Raw ADC samples recorded during a sensor trial, one per second.
pub fn example_adc() -> Result<Vec<f64>, ParseFloatError> {
    parse_samples(EXAMPLE_ADC)
}

fn parse_samples(raw: &str) -> Result<Vec<f64>, ParseFloatError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
