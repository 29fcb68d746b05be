// Three-step sensor calibration wizard
use crate::domain::device::CALIBRATION_STEPS;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

pub const GRAMS_PER_OUNCE: f64 = 28.3495;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    G,
    Oz,
}

impl WeightUnit {
    pub fn to_grams(self, weight: f64) -> f64 {
        match self {
            WeightUnit::G => weight,
            WeightUnit::Oz => weight * GRAMS_PER_OUNCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// More weights are needed; `step` is the next one to submit.
    Next { step: usize },
    /// All steps were collected. Weights are in grams.
    Complete([f64; CALIBRATION_STEPS]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationWizard {
    step: usize,
    weights: [Option<f64>; CALIBRATION_STEPS],
}

impl Default for CalibrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationWizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            weights: [None; CALIBRATION_STEPS],
        }
    }

    /// 1-indexed step expected next.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn submit(&mut self, step: usize, weight: f64, unit: WeightUnit) -> Result<StepOutcome, DomainError> {
        if step != self.step {
            return Err(DomainError::Calibration(format!(
                "expected step {}, got step {step}",
                self.step
            )));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(DomainError::Calibration(format!(
                "weight must be a positive number, got {weight}"
            )));
        }

        self.weights[step - 1] = Some(unit.to_grams(weight));

        if step < CALIBRATION_STEPS {
            self.step += 1;
            return Ok(StepOutcome::Next { step: self.step });
        }

        let mut grams = [0.0; CALIBRATION_STEPS];
        for (slot, weight) in grams.iter_mut().zip(self.weights) {
            *slot = weight.ok_or_else(|| DomainError::Calibration("missing calibration step".to_string()))?;
        }
        Ok(StepOutcome::Complete(grams))
    }
}
