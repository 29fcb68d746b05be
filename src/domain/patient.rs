// Patient record kept alongside the fleet
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

pub const MEDICAL_CONDITIONS: [&str; 5] = ["Diabetes", "Option 2", "Option 3", "...", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Kg,
    Lb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    In,
    Cm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub name: String,
    pub weight: f64,
    pub weight_unit: MassUnit,
    pub height: f64,
    pub height_unit: LengthUnit,
    pub age: u32,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Patient {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(DomainError::InvalidPatient(format!("weight {} is not valid", self.weight)));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(DomainError::InvalidPatient(format!("height {} is not valid", self.height)));
        }
        if let Some(unknown) = self
            .conditions
            .iter()
            .find(|c| !MEDICAL_CONDITIONS.contains(&c.as_str()))
        {
            return Err(DomainError::UnknownCondition(unknown.clone()));
        }
        Ok(())
    }

    /// Select or deselect a condition. Returns whether it is now selected.
    pub fn toggle_condition(&mut self, condition: &str) -> Result<bool, DomainError> {
        if !MEDICAL_CONDITIONS.contains(&condition) {
            return Err(DomainError::UnknownCondition(condition.to_string()));
        }

        if let Some(position) = self.conditions.iter().position(|c| c == condition) {
            self.conditions.remove(position);
            Ok(false)
        } else {
            self.conditions.push(condition.to_string());
            Ok(true)
        }
    }
}
