// Patient service - Read and edit the single patient record
use crate::domain::error::DomainError;
use crate::domain::patient::Patient;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct PatientService {
    patient: Arc<RwLock<Patient>>,
}

impl PatientService {
    pub fn new(patient: Patient) -> Self {
        Self {
            patient: Arc::new(RwLock::new(patient)),
        }
    }

    pub async fn get_patient(&self) -> Patient {
        self.patient.read().await.clone()
    }

    pub async fn update_patient(&self, patient: Patient) -> Result<Patient, DomainError> {
        patient.validate()?;
        *self.patient.write().await = patient.clone();
        tracing::info!("Updated patient record for {}", patient.name);
        Ok(patient)
    }

    pub async fn toggle_condition(&self, condition: &str) -> Result<Patient, DomainError> {
        let mut patient = self.patient.write().await;
        let selected = patient.toggle_condition(condition)?;
        tracing::debug!("Condition {} selected: {}", condition, selected);
        Ok(patient.clone())
    }
}
