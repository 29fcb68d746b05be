// Fleet service - Use cases that mutate the connected devices
use crate::application::device_repository::DeviceRepository;
use crate::domain::calibration::{CalibrationWizard, StepOutcome, WeightUnit};
use crate::domain::device::Device;
use crate::domain::error::DomainError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CalibrationProgress {
    #[serde(rename_all = "camelCase")]
    Idle { device_id: usize },
    #[serde(rename_all = "camelCase")]
    InProgress { device_id: usize, next_step: usize },
    Complete { device: Device },
}

#[derive(Clone)]
pub struct FleetService {
    repository: Arc<dyn DeviceRepository>,
    wizards: Arc<Mutex<HashMap<usize, CalibrationWizard>>>,
    initial_devices: Vec<Device>,
}

impl FleetService {
    pub fn new(repository: Arc<dyn DeviceRepository>, initial_devices: Vec<Device>) -> Self {
        Self {
            repository,
            wizards: Arc::new(Mutex::new(HashMap::new())),
            initial_devices,
        }
    }

    pub async fn list_devices(&self) -> Result<Vec<Device>, DomainError> {
        self.repository.list().await
    }

    pub async fn get_device(&self, id: usize) -> Result<Device, DomainError> {
        self.repository.get(id).await
    }

    pub async fn toggle_pause(&self, id: usize) -> Result<Device, DomainError> {
        let device = self
            .repository
            .update(id, Box::new(|device: &mut Device| device.paused = !device.paused))
            .await?;
        tracing::info!("Device {} ({}) paused: {}", id, device.name, device.paused);
        Ok(device)
    }

    pub async fn toggle_expanded(&self, id: usize) -> Result<Device, DomainError> {
        self.repository
            .update(id, Box::new(|device: &mut Device| device.expanded = !device.expanded))
            .await
    }

    pub async fn set_log_target(&self, id: usize, log_to: String) -> Result<Device, DomainError> {
        let device = self
            .repository
            .update(id, Box::new(move |device: &mut Device| device.log_to = log_to))
            .await?;
        tracing::info!("Device {} now logs to {}", id, device.log_to);
        Ok(device)
    }

    /// Remove a device. Ids shift, so any calibration in progress is dropped.
    pub async fn disconnect(&self, id: usize) -> Result<Device, DomainError> {
        let mut wizards = self.wizards.lock().await;
        let removed = self.repository.remove(id).await?;
        abandon_calibrations(&mut wizards);
        tracing::info!("Disconnected device {} ({})", id, removed.name);
        Ok(removed)
    }

    pub async fn reset(&self) -> Result<Vec<Device>, DomainError> {
        let mut wizards = self.wizards.lock().await;
        self.repository.reset(self.initial_devices.clone()).await?;
        abandon_calibrations(&mut wizards);
        tracing::info!("Reset fleet to {} example devices", self.initial_devices.len());
        self.repository.list().await
    }

    /// Submit one weight of the calibration sequence. A wizard is started by
    /// the first accepted step; after the last step the weights replace the
    /// device's calibration vector. Rejected submissions leave no trace.
    pub async fn submit_calibration_step(
        &self,
        id: usize,
        step: usize,
        weight: f64,
        unit: WeightUnit,
    ) -> Result<CalibrationProgress, DomainError> {
        // Held until the weights are written so a disconnect cannot shift ids
        // in between.
        let mut wizards = self.wizards.lock().await;
        self.repository.get(id).await?;

        let mut wizard = wizards.get(&id).cloned().unwrap_or_default();
        match wizard.submit(step, weight, unit)? {
            StepOutcome::Next { step } => {
                wizards.insert(id, wizard);
                Ok(CalibrationProgress::InProgress {
                    device_id: id,
                    next_step: step,
                })
            }
            StepOutcome::Complete(grams) => {
                wizards.remove(&id);
                let device = self
                    .repository
                    .update(id, Box::new(move |device: &mut Device| device.calibration = grams))
                    .await?;
                tracing::info!("Calibrated device {} ({}): {:?} g", id, device.name, grams);
                Ok(CalibrationProgress::Complete { device })
            }
        }
    }

    pub async fn calibration_progress(&self, id: usize) -> Result<CalibrationProgress, DomainError> {
        self.repository.get(id).await?;
        let progress = match self.wizards.lock().await.get(&id) {
            Some(wizard) => CalibrationProgress::InProgress {
                device_id: id,
                next_step: wizard.step(),
            },
            None => CalibrationProgress::Idle { device_id: id },
        };
        Ok(progress)
    }

    pub async fn cancel_calibration(&self, id: usize) -> bool {
        let cancelled = self.wizards.lock().await.remove(&id).is_some();
        if cancelled {
            tracing::info!("Cancelled calibration of device {}", id);
        }
        cancelled
    }
}

fn abandon_calibrations(wizards: &mut HashMap<usize, CalibrationWizard>) {
    if !wizards.is_empty() {
        tracing::warn!("Abandoning {} calibration(s) in progress", wizards.len());
        wizards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calibration::GRAMS_PER_OUNCE;
    use crate::infrastructure::memory_repository::InMemoryDeviceRepository;
    use crate::infrastructure::sample_data::example_devices;

    fn service() -> FleetService {
        let repository = Arc::new(InMemoryDeviceRepository::new(example_devices()));
        FleetService::new(repository, example_devices())
    }

    #[tokio::test]
    async fn test_toggle_pause() {
        let fleet = service();
        assert!(fleet.toggle_pause(0).await.unwrap().paused);
        assert!(fleet.get_device(0).await.unwrap().paused);
        assert!(!fleet.toggle_pause(0).await.unwrap().paused);
        assert_eq!(fleet.toggle_pause(9).await, Err(DomainError::DeviceNotFound(9)));
    }

    #[tokio::test]
    async fn test_toggle_expanded_and_log_target() {
        let fleet = service();
        assert!(fleet.toggle_expanded(2).await.unwrap().expanded);
        let device = fleet.set_log_target(2, "file:///logs".to_string()).await.unwrap();
        assert_eq!(device.log_to, "file:///logs");
        assert!(device.expanded);
    }

    #[tokio::test]
    async fn test_calibration_sequence() {
        let fleet = service();
        assert_eq!(
            fleet.submit_calibration_step(1, 1, 100.0, WeightUnit::G).await,
            Ok(CalibrationProgress::InProgress { device_id: 1, next_step: 2 })
        );
        assert_eq!(
            fleet.calibration_progress(1).await,
            Ok(CalibrationProgress::InProgress { device_id: 1, next_step: 2 })
        );
        fleet.submit_calibration_step(1, 2, 1.0, WeightUnit::Oz).await.unwrap();
        let progress = fleet.submit_calibration_step(1, 3, 300.0, WeightUnit::G).await.unwrap();

        let CalibrationProgress::Complete { device } = progress else {
            panic!("expected completed calibration");
        };
        assert_eq!(device.calibration, [100.0, GRAMS_PER_OUNCE, 300.0]);
        assert_eq!(fleet.get_device(1).await.unwrap().calibration, device.calibration);
        assert!(!fleet.cancel_calibration(1).await);
        assert_eq!(
            fleet.calibration_progress(1).await,
            Ok(CalibrationProgress::Idle { device_id: 1 })
        );
    }

    #[tokio::test]
    async fn test_rejected_step_leaves_device_idle() {
        let fleet = service();
        assert!(matches!(
            fleet.submit_calibration_step(0, 2, 100.0, WeightUnit::G).await,
            Err(DomainError::Calibration(_))
        ));
        assert_eq!(
            fleet.calibration_progress(0).await,
            Ok(CalibrationProgress::Idle { device_id: 0 })
        );

        assert!(fleet.submit_calibration_step(0, 1, -5.0, WeightUnit::G).await.is_err());
        assert!(!fleet.cancel_calibration(0).await);

        fleet.submit_calibration_step(0, 1, 100.0, WeightUnit::G).await.unwrap();
        assert!(fleet.submit_calibration_step(0, 3, 100.0, WeightUnit::G).await.is_err());
        assert_eq!(
            fleet.calibration_progress(0).await,
            Ok(CalibrationProgress::InProgress { device_id: 0, next_step: 2 })
        );
    }

    #[tokio::test]
    async fn test_calibration_racing_removal_keeps_fleet_intact() {
        let fleet = service();
        fleet.submit_calibration_step(1, 1, 100.0, WeightUnit::G).await.unwrap();
        fleet.submit_calibration_step(1, 2, 200.0, WeightUnit::G).await.unwrap();

        let guard = fleet.wizards.lock().await;
        let task = tokio::spawn({
            let fleet = fleet.clone();
            async move { fleet.submit_calibration_step(1, 3, 300.0, WeightUnit::G).await }
        });
        tokio::task::yield_now().await;
        fleet.repository.remove(0).await.unwrap();
        drop(guard);
        task.await.unwrap().unwrap();

        let names: Vec<_> = fleet
            .list_devices()
            .await
            .unwrap()
            .into_iter()
            .map(|device| device.name)
            .collect();
        assert_eq!(names, ["HT110", "HT120", "HT130"]);
    }

    #[tokio::test]
    async fn test_disconnect_waits_for_pending_calibration() {
        let fleet = service();
        fleet.submit_calibration_step(1, 1, 100.0, WeightUnit::G).await.unwrap();
        fleet.submit_calibration_step(1, 2, 200.0, WeightUnit::G).await.unwrap();

        let guard = fleet.wizards.lock().await;
        let submit = tokio::spawn({
            let fleet = fleet.clone();
            async move { fleet.submit_calibration_step(1, 3, 300.0, WeightUnit::G).await }
        });
        tokio::task::yield_now().await;
        let disconnect = tokio::spawn({
            let fleet = fleet.clone();
            async move { fleet.disconnect(0).await }
        });
        tokio::task::yield_now().await;
        drop(guard);

        assert!(matches!(
            submit.await.unwrap(),
            Ok(CalibrationProgress::Complete { .. })
        ));
        assert_eq!(disconnect.await.unwrap().unwrap().name, "HT100");

        let devices = fleet.list_devices().await.unwrap();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].name, "HT110");
        assert_eq!(devices[0].calibration, [100.0, 200.0, 300.0]);
        assert_eq!(devices[1].calibration, [30.0, 40.0, 50.0]);
    }

    #[tokio::test]
    async fn test_cancel_calibration_restarts_sequence() {
        let fleet = service();
        fleet.submit_calibration_step(0, 1, 100.0, WeightUnit::G).await.unwrap();
        assert!(fleet.cancel_calibration(0).await);
        assert!(matches!(
            fleet.submit_calibration_step(0, 2, 100.0, WeightUnit::G).await,
            Err(DomainError::Calibration(_))
        ));
        assert_eq!(fleet.get_device(0).await.unwrap().calibration, [30.0, 40.0, 50.0]);
    }

    #[tokio::test]
    async fn test_disconnect_and_reset() {
        let fleet = service();
        fleet.submit_calibration_step(3, 1, 100.0, WeightUnit::G).await.unwrap();
        let removed = fleet.disconnect(0).await.unwrap();
        assert_eq!(removed.name, "HT100");

        let devices = fleet.list_devices().await.unwrap();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].id, 0);
        assert_eq!(devices[0].name, "HT110");
        assert!(!fleet.cancel_calibration(3).await);

        let devices = fleet.reset().await.unwrap();
        assert_eq!(devices, example_devices());
    }

    #[tokio::test]
    async fn test_disconnect_everything() {
        let fleet = service();
        for _ in 0..4 {
            fleet.disconnect(0).await.unwrap();
        }
        assert!(fleet.list_devices().await.unwrap().is_empty());
        assert_eq!(fleet.disconnect(0).await, Err(DomainError::DeviceNotFound(0)));
    }
}
