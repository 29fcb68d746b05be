// In-memory device repository
use crate::application::device_repository::{DeviceChange, DeviceRepository};
use crate::domain::device::{reindex, Device};
use crate::domain::error::DomainError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Holds the fleet for the lifetime of the process. Writers edit entries in
/// place under the lock; readers get cloned snapshots.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    devices: RwLock<Vec<Device>>,
}

impl InMemoryDeviceRepository {
    pub fn new(mut devices: Vec<Device>) -> Self {
        reindex(&mut devices);
        Self {
            devices: RwLock::new(devices),
        }
    }
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
    async fn list(&self) -> Result<Vec<Device>, DomainError> {
        Ok(self.devices.read().await.clone())
    }

    async fn get(&self, id: usize) -> Result<Device, DomainError> {
        self.devices
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(DomainError::DeviceNotFound(id))
    }

    async fn update(&self, id: usize, change: DeviceChange) -> Result<Device, DomainError> {
        let mut devices = self.devices.write().await;
        let device = devices.get_mut(id).ok_or(DomainError::DeviceNotFound(id))?;
        change(device);
        device.id = id;
        Ok(device.clone())
    }

    async fn remove(&self, id: usize) -> Result<Device, DomainError> {
        let mut devices = self.devices.write().await;
        if id >= devices.len() {
            return Err(DomainError::DeviceNotFound(id));
        }
        let removed = devices.remove(id);
        reindex(&mut devices);
        tracing::debug!("Removed device {} ({}), {} left", id, removed.name, devices.len());
        Ok(removed)
    }

    async fn reset(&self, mut devices: Vec<Device>) -> Result<(), DomainError> {
        reindex(&mut devices);
        *self.devices.write().await = devices;
        Ok(())
    }
}
