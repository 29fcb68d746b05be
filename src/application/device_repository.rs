// Repository trait for the connected device fleet
use crate::domain::device::Device;
use crate::domain::error::DomainError;
use async_trait::async_trait;

pub type DeviceChange = Box<dyn FnOnce(&mut Device) + Send>;

#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Snapshot of every connected device, ordered by id
    async fn list(&self) -> Result<Vec<Device>, DomainError>;

    async fn get(&self, id: usize) -> Result<Device, DomainError>;

    /// Apply `change` to the device with this id under a single write and
    /// return the updated copy
    async fn update(&self, id: usize, change: DeviceChange) -> Result<Device, DomainError>;

    /// Remove a device and re-index the ones after it
    async fn remove(&self, id: usize) -> Result<Device, DomainError>;

    /// Swap the whole fleet for a new one
    async fn reset(&self, devices: Vec<Device>) -> Result<(), DomainError>;
}
