pub mod device_repository;
pub mod fleet_service;
pub mod patient_service;
pub mod status_service;
