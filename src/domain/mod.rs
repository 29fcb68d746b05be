pub mod calibration;
pub mod dashboard;
pub mod device;
pub mod error;
pub mod fleet;
pub mod palette;
pub mod patient;
pub mod reading;
pub mod series;
pub mod threshold;
