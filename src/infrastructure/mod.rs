pub mod config;
pub mod http_response;
pub mod memory_repository;
pub mod sample_data;
