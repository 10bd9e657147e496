pub mod azure_config;
pub mod constants;
pub mod export_error;
pub mod languages;
pub mod service_error;
