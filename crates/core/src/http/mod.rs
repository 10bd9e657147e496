pub mod domain;
pub mod infrastructure;
pub mod json_client;
