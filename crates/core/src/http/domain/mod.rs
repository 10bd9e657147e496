pub mod http_message;
pub mod http_transport;
