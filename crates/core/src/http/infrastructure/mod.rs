pub mod reqwest_transport;
