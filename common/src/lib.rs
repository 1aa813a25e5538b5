pub mod aws_clients;
pub mod config;
pub mod deserializers;
pub mod logging;
pub mod test_tools;
