/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod cargo;
pub mod console;
pub mod environment;
pub mod filesystem;
pub mod formatters;
pub mod github;
