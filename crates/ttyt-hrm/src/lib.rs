pub mod config;
pub mod error;
pub mod personnel;
pub mod telemetry;
