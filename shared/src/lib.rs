pub mod confirmation;
pub mod telemetry;
pub mod types;
