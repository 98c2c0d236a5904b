/// Command-line interface and game session orchestration
pub mod cli;
/// Game constants and runtime configuration defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Logger initialisation
pub mod logging;
/// Spinner feedback for the variation search
pub mod progress;
/// Interactive tile count entry
pub mod prompt;
/// JSON snapshots of generated tile sets
pub mod snapshot;
