//! Game constants and runtime configuration defaults

// Face domain
/// Number of distinct face values, faces run from 0 to `DEFAULT_FACE_COUNT - 1`
pub const DEFAULT_FACE_COUNT: u8 = 7;
/// Largest face domain accepted from the command line
pub const MAX_FACE_COUNT: u8 = 10;

// Console text
/// Prompt shown while asking for the tile count
pub const COUNT_PROMPT: &str = "Enter the number of dominoes to generate: ";

// Snapshot settings
/// File name prefix for persisted tile sets
pub const SNAPSHOT_PREFIX: &str = "dominoes_";
/// File extension for persisted tile sets
pub const SNAPSHOT_EXTENSION: &str = "json";
/// `chrono` format for the snapshot timestamp
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

// Logging
/// Log specification used when `RUST_LOG` is unset
pub const DEFAULT_LOG_SPEC: &str = "warn";
/// Log specification used with `--verbose`
pub const VERBOSE_LOG_SPEC: &str = "debug";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
/// Search steps between spinner message refreshes
pub const SPINNER_UPDATE_STEPS: usize = 4096;
