/// Command-line arguments and batch entry point
pub mod cli;
/// Policy defaults and runtime configuration
pub mod configuration;
/// Error types for filtering operations
pub mod error;
/// Folder enumeration, classification and copying
pub mod folder;
/// Image decoding into pixel grids
pub mod image;
/// Logging and progress display for folder runs
pub mod progress;
