//! Input/output: decoding, export, the batch CLI and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Domain constants and defaults
pub mod configuration;
/// Image decoding and target discovery
pub mod decode;
/// Error types and constructors
pub mod error;
/// CSV export of measurement records
pub mod export;
/// Batch progress display
pub mod progress;
