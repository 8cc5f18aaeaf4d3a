/// Configuration, types, and shared structures for subglyph.
///
/// This crate contains all shared types and configuration logic
/// used across the subglyph workspace.

pub mod config;
pub mod error;
pub mod grid;

pub use config::{ComparisonPolicy, OutputTarget, PartitionMode, SessionConfig};
pub use error::CoreError;
pub use grid::{BrightnessGrid, CharGrid};
