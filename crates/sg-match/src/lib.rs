/// Brightness-to-character matching for subglyph.
///
/// Maintains the active character set as two lock-step ordered brightness
/// indices (raw and normalized) and resolves a target brightness to a
/// character under a selectable comparison policy.

pub mod matcher;

pub use matcher::BrightnessMatcher;
