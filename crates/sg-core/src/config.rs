use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Rule selecting among the floor/ceiling entries of the normalized
/// brightness index during matching.
///
/// # Example
/// ```
/// use sg_core::config::ComparisonPolicy;
/// let policy = ComparisonPolicy::default();
/// assert!(matches!(policy, ComparisonPolicy::ClosestAbsolute));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ComparisonPolicy {
    /// Smallest key ≥ target; falls back to the floor entry.
    ClosestHigher,
    /// Largest key ≤ target; falls back to the ceiling entry.
    ClosestLower,
    /// Whichever of floor/ceiling is nearer; ties favor the floor entry.
    #[default]
    ClosestAbsolute,
}

/// Row sizing rule used when partitioning the padded image.
///
/// The historical engine derived the row cell size from the column cell
/// size, so grids are generally non-square. That behavior stays the default
/// for output-shape compatibility; `Symmetric` partitions rows by the
/// resolution as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PartitionMode {
    /// Cell height = cell width (legacy width-coupled sizing).
    #[default]
    WidthCoupled,
    /// Cell height = padded height / resolution.
    Symmetric,
}

/// Destination of the rendered character grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum OutputTarget {
    /// Write to stdout.
    #[default]
    Console,
    /// Write an HTML page.
    Html,
}

/// Configuration d'une session de rendu. Sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use sg_core::config::SessionConfig;
/// let config = SessionConfig::default();
/// assert_eq!(config.resolution, 2);
/// assert_eq!(config.charset, "0123456789");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Initial active character set, one code point per character.
    pub charset: String,
    /// Partition resolution (number of sub-image columns).
    pub resolution: u32,
    /// Comparison policy used by the matcher.
    pub policy: ComparisonPolicy,
    /// Row sizing rule for the sub-image grid.
    pub partition: PartitionMode,
    /// Where rendered grids are written.
    pub output: OutputTarget,
    /// Path of the HTML output file when `output` is `Html`.
    pub html_path: String,
    /// Maximum number of brightness grids kept in the session cache.
    pub cache_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            charset: "0123456789".to_string(),
            resolution: 2,
            policy: ComparisonPolicy::ClosestAbsolute,
            partition: PartitionMode::WidthCoupled,
            output: OutputTarget::Console,
            html_path: "out.html".to_string(),
            cache_capacity: 64,
        }
    }
}

impl SessionConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.resolution = self.resolution.max(1);
        self.cache_capacity = self.cache_capacity.max(1);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    session: SessionSection,
}

/// Session section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct SessionSection {
    charset: Option<String>,
    resolution: Option<u32>,
    policy: Option<ComparisonPolicy>,
    partition: Option<PartitionMode>,
    output: Option<OutputTarget>,
    html_path: Option<String>,
    cache_capacity: Option<usize>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use sg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = SessionConfig::default();

    let s = file.session;
    if let Some(v) = s.charset {
        config.charset = v;
    }
    if let Some(v) = s.resolution {
        config.resolution = v;
    }
    if let Some(v) = s.policy {
        config.policy = v;
    }
    if let Some(v) = s.partition {
        config.partition = v;
    }
    if let Some(v) = s.output {
        config.output = v;
    }
    if let Some(v) = s.html_path {
        config.html_path = v;
    }
    if let Some(v) = s.cache_capacity {
        config.cache_capacity = v;
    }

    config.clamp_all();
    log::debug!("config loaded from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_session() {
        let config = SessionConfig::default();
        assert_eq!(config.charset, "0123456789");
        assert_eq!(config.resolution, 2);
        assert_eq!(config.policy, ComparisonPolicy::ClosestAbsolute);
        assert_eq!(config.partition, PartitionMode::WidthCoupled);
        assert_eq!(config.output, OutputTarget::Console);
    }

    #[test]
    fn clamp_rejects_zero_resolution() {
        let mut config = SessionConfig {
            resolution: 0,
            cache_capacity: 0,
            ..SessionConfig::default()
        };
        config.clamp_all();
        assert_eq!(config.resolution, 1);
        assert_eq!(config.cache_capacity, 1);
    }

    #[test]
    fn partial_toml_merges_over_defaults() {
        let toml_src = r#"
            [session]
            charset = " .:#@"
            resolution = 8
        "#;
        let file: ConfigFile = toml::from_str(toml_src).expect("parse");
        let mut config = SessionConfig::default();
        if let Some(v) = file.session.charset {
            config.charset = v;
        }
        if let Some(v) = file.session.resolution {
            config.resolution = v;
        }
        assert_eq!(config.charset, " .:#@");
        assert_eq!(config.resolution, 8);
        assert_eq!(config.policy, ComparisonPolicy::ClosestAbsolute);
    }
}
