use std::path::PathBuf;

use clap::Parser;

/// subglyph — Interactive image-to-ASCII renderer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Jeu de caractères initial (écrase la valeur de la config).
    #[arg(long)]
    pub charset: Option<String>,

    /// Résolution initiale, en colonnes (écrase la valeur de la config).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
