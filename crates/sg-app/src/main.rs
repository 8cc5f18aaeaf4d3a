use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;
pub mod repl;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 3b. Appliquer les overrides CLI
    if let Some(ref charset) = cli.charset {
        config.charset.clone_from(charset);
    }
    if let Some(resolution) = cli.resolution {
        config.resolution = resolution;
    }
    config.clamp_all();

    // 4. Charger l'image
    let image = sg_image::Raster::load(&cli.image)?;

    // 5. Construire le moteur et lancer la boucle interactive
    let engine = pipeline::Engine::new(image, &config);
    repl::Repl::new(engine, &config).run()
}

fn resolve_config(cli: &cli::Cli) -> Result<sg_core::config::SessionConfig> {
    if cli.config.exists() {
        sg_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(sg_core::config::SessionConfig::default())
    }
}
