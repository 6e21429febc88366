use clap::Parser;
use log::debug;
use std::path::PathBuf;
use tokio::fs;

use cooklang_parse::{load_recipe_with_settings, parse_with_options, Result, Settings};

/// Parse a Cooklang recipe file and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "cooklang-parse", version, about)]
struct Cli {
    /// Path to the .cook file
    file: PathBuf,

    /// Settings file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip looking for sibling images
    #[arg(long)]
    no_images: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    debug!("{:#?}", settings);

    let recipe = if cli.no_images {
        let text = fs::read_to_string(&cli.file).await?;
        parse_with_options(&text, &settings.parser)
    } else {
        load_recipe_with_settings(&cli.file, &settings).await?
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&recipe)?
    } else {
        serde_json::to_string(&recipe)?
    };
    println!("{}", json);

    Ok(())
}
