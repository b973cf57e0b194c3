use anyhow::Result;
use clap::Parser;

use ghostwrite::cli::Cli;
use ghostwrite::{app, logging, Config, Document};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);

    if cli.show_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init();

    let Some(path) = cli.file.as_deref() else {
        anyhow::bail!("No input file given");
    };
    let document = Document::load(path, config.display.tab_width)?;

    app::run(&config, &document)
}
