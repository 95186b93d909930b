use crate::checks::check_consistency;
use crate::config::Config;
use crate::loaders::Loader;
use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use tracing::Level;

mod checks;
mod config;
mod display;
mod export;
mod grade;
mod histogram;
mod loaders;
mod menu;
mod model;
mod stats;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Use FILE instead of gradebook.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Resolve relative data paths from DIR
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Write the grade of every student to FILE as CSV instead of showing the menu
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let mut config = Config::load_or_default(options.config.as_deref())?;
    if let Some(data_dir) = &options.data_dir {
        config.rebase(data_dir);
    }
    let gradebook = Loader::new(&config.data).load()?;
    check_consistency(&gradebook);
    if let Some(file_name) = &options.export {
        return export::export_grades(&gradebook, file_name);
    }
    menu::run(
        &gradebook,
        config.report.histogram_width,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )
}
