//! Blade
//!
//! Blend, lighten or darken a hex RGB colour by a percentage and print the
//! resulting colour.

mod app;
mod blade;
mod error;
mod utils;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use app::Operation;

/// Blade - blend, lighten and darken hex colours
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Colour to modify (RRGGBB, optionally prefixed with '#')
    pub colour: String,

    /// Percentage to blend/shade by (0.0 to 1.0)
    #[arg(value_parser = parse_percent, allow_negative_numbers = true)]
    pub percent: f64,

    /// Colour to blend colour with
    #[arg(short, long, value_name = "COLOUR")]
    pub blend: Option<String>,

    /// Darken colour
    #[arg(short, long)]
    pub darken: bool,

    /// Lighten colour
    #[arg(short, long)]
    pub lighten: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let percent: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !percent.is_finite() {
        return Err(format!("percent must be a finite number, got {}", s));
    }
    Ok(percent)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the result line
    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Arguments: {:?}", args);

    let Some(operation) = Operation::from_args(&args) else {
        Args::command().print_help()?;
        return Ok(());
    };

    println!("{}", operation.run(&args.colour, args.percent)?);

    Ok(())
}
