use super::load_typesetting;
use crate::config::Config;
use anyhow::Result;
use apparatus_numerals::NumeralRegistry;
use apparatus_typesetting::{line_number_labels, LabelOptions};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LinesArgs {
    /// JSON file with the measured main-text tokens
    pub tokens: PathBuf,

    /// Label every n-th line (overrides config)
    #[arg(short, long)]
    pub frequency: Option<u32>,

    /// Edition language (overrides config)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Vertical position of the main-text container
    #[arg(long, default_value_t = 0.0)]
    pub origin_y: f64,

    /// Nominal text line height in pixels (overrides config)
    #[arg(long)]
    pub line_height: Option<f64>,

    /// Print the labels as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn lines(args: LinesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let info = load_typesetting(&args.tokens, &config.line_map_options(args.line_height)?)?;

    let options = LabelOptions {
        frequency: args.frequency.unwrap_or(config.line_frequency),
        origin_y: args.origin_y,
        lang: args.lang.unwrap_or(config.lang),
    };
    let labels = line_number_labels(&info.line_map, &options, &NumeralRegistry::new());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("🔢 {} line-number labels", labels.len())
            .bright_blue()
            .bold()
    );
    for label in &labels {
        println!("  {:>6}  {}", label.text.bold(), format!("y = {}", label.offset_y).dimmed());
    }

    Ok(())
}
