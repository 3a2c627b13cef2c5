use super::load_typesetting;
use crate::config::Config;
use anyhow::Result;
use apparatus_typesetting::{PositionedToken, TokenKind, TypesettingInfo};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MapArgs {
    /// JSON file with the measured main-text tokens
    pub tokens: PathBuf,

    /// Nominal text line height in pixels (overrides config)
    #[arg(long)]
    pub line_height: Option<f64>,

    /// Print the typesetting info as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn map(args: MapArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let options = config.line_map_options(args.line_height)?;
    let info = load_typesetting(&args.tokens, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    print_table(&info);
    Ok(())
}

fn print_table(info: &TypesettingInfo) {
    println!(
        "{}",
        format!(
            "🗺  {} tokens on {} lines",
            info.tokens.len(),
            info.line_map.line_count()
        )
        .bright_blue()
        .bold()
    );

    let mut current_line = None;
    for (index, token) in info.tokens.iter().enumerate() {
        if token.line_number != current_line {
            current_line = token.line_number;
            let heading = match current_line {
                Some(line) => format!("line {}", line),
                None => "unknown line".to_string(),
            };
            println!();
            println!("{}", heading.bold());
        }
        println!("  {:>4}  {}", index, describe(token));
    }
}

fn describe(token: &PositionedToken) -> String {
    match token.kind {
        TokenKind::ParagraphEnd => "¶".dimmed().to_string(),
        TokenKind::Text => {
            let occurrence = token.occurrence_in_line.unwrap_or(1);
            let total = token.total_occurrences_in_line.unwrap_or(1);
            if total > 1 {
                format!("{} {}", token.plain_text, format!("({}/{})", occurrence, total).yellow())
            } else {
                token.plain_text.clone()
            }
        }
    }
}
