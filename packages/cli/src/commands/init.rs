use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub const EXAMPLE_TOKENS_NAME: &str = "example.tokens.json";

const EXAMPLE_TOKENS: &str = r#"[
  { "kind": "text", "plainText": "In", "verticalPosition": 120 },
  { "kind": "text", "plainText": "principio", "verticalPosition": 120 },
  { "kind": "text", "plainText": "erat", "verticalPosition": 120.5 },
  { "kind": "text", "plainText": "verbum", "verticalPosition": 120 },
  { "kind": "text", "plainText": "et", "verticalPosition": 144 },
  { "kind": "text", "plainText": "verbum", "verticalPosition": 144 },
  { "kind": "text", "plainText": "erat", "verticalPosition": 144 },
  { "kind": "text", "plainText": "apud", "verticalPosition": 144 },
  { "kind": "text", "plainText": "Deum", "verticalPosition": 144.25 },
  { "kind": "text", "plainText": "et", "verticalPosition": 168 },
  { "kind": "text", "plainText": "Deus", "verticalPosition": 168 },
  { "kind": "text", "plainText": "erat", "verticalPosition": 168 },
  { "kind": "text", "plainText": "verbum", "verticalPosition": 168 },
  { "kind": "paragraph_end", "verticalPosition": 168 }
]
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Edition language (e.g. la, ar, he)
    #[arg(short, long, default_value = "la")]
    pub lang: String,

    /// Nominal text line height in pixels
    #[arg(long, default_value_t = 16.0)]
    pub line_height: f64,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing apparatus project...".bright_blue().bold());

    let config = Config {
        line_height: args.line_height,
        lang: args.lang,
        ..Config::default()
    };
    // reject a bad line height before writing it out
    config.line_map_options(None)?;

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let example_file = PathBuf::from(cwd).join(EXAMPLE_TOKENS_NAME);
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_TOKENS)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_TOKENS_NAME);
    }

    println!();
    println!("{}", "✨ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Export measured main-text tokens from the composer as JSON");
    println!("  2. Run {} to inspect lines", "apparatus map <tokens.json>".bright_white());

    Ok(())
}
