use super::load_typesetting;
use crate::config::Config;
use anyhow::{Context, Result};
use apparatus_entries::{
    lemma_label, line_headings, parse_entries, sub_entry_label, LemmaLabel, SiglaInfo, SiglumItem,
    SubEntryLabel,
};
use apparatus_numerals::NumeralRegistry;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Separates the entries of one line
const ENTRY_SEPARATOR: &str = "|";
/// Separates the lines of an apparatus
const LINE_SEPARATOR: &str = "\u{2016}";

#[derive(Debug, Args)]
pub struct EntriesArgs {
    /// JSON file with the measured main-text tokens
    pub tokens: PathBuf,

    /// JSON file with the apparatus entries
    pub entries: PathBuf,

    /// JSON file with the witness sigla and sigla groups
    #[arg(short, long)]
    pub sigla: Option<PathBuf>,

    /// Edition language (overrides config)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Nominal text line height in pixels (overrides config)
    #[arg(long)]
    pub line_height: Option<f64>,

    /// Print the formatted entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedEntry {
    line_heading: Option<String>,
    lemma: LemmaLabel,
    sub_entries: Vec<SubEntryLabel>,
}

pub fn entries(args: EntriesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let info = load_typesetting(&args.tokens, &config.line_map_options(args.line_height)?)?;
    let lang = args.lang.unwrap_or(config.lang);

    let content = fs::read_to_string(&args.entries)
        .with_context(|| format!("Failed to read {}", args.entries.display()))?;
    let entries = parse_entries(&content)
        .with_context(|| format!("Invalid entries file {}", args.entries.display()))?;

    let sigla_info = match &args.sigla {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            SiglaInfo::from_json(&content)
                .with_context(|| format!("Invalid sigla file {}", path.display()))?
        }
        None => SiglaInfo::default(),
    };

    let numerals = NumeralRegistry::new();
    let formatted: Vec<FormattedEntry> = line_headings(&entries, &info, &numerals, &lang)
        .into_iter()
        .zip(&entries)
        .map(|(line_heading, entry)| FormattedEntry {
            line_heading,
            lemma: lemma_label(entry, &info, &numerals, &lang),
            sub_entries: entry
                .sub_entries
                .iter()
                .map(|sub_entry| sub_entry_label(sub_entry, &sigla_info, &numerals, &lang))
                .collect(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&formatted)?);
        return Ok(());
    }

    if formatted.is_empty() {
        println!("{}", "... empty ...".italic());
        return Ok(());
    }

    let mut out = String::new();
    for (i, entry) in formatted.iter().enumerate() {
        match &entry.line_heading {
            Some(line) => {
                if i != 0 {
                    out.push_str(&format!(" {} ", LINE_SEPARATOR));
                }
                out.push_str(&line.bold().to_string());
            }
            None => out.push_str(&format!(" {}", ENTRY_SEPARATOR)),
        }
        out.push_str(&format!(" {}]", render_lemma(&entry.lemma)));
        for sub_entry in &entry.sub_entries {
            out.push(' ');
            out.push_str(&render_sub_entry(sub_entry));
        }
    }
    println!("{}", out);

    Ok(())
}

/// Lemma as plain text, occurrence markers written as `^n`
fn render_lemma(label: &LemmaLabel) -> String {
    fn marked(text: &str, marker: &Option<String>) -> String {
        match marker {
            Some(marker) => format!("{}^{}", text, marker),
            None => text.to_string(),
        }
    }

    match label {
        LemmaLabel::Custom { text } => text.clone(),
        LemmaLabel::Full { text, occurrence } => marked(text, occurrence),
        LemmaLabel::Shortened {
            from,
            from_occurrence,
            separator,
            to,
            to_occurrence,
        } => format!(
            "{}{}{}",
            marked(from, from_occurrence),
            separator,
            marked(to, to_occurrence)
        ),
    }
}

/// Sub-entry as plain text; abbreviated sigla are followed by `( = full sigla)`
fn render_sub_entry(label: &SubEntryLabel) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(keyword) = &label.keyword {
        parts.push(keyword.italic().to_string());
    }
    if let Some(text) = &label.text {
        parts.push(text.clone());
    }

    let mut sigla = render_sigla(&label.sigla.matched);
    if label.sigla.is_abbreviated() {
        sigla = format!("{}  ( = {})", sigla, render_sigla(&label.sigla.full));
    }
    let sigla = sigla.bold().to_string();

    let mut out = parts.join(" ");
    if label.sigla.is_empty() {
        return out;
    }
    if !label.attached_sigla && !out.is_empty() {
        out.push(' ');
    }
    out.push_str(&sigla);
    out
}

fn render_sigla(items: &[SiglumItem]) -> String {
    items
        .iter()
        .map(|item| match &item.hand_marker {
            Some(hand) => format!("{}^{}", item.siglum, hand),
            None => item.siglum.clone(),
        })
        .collect()
}
