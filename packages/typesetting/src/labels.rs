use crate::line_map::LineMap;
use apparatus_numerals::NumeralRegistry;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LINE_FREQUENCY: u32 = 5;

/// Options for placing line-number labels in the margin of the main text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelOptions {
    /// Label every n-th line (line 1 is always labelled)
    #[serde(default = "default_frequency")]
    pub frequency: u32,

    /// Vertical position of the main-text container's top edge
    #[serde(default)]
    pub origin_y: f64,

    /// Language of the edition, selects the numeral style
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_frequency() -> u32 {
    DEFAULT_LINE_FREQUENCY
}

fn default_lang() -> String {
    "la".to_string()
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            origin_y: 0.0,
            lang: default_lang(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineNumberLabel {
    pub line: u32,
    /// Offset from the container's top edge
    pub offset_y: f64,
    pub text: String,
}

/// Labels for line 1 and every `frequency`-th line, one per line
pub fn line_number_labels(
    line_map: &LineMap,
    options: &LabelOptions,
    numerals: &NumeralRegistry,
) -> Vec<LineNumberLabel> {
    line_map
        .line_starts()
        .filter(|entry| {
            entry.line == 1 || (options.frequency != 0 && entry.line % options.frequency == 0)
        })
        .map(|entry| LineNumberLabel {
            line: entry.line,
            offset_y: entry.position - options.origin_y,
            text: numerals.render_for_language(&options.lang, entry.line),
        })
        .collect()
}
