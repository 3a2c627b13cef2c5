use crate::entry::ApparatusEntry;
use apparatus_numerals::NumeralRegistry;
use apparatus_typesetting::TypesettingInfo;
use serde::Serialize;

pub const EN_DASH: &str = "\u{2013}";
pub const ELLIPSIS: &str = "...";

/// Lemma text used for entries anchored before the main text
const EMPTY_LEMMA_TEXT: &str = "pre";

/// Lemmas with more words than this are shortened to first and last word
const MAX_FULL_LEMMA_WORDS: usize = 3;

/// How a lemma is to be printed, before occurrence markers are attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum LemmaComponents {
    Custom {
        text: String,
    },
    Full {
        text: String,
        num_words: usize,
    },
    Shortened {
        from: String,
        separator: String,
        to: String,
    },
}

pub fn lemma_components(lemma: &str, lemma_text: &str) -> LemmaComponents {
    let separator = match lemma {
        "" | "dash" => EN_DASH,
        "ellipsis" => ELLIPSIS,
        custom => {
            return LemmaComponents::Custom {
                text: custom.to_string(),
            }
        }
    };

    let lemma_text = if lemma_text.is_empty() {
        EMPTY_LEMMA_TEXT
    } else {
        lemma_text
    };
    let words: Vec<&str> = lemma_text.split(' ').collect();

    match (words.first(), words.last()) {
        (Some(first), Some(last)) if words.len() > MAX_FULL_LEMMA_WORDS => {
            LemmaComponents::Shortened {
                from: first.to_string(),
                separator: separator.to_string(),
                to: last.to_string(),
            }
        }
        _ => LemmaComponents::Full {
            text: lemma_text.to_string(),
            num_words: words.len(),
        },
    }
}

/// A lemma with occurrence markers for words repeated on their line
///
/// A marker is the occurrence number of the word within its line, meant to
/// be shown as a superscript. It is only present when the word occurs more
/// than once on that line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum LemmaLabel {
    Custom {
        text: String,
    },
    Full {
        text: String,
        occurrence: Option<String>,
    },
    Shortened {
        from: String,
        from_occurrence: Option<String>,
        separator: String,
        to: String,
        to_occurrence: Option<String>,
    },
}

impl LemmaLabel {
    /// The lemma without its markers
    pub fn plain_text(&self) -> String {
        match self {
            LemmaLabel::Custom { text } | LemmaLabel::Full { text, .. } => text.clone(),
            LemmaLabel::Shortened {
                from,
                separator,
                to,
                ..
            } => format!("{}{}{}", from, separator, to),
        }
    }
}

pub fn lemma_label(
    entry: &ApparatusEntry,
    info: &TypesettingInfo,
    numerals: &NumeralRegistry,
    lang: &str,
) -> LemmaLabel {
    match lemma_components(&entry.lemma, &entry.lemma_text) {
        LemmaComponents::Custom { text } => LemmaLabel::Custom { text },
        LemmaComponents::Full { text, num_words } => {
            let occurrence = if num_words == 1 {
                occurrence_marker(entry.from, info, numerals, lang)
            } else {
                None
            };
            LemmaLabel::Full { text, occurrence }
        }
        LemmaComponents::Shortened {
            from,
            separator,
            to,
        } => LemmaLabel::Shortened {
            from,
            from_occurrence: occurrence_marker(entry.from, info, numerals, lang),
            separator,
            to,
            to_occurrence: occurrence_marker(entry.to, info, numerals, lang),
        },
    }
}

fn occurrence_marker(
    index: usize,
    info: &TypesettingInfo,
    numerals: &NumeralRegistry,
    lang: &str,
) -> Option<String> {
    if info.total_occurrences_in_line(index) > 1 {
        Some(numerals.render_for_language(lang, info.occurrence_in_line(index)))
    } else {
        None
    }
}
