use crate::registry::DigitRenderer;
use serde::{Deserialize, Serialize};

const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Numeral systems supported out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralStyle {
    /// 0123456789
    Western,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
}

impl NumeralStyle {
    pub const ALL: [NumeralStyle; 2] = [NumeralStyle::Western, NumeralStyle::ArabicIndic];

    /// Registry key under which this style is registered by default
    pub fn key(self) -> &'static str {
        match self {
            NumeralStyle::Western => "western",
            NumeralStyle::ArabicIndic => "arabic",
        }
    }

    /// Language codes written with this style; Western is the fallback and has none
    pub fn languages(self) -> &'static [&'static str] {
        match self {
            NumeralStyle::Western => &[],
            NumeralStyle::ArabicIndic => &["ar", "ara", "arabic"],
        }
    }

    pub fn renderer(self) -> DigitRenderer {
        match self {
            NumeralStyle::Western => to_decimal_western,
            NumeralStyle::ArabicIndic => to_decimal_arabic,
        }
    }
}

pub fn to_decimal_western(n: u32) -> String {
    n.to_string()
}

/// Render `n` with Arabic-Indic digits (U+0660..U+0669)
pub fn to_decimal_arabic(n: u32) -> String {
    n.to_string()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(ARABIC_INDIC_ZERO + d))
                .unwrap_or(c)
        })
        .collect()
}
