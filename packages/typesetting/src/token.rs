use apparatus_common::ApparatusResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Text,
    ParagraphEnd,
}

/// One rendered main-text unit together with its measured position
///
/// `line_number` and the occurrence fields are filled in by
/// [`build_line_map`](crate::build_line_map); any values present on input are
/// discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedToken {
    pub kind: TokenKind,

    #[serde(default)]
    pub plain_text: String,

    /// Pixels from the top of the document, absent until measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_position: Option<f64>,

    /// 1-based line; `None` means the position is unknown
    #[serde(default)]
    pub line_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrence_in_line: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_occurrences_in_line: Option<u32>,
}

impl PositionedToken {
    pub fn text(plain_text: impl Into<String>, vertical_position: f64) -> Self {
        Self {
            kind: TokenKind::Text,
            plain_text: plain_text.into(),
            vertical_position: Some(vertical_position),
            line_number: None,
            occurrence_in_line: None,
            total_occurrences_in_line: None,
        }
    }

    pub fn paragraph_end(vertical_position: Option<f64>) -> Self {
        Self {
            kind: TokenKind::ParagraphEnd,
            plain_text: String::new(),
            vertical_position,
            line_number: None,
            occurrence_in_line: None,
            total_occurrences_in_line: None,
        }
    }

    /// A text token that has not been measured yet
    pub fn unmeasured(plain_text: impl Into<String>) -> Self {
        Self {
            vertical_position: None,
            ..Self::text(plain_text, 0.0)
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }

    /// Measured position, ignoring NaN and infinities
    pub fn measured_position(&self) -> Option<f64> {
        self.vertical_position.filter(|y| y.is_finite())
    }
}

/// Parse a JSON array of tokens as produced by the browser measurement step
pub fn parse_tokens(json: &str) -> ApparatusResult<Vec<PositionedToken>> {
    Ok(serde_json::from_str(json)?)
}
