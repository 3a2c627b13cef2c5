use crate::counter::StringCounter;
use crate::line_map::{unique_sorted_positions, LineMap};
use crate::token::PositionedToken;
use apparatus_common::{ApparatusError, ApparatusResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Nominal text line height in pixels
pub const DEFAULT_LINE_HEIGHT_PX: f64 = 16.0;

/// Options for [`build_line_map`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMapOptions {
    line_height: f64,
}

impl LineMapOptions {
    /// Options with the given nominal line height, which must be a positive number
    pub fn new(line_height: f64) -> ApparatusResult<Self> {
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(ApparatusError::invalid_line_height(line_height));
        }
        Ok(Self { line_height })
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }
}

impl Default for LineMapOptions {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT_PX,
        }
    }
}

/// Line and occurrence information for a measured main text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypesettingInfo {
    /// Distinct measured positions, ascending
    pub y_positions: Vec<f64>,
    /// Input tokens, in input order, annotated with line and occurrence data
    pub tokens: Vec<PositionedToken>,
    pub line_map: LineMap,
}

impl TypesettingInfo {
    pub fn from_json(json: &str) -> ApparatusResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn token(&self, index: usize) -> Option<&PositionedToken> {
        self.tokens.get(index)
    }

    /// Line of the token at `index`; `None` when the index or its position is unknown
    pub fn line_number(&self, index: usize) -> Option<u32> {
        self.token(index).and_then(|token| token.line_number)
    }

    /// Occurrence of the token's text so far on its line, 1 when unknown
    pub fn occurrence_in_line(&self, index: usize) -> u32 {
        self.token(index)
            .and_then(|token| token.occurrence_in_line)
            .unwrap_or(1)
    }

    /// Total occurrences of the token's text on its line, 1 when unknown
    pub fn total_occurrences_in_line(&self, index: usize) -> u32 {
        self.token(index)
            .and_then(|token| token.total_occurrences_in_line)
            .unwrap_or(1)
    }
}

/// Group measured tokens into lines and count per-line word occurrences
///
/// Tokens keep their input order. A token whose position is missing or not in
/// the line map gets no line number; such tokens are still grouped together
/// for occurrence counting like any other run of tokens sharing a line.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn build_line_map(tokens: &[PositionedToken], options: &LineMapOptions) -> TypesettingInfo {
    let y_positions =
        unique_sorted_positions(tokens.iter().filter_map(PositionedToken::measured_position));
    let line_map = LineMap::from_sorted_positions(&y_positions, options.line_height());

    let mut annotated: Vec<PositionedToken> = Vec::with_capacity(tokens.len());
    let mut counter = StringCounter::new();
    let mut line_start = 0;
    let mut current_line: Option<u32> = None;

    for token in tokens {
        let mut token = token.clone();
        token.line_number = token
            .measured_position()
            .and_then(|y| line_map.line_for_position(y));
        token.occurrence_in_line = None;
        token.total_occurrences_in_line = None;

        if token.line_number != current_line {
            stamp_totals(&mut annotated[line_start..], &counter);
            counter.reset();
            line_start = annotated.len();
            current_line = token.line_number;
        }

        if token.is_text() {
            let count = counter.add(&token.plain_text);
            token.occurrence_in_line = Some(count);
        }
        annotated.push(token);
    }
    stamp_totals(&mut annotated[line_start..], &counter);

    debug!(
        positions = y_positions.len(),
        lines = line_map.line_count(),
        "Built line map"
    );

    TypesettingInfo {
        y_positions,
        tokens: annotated,
        line_map,
    }
}

fn stamp_totals(line_tokens: &mut [PositionedToken], counter: &StringCounter) {
    for token in line_tokens.iter_mut().filter(|token| token.is_text()) {
        token.total_occurrences_in_line = Some(counter.count(&token.plain_text));
    }
}
