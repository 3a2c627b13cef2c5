use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A unique vertical position and the line it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMapEntry {
    #[serde(rename = "pY")]
    pub position: f64,
    pub line: u32,
}

/// Lookup table from measured vertical position to line number
///
/// Entries are sorted by ascending position and positions are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineMap {
    entries: Vec<LineMapEntry>,
}

impl LineMap {
    /// Cluster sorted, de-duplicated positions into lines
    ///
    /// A position opens a new line when it lies more than half a line height
    /// below the position that opened the current line. The reference stays
    /// pinned to that first position; later members do not move it.
    pub fn from_sorted_positions(positions: &[f64], line_height: f64) -> Self {
        let half_line = line_height / 2.0;
        let mut reference: Option<f64> = None;
        let mut line = 0;

        let entries = positions
            .iter()
            .map(|&position| {
                let opens_line = match reference {
                    Some(reference) => position > reference + half_line,
                    None => true,
                };
                if opens_line {
                    reference = Some(position);
                    line += 1;
                }
                LineMapEntry { position, line }
            })
            .collect();

        Self { entries }
    }

    /// Line for an exactly matching position
    pub fn line_for_position(&self, y: f64) -> Option<u32> {
        if !y.is_finite() {
            return None;
        }
        self.entries
            .binary_search_by(|entry| entry.position.partial_cmp(&y).unwrap_or(Ordering::Less))
            .ok()
            .map(|i| self.entries[i].line)
    }

    pub fn entries(&self) -> &[LineMapEntry] {
        &self.entries
    }

    /// Number of lines in the map
    pub fn line_count(&self) -> u32 {
        self.entries.last().map(|entry| entry.line).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First (topmost) entry of every line, in line order
    pub fn line_starts(&self) -> impl Iterator<Item = &LineMapEntry> {
        let mut previous = 0;
        self.entries.iter().filter(move |entry| {
            let first = entry.line != previous;
            previous = entry.line;
            first
        })
    }
}

/// Distinct finite positions in ascending order
pub fn unique_sorted_positions(positions: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut unique: Vec<f64> = positions.into_iter().filter(|y| y.is_finite()).collect();
    unique.sort_by(f64::total_cmp);
    unique.dedup();
    unique
}
