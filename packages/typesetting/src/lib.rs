//! Typesetting information for rendered main text
//!
//! The browser measures the vertical position of every rendered main-text
//! token. From those measurements this crate groups tokens into visual lines,
//! numbers the lines, and counts how often each word occurs within its line so
//! that apparatus entries can tell identical words apart.

pub mod counter;
pub mod info;
pub mod labels;
pub mod line_map;
pub mod token;

pub use counter::StringCounter;
pub use info::{build_line_map, LineMapOptions, TypesettingInfo, DEFAULT_LINE_HEIGHT_PX};
pub use labels::{line_number_labels, LabelOptions, LineNumberLabel, DEFAULT_LINE_FREQUENCY};
pub use line_map::{unique_sorted_positions, LineMap, LineMapEntry};
pub use token::{parse_tokens, PositionedToken, TokenKind};
