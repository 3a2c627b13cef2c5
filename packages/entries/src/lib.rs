//! Formatting of critical apparatus entries against typeset main text
//!
//! An apparatus entry refers to a range of main-text tokens. Once the main text
//! has been typeset, the entry can be labelled with the line (or line range)
//! it falls on and with a lemma that disambiguates words repeated on that line.
//! Its sub-entries list the readings of the witnesses, identified by sigla.

mod entry;
mod keywords;
mod lemma;
mod line_range;
mod sigla;
mod sub_entry;

pub use entry::{parse_entries, ApparatusEntry};
pub use keywords::{keyword_text, Keyword};
pub use lemma::{lemma_components, lemma_label, LemmaComponents, LemmaLabel, ELLIPSIS, EN_DASH};
pub use line_range::{line_headings, line_number_string};
pub use sigla::{sigla_data, sigla_label, SiglaGroup, SiglaLabel, SiglumItem, WitnessDataItem};
pub use sub_entry::{sub_entry_label, ApparatusSubEntry, SiglaInfo, SubEntryLabel, SubEntryType};
