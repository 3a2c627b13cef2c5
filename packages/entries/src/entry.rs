use crate::sub_entry::ApparatusSubEntry;
use apparatus_common::ApparatusResult;
use serde::{Deserialize, Serialize};

/// An apparatus entry anchored to a range of main-text tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApparatusEntry {
    /// Index of the first main-text token
    pub from: usize,
    /// Index of the last main-text token
    pub to: usize,

    /// `""` or `"dash"`, `"ellipsis"`, or a custom lemma shown verbatim
    #[serde(default)]
    pub lemma: String,

    /// Plain text of the main-text tokens in the range
    #[serde(default)]
    pub lemma_text: String,

    #[serde(default)]
    pub sub_entries: Vec<ApparatusSubEntry>,
}

impl ApparatusEntry {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            lemma: String::new(),
            lemma_text: String::new(),
            sub_entries: Vec::new(),
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn with_lemma_text(mut self, lemma_text: impl Into<String>) -> Self {
        self.lemma_text = lemma_text.into();
        self
    }

    pub fn with_sub_entry(mut self, sub_entry: ApparatusSubEntry) -> Self {
        self.sub_entries.push(sub_entry);
        self
    }

    pub fn is_single_token(&self) -> bool {
        self.from == self.to
    }
}

pub fn parse_entries(json: &str) -> ApparatusResult<Vec<ApparatusEntry>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sub_entry::SubEntryType;

    #[test]
    fn test_parse_entries() {
        let json = r#"[
            { "from": 3, "to": 3, "lemmaText": "verbum" },
            { "from": 4, "to": 9, "lemma": "ellipsis", "lemmaText": "et verbum erat apud deum" }
        ]"#;

        let entries = parse_entries(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_single_token());
        assert_eq!(entries[0].lemma, "");
        assert_eq!(entries[1].lemma, "ellipsis");
        assert!(entries[0].sub_entries.is_empty());
    }

    #[test]
    fn test_parse_entry_with_sub_entries() {
        let json = r#"[{
            "from": 0,
            "to": 0,
            "lemmaText": "verbum",
            "subEntries": [
                { "type": "omission", "witnessData": [{ "witnessIndex": 1 }] },
                { "type": "variant", "text": "verbo", "witnessData": [{ "witnessIndex": 0 }] }
            ]
        }]"#;

        let entries = parse_entries(json).unwrap();
        let sub_entries = &entries[0].sub_entries;
        assert_eq!(sub_entries.len(), 2);
        assert_eq!(sub_entries[0].kind, SubEntryType::Omission);
        assert_eq!(sub_entries[1].text, "verbo");
        assert_eq!(sub_entries[1].witness_data[0].witness_index, 0);
    }

    #[test]
    fn test_builder() {
        let entry = ApparatusEntry::new(1, 2)
            .with_lemma("dash")
            .with_lemma_text("in principio");
        assert_eq!(entry.lemma, "dash");
        assert_eq!(entry.lemma_text, "in principio");
        assert!(!entry.is_single_token());
    }
}
