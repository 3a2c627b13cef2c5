use crate::keywords::{keyword_text, Keyword};
use crate::sigla::{sigla_label, SiglaGroup, SiglaLabel, WitnessDataItem};
use apparatus_common::ApparatusResult;
use apparatus_numerals::NumeralRegistry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubEntryType {
    Variant,
    Omission,
    Addition,
    FullCustom,
    AutoFoliation,
}

/// A reading attested by some witnesses, within an apparatus entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApparatusSubEntry {
    #[serde(rename = "type")]
    pub kind: SubEntryType,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub witness_data: Vec<WitnessDataItem>,

    /// Keyword printed before the text of a custom sub-entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Keyword>,
}

impl ApparatusSubEntry {
    pub fn new(kind: SubEntryType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            witness_data: Vec::new(),
            keyword: None,
        }
    }

    pub fn with_witness(mut self, witness: WitnessDataItem) -> Self {
        self.witness_data.push(witness);
        self
    }

    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keyword = Some(keyword);
        self
    }
}

/// Witness sigla of an edition and the groups that abbreviate them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiglaInfo {
    /// Siglum of every witness, by witness index
    #[serde(default)]
    pub sigla: Vec<String>,

    #[serde(default)]
    pub sigla_groups: Vec<SiglaGroup>,
}

impl SiglaInfo {
    pub fn from_json(json: &str) -> ApparatusResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The printable parts of a sub-entry: `[keyword] [text] sigla`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubEntryLabel {
    pub keyword: Option<String>,
    pub text: Option<String>,
    pub sigla: SiglaLabel,
    /// Sigla follow the text without a space
    pub attached_sigla: bool,
}

pub fn sub_entry_label(
    sub_entry: &ApparatusSubEntry,
    sigla_info: &SiglaInfo,
    numerals: &NumeralRegistry,
    lang: &str,
) -> SubEntryLabel {
    let text = Some(sub_entry.text.clone());
    let (keyword, text) = match sub_entry.kind {
        SubEntryType::Variant | SubEntryType::AutoFoliation => (None, text),
        SubEntryType::Omission => (Some(Keyword::Omission), None),
        SubEntryType::Addition => (Some(Keyword::Addition), text),
        SubEntryType::FullCustom => {
            let keyword = sub_entry
                .keyword
                .filter(|k| matches!(k, Keyword::Omission | Keyword::Addition));
            (keyword, text)
        }
    };

    SubEntryLabel {
        keyword: keyword.map(|k| keyword_text(k, lang).to_string()),
        text,
        sigla: sigla_label(
            &sub_entry.witness_data,
            &sigla_info.sigla,
            &sigla_info.sigla_groups,
            numerals,
            lang,
        ),
        attached_sigla: sub_entry.kind == SubEntryType::AutoFoliation,
    }
}
