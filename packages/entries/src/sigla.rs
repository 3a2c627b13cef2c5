use apparatus_numerals::{NumeralRegistry, UNSUPPORTED_MARKER};
use serde::{Deserialize, Serialize};

/// A witness attesting a reading, optionally in a later hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WitnessDataItem {
    pub witness_index: usize,

    /// 0 is the first hand
    #[serde(default)]
    pub hand: u32,

    #[serde(default)]
    pub force_hand_display: bool,
}

impl WitnessDataItem {
    pub fn new(witness_index: usize) -> Self {
        Self {
            witness_index,
            hand: 0,
            force_hand_display: false,
        }
    }

    pub fn with_hand(mut self, hand: u32) -> Self {
        self.hand = hand;
        self
    }

    pub fn forcing_hand_display(mut self) -> Self {
        self.force_hand_display = true;
        self
    }

    pub fn shows_hand(&self) -> bool {
        self.hand != 0 || self.force_hand_display
    }
}

/// A siglum standing for a set of witnesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiglaGroup {
    pub siglum: String,
    pub witnesses: Vec<usize>,
}

impl SiglaGroup {
    /// Groups need at least two witnesses
    pub fn is_valid(&self) -> bool {
        self.witnesses.len() >= 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiglumItem {
    pub siglum: String,
    /// Hand number, shown as a superscript after the siglum
    pub hand_marker: Option<String>,
}

/// Sigla for the given witnesses, with complete groups collapsed
///
/// A group applies when all of its witnesses are present in their first hand
/// and none of them forces hand display. The group siglum then takes the place
/// of the first of its members. Groups are tried in order and a witness is
/// collapsed into at most one group.
pub fn sigla_data(
    witness_data: &[WitnessDataItem],
    sigla: &[String],
    groups: &[SiglaGroup],
    numerals: &NumeralRegistry,
    lang: &str,
) -> Vec<SiglumItem> {
    let mut items: Vec<Option<SiglumItem>> = witness_data
        .iter()
        .map(|w| Some(siglum_item(w, sigla, numerals, lang)))
        .collect();
    let mut grouped = vec![false; witness_data.len()];

    for group in groups.iter().filter(|g| g.is_valid()) {
        let members: Option<Vec<usize>> = group
            .witnesses
            .iter()
            .map(|&witness| {
                witness_data.iter().enumerate().position(|(i, w)| {
                    !grouped[i] && w.witness_index == witness && !w.shows_hand()
                })
            })
            .collect();

        let Some(members) = members else { continue };
        let Some(&first) = members.iter().min() else { continue };

        for &i in &members {
            grouped[i] = true;
            items[i] = None;
        }
        items[first] = Some(SiglumItem {
            siglum: group.siglum.clone(),
            hand_marker: None,
        });
    }

    items.into_iter().flatten().collect()
}

fn siglum_item(
    witness: &WitnessDataItem,
    sigla: &[String],
    numerals: &NumeralRegistry,
    lang: &str,
) -> SiglumItem {
    let siglum = sigla
        .get(witness.witness_index)
        .cloned()
        .unwrap_or_else(|| UNSUPPORTED_MARKER.to_string());
    let hand_marker = witness.shows_hand().then(|| match witness.hand.checked_add(1) {
        Some(hand) => numerals.render_for_language(lang, hand),
        None => UNSUPPORTED_MARKER.to_string(),
    });
    SiglumItem {
        siglum,
        hand_marker,
    }
}

/// Sigla of a sub-entry both with and without group collapsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiglaLabel {
    pub matched: Vec<SiglumItem>,
    pub full: Vec<SiglumItem>,
}

impl SiglaLabel {
    /// Whether a group siglum replaced some of the witnesses
    pub fn is_abbreviated(&self) -> bool {
        self.matched != self.full
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}

pub fn sigla_label(
    witness_data: &[WitnessDataItem],
    sigla: &[String],
    groups: &[SiglaGroup],
    numerals: &NumeralRegistry,
    lang: &str,
) -> SiglaLabel {
    SiglaLabel {
        matched: sigla_data(witness_data, sigla, groups, numerals, lang),
        full: sigla_data(witness_data, sigla, &[], numerals, lang),
    }
}
