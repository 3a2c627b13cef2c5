use serde::{Deserialize, Serialize};

/// Fixed words printed in apparatus sub-entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyword {
    Omission,
    Addition,
    Ante,
    Post,
}

impl Keyword {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "omission" => Some(Keyword::Omission),
            "addition" => Some(Keyword::Addition),
            "ante" => Some(Keyword::Ante),
            "post" => Some(Keyword::Post),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Keyword::Omission => "omission",
            Keyword::Addition => "addition",
            Keyword::Ante => "ante",
            Keyword::Post => "post",
        }
    }
}

/// Keyword in the apparatus language
///
/// Latin, Arabic and Hebrew have their own words; any other language gets
/// the keyword's name.
pub fn keyword_text(keyword: Keyword, lang: &str) -> &'static str {
    match (lang, keyword) {
        ("la", Keyword::Omission) => "om.",
        ("la", Keyword::Addition) => "add.",
        ("la", Keyword::Ante) => "ante",
        ("la", Keyword::Post) => "post",
        ("ar", Keyword::Omission) => "نقص",
        ("ar", Keyword::Addition) => "ز",
        ("ar", Keyword::Ante) => "قبل",
        ("ar", Keyword::Post) => "بعد",
        ("he", Keyword::Omission) => "חסר",
        ("he", Keyword::Addition) => "נוסף",
        ("he", Keyword::Ante) => "לפני",
        ("he", Keyword::Post) => "אחרי",
        (_, keyword) => keyword.name(),
    }
}
