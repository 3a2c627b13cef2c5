use crate::styles::NumeralStyle;
use crate::UNSUPPORTED_MARKER;
use std::collections::BTreeMap;

/// Renders a number as a string of digits
pub type DigitRenderer = fn(u32) -> String;

/// Style used for languages without an explicit mapping
pub const DEFAULT_STYLE: &str = "western";

/// Registry of numeral renderers and of the language codes that select them
///
/// Callers build one explicitly and pass it to the formatting functions;
/// nothing is registered behind their back.
#[derive(Clone)]
pub struct NumeralRegistry {
    styles: BTreeMap<String, DigitRenderer>,
    languages: BTreeMap<String, String>,
    default_style: String,
}

impl NumeralRegistry {
    /// Create a registry with the Western and Arabic-Indic styles
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for style in NumeralStyle::ALL {
            registry.register_style(style.key(), style.renderer());
            for &lang in style.languages() {
                registry.register_language(lang, style.key());
            }
        }
        registry
    }

    /// Create a registry without any renderer
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
            languages: BTreeMap::new(),
            default_style: DEFAULT_STYLE.to_string(),
        }
    }

    pub fn register_style(&mut self, key: impl Into<String>, renderer: DigitRenderer) {
        self.styles.insert(key.into(), renderer);
    }

    pub fn register_language(&mut self, lang: impl Into<String>, style: impl Into<String>) {
        self.languages.insert(lang.into(), style.into());
    }

    pub fn set_default_style(&mut self, style: impl Into<String>) {
        self.default_style = style.into();
    }

    /// Style key a language resolves to
    pub fn style_for_language(&self, lang: &str) -> &str {
        self.languages
            .get(lang)
            .map(String::as_str)
            .unwrap_or(&self.default_style)
    }

    pub fn renderer(&self, style: &str) -> Option<DigitRenderer> {
        self.styles.get(style).copied()
    }

    /// Render `n` in the given style, or the unsupported marker
    pub fn render(&self, style: &str, n: u32) -> String {
        match self.renderer(style) {
            Some(renderer) => renderer(n),
            None => UNSUPPORTED_MARKER.to_string(),
        }
    }

    /// Render `n` in the style selected by `lang`
    pub fn render_for_language(&self, lang: &str, n: u32) -> String {
        self.render(self.style_for_language(lang), n)
    }
}

impl Default for NumeralRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NumeralRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumeralRegistry")
            .field("styles", &self.styles.keys().collect::<Vec<_>>())
            .field("languages", &self.languages)
            .field("default_style", &self.default_style)
            .finish()
    }
}
