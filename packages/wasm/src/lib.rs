use apparatus_entries::{
    lemma_label, line_number_string, sub_entry_label, ApparatusEntry, ApparatusSubEntry, SiglaInfo,
};
use apparatus_numerals::{NumeralRegistry, UNSUPPORTED_MARKER};
use apparatus_typesetting::{
    build_line_map, line_number_labels, parse_tokens, LabelOptions, LineMapOptions,
    TypesettingInfo,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_info(info_json: &str) -> Result<TypesettingInfo, JsValue> {
    TypesettingInfo::from_json(info_json)
        .map_err(|e| JsValue::from_str(&format!("Typesetting info error: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Compute line numbers and per-line occurrences for measured main-text tokens
///
/// Takes the tokens as a JSON array and returns the typesetting info as JSON
/// (`{ yPositions, tokens, lineMap }`).
#[wasm_bindgen(js_name = buildLineMap)]
pub fn build_line_map_js(tokens_json: &str, line_height: f64) -> Result<String, JsValue> {
    let tokens = parse_tokens(tokens_json)
        .map_err(|e| JsValue::from_str(&format!("Token error: {}", e)))?;
    let options = LineMapOptions::new(line_height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&build_line_map(&tokens, &options))
}

/// Render a number in the numeral style of a language
///
/// Negative, fractional and out-of-range numbers render as `???`.
#[wasm_bindgen(js_name = getNumberString)]
pub fn get_number_string_js(n: f64, lang: &str) -> String {
    match to_whole_number(n) {
        Some(n) => NumeralRegistry::new().render_for_language(lang, n),
        None => UNSUPPORTED_MARKER.to_string(),
    }
}

fn to_whole_number(n: f64) -> Option<u32> {
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}

/// Line number or line range of the main-text tokens `from..=to`
#[wasm_bindgen(js_name = getLineNumberString)]
pub fn get_line_number_string_js(
    info_json: &str,
    from: usize,
    to: usize,
    lang: &str,
) -> Result<String, JsValue> {
    let info = parse_info(info_json)?;
    let entry = ApparatusEntry::new(from, to);
    Ok(line_number_string(&entry, &info, &NumeralRegistry::new(), lang))
}

/// Lemma label (as JSON) for an apparatus entry given as JSON
#[wasm_bindgen(js_name = getLemmaLabel)]
pub fn get_lemma_label_js(info_json: &str, entry_json: &str, lang: &str) -> Result<String, JsValue> {
    let info = parse_info(info_json)?;
    let entry: ApparatusEntry = serde_json::from_str(entry_json)
        .map_err(|e| JsValue::from_str(&format!("Apparatus entry error: {}", e)))?;

    to_json(&lemma_label(&entry, &info, &NumeralRegistry::new(), lang))
}

/// Keyword, text and sigla (as JSON) of an apparatus sub-entry given as JSON
///
/// `sigla_json` holds `{ sigla, siglaGroups }`; an empty string means no sigla.
#[wasm_bindgen(js_name = getSubEntryLabel)]
pub fn get_sub_entry_label_js(
    sub_entry_json: &str,
    sigla_json: &str,
    lang: &str,
) -> Result<String, JsValue> {
    let sub_entry: ApparatusSubEntry = serde_json::from_str(sub_entry_json)
        .map_err(|e| JsValue::from_str(&format!("Sub-entry error: {}", e)))?;
    let sigla_info = if sigla_json.trim().is_empty() {
        SiglaInfo::default()
    } else {
        SiglaInfo::from_json(sigla_json)
            .map_err(|e| JsValue::from_str(&format!("Sigla error: {}", e)))?
    };

    to_json(&sub_entry_label(&sub_entry, &sigla_info, &NumeralRegistry::new(), lang))
}

/// Margin line-number labels (as JSON) for the typeset main text
#[wasm_bindgen(js_name = getLineNumberLabels)]
pub fn get_line_number_labels_js(info_json: &str, options_json: &str) -> Result<String, JsValue> {
    let info = parse_info(info_json)?;
    let options: LabelOptions = if options_json.trim().is_empty() {
        LabelOptions::default()
    } else {
        serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("Label options error: {}", e)))?
    };

    to_json(&line_number_labels(&info.line_map, &options, &NumeralRegistry::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: &str = r#"[
        { "kind": "text", "plainText": "et", "verticalPosition": 100 },
        { "kind": "text", "plainText": "verbum", "verticalPosition": 100.5 },
        { "kind": "text", "plainText": "et", "verticalPosition": 100 },
        { "kind": "paragraph_end", "verticalPosition": 100 },
        { "kind": "text", "plainText": "erat", "verticalPosition": 124 }
    ]"#;

    #[test]
    fn test_build_line_map() {
        let result = build_line_map_js(TOKENS, 16.0);
        assert!(result.is_ok());

        let info = TypesettingInfo::from_json(&result.unwrap()).unwrap();
        assert_eq!(info.line_number(0), Some(1));
        assert_eq!(info.line_number(4), Some(2));
        assert_eq!(info.occurrence_in_line(2), 2);
        assert_eq!(info.total_occurrences_in_line(0), 2);
    }

    #[test]
    fn test_get_number_string() {
        assert_eq!(get_number_string_js(15.0, "la"), "15");
        assert_eq!(get_number_string_js(15.0, "ar"), "١٥");
    }

    #[test]
    fn test_get_number_string_unsupported() {
        assert_eq!(get_number_string_js(-1.0, "la"), "???");
        assert_eq!(get_number_string_js(2.5, "la"), "???");
        assert_eq!(get_number_string_js(f64::NAN, "ar"), "???");
        assert_eq!(get_number_string_js(1e12, "la"), "???");
        assert_eq!(get_number_string_js(0.0, "la"), "0");
    }

    #[test]
    fn test_get_sub_entry_label() {
        let sub_entry_json =
            r#"{ "type": "omission", "witnessData": [{ "witnessIndex": 0 }, { "witnessIndex": 1 }] }"#;
        let sigla_json =
            r#"{ "sigla": ["A", "B"], "siglaGroups": [{ "siglum": "α", "witnesses": [0, 1] }] }"#;

        let label = get_sub_entry_label_js(sub_entry_json, sigla_json, "he").unwrap();
        assert!(label.contains("\"keyword\":\"חסר\""));
        assert!(label.contains("\"siglum\":\"α\""));

        let label = get_sub_entry_label_js(sub_entry_json, "", "la").unwrap();
        assert!(label.contains("\"siglum\":\"???\""));
    }

    #[test]
    fn test_get_line_number_string() {
        let info_json = build_line_map_js(TOKENS, 16.0).unwrap();

        let result = get_line_number_string_js(&info_json, 0, 4, "la");
        assert_eq!(result.unwrap(), "1-2");

        let result = get_line_number_string_js(&info_json, 2, 2, "la");
        assert_eq!(result.unwrap(), "1");
    }

    #[test]
    fn test_get_lemma_label() {
        let info_json = build_line_map_js(TOKENS, 16.0).unwrap();
        let entry_json = r#"{ "from": 2, "to": 2, "lemmaText": "et" }"#;

        let label = get_lemma_label_js(&info_json, entry_json, "la").unwrap();
        assert!(label.contains("\"type\":\"full\""));
        assert!(label.contains("\"occurrence\":\"2\""));
    }

    #[test]
    fn test_get_line_number_labels() {
        let info_json = build_line_map_js(TOKENS, 16.0).unwrap();

        let labels = get_line_number_labels_js(&info_json, "").unwrap();
        assert!(labels.contains("\"line\":1"));
        assert!(!labels.contains("\"line\":2"));

        let labels = get_line_number_labels_js(&info_json, r#"{ "frequency": 2, "originY": 100 }"#)
            .unwrap();
        assert!(labels.contains("\"line\":2"));
        assert!(labels.contains("\"offsetY\":24.0"));
    }
}
