use crate::entry::ApparatusEntry;
use apparatus_numerals::{NumeralRegistry, UNSUPPORTED_MARKER};
use apparatus_typesetting::TypesettingInfo;
use tracing::warn;

/// Line number, or `start-end` line range, an entry refers to
///
/// An entry anchored before the main text is reported on line 1. An end whose
/// line is unknown is rendered as the unsupported marker, e.g. `3-???`.
pub fn line_number_string(
    entry: &ApparatusEntry,
    info: &TypesettingInfo,
    numerals: &NumeralRegistry,
    lang: &str,
) -> String {
    if info.token(entry.from).is_none() {
        return numerals.render_for_language(lang, 1);
    }

    let start = info.line_number(entry.from);
    let end = info.line_number(entry.to);
    if start.is_none() || end.is_none() {
        warn!(
            from = entry.from,
            to = entry.to,
            "Line number data not found for apparatus entry"
        );
    }

    let render = |line: Option<u32>| match line {
        Some(line) => numerals.render_for_language(lang, line),
        None => UNSUPPORTED_MARKER.to_string(),
    };
    if start == end {
        render(start)
    } else {
        format!("{}-{}", render(start), render(end))
    }
}

/// Line heading to print before each entry of an apparatus
///
/// Consecutive entries on the same line share the heading of the first one;
/// the others get `None`.
pub fn line_headings(
    entries: &[ApparatusEntry],
    info: &TypesettingInfo,
    numerals: &NumeralRegistry,
    lang: &str,
) -> Vec<Option<String>> {
    let mut last_line: Option<String> = None;
    entries
        .iter()
        .map(|entry| {
            let line = line_number_string(entry, info, numerals, lang);
            if last_line.as_deref() == Some(line.as_str()) {
                None
            } else {
                last_line = Some(line.clone());
                Some(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apparatus_typesetting::{build_line_map, LineMapOptions, PositionedToken};

    /// Five lines, two tokens each, 20px apart
    fn five_lines() -> TypesettingInfo {
        let tokens: Vec<PositionedToken> = (0..10)
            .map(|i| PositionedToken::text(format!("w{}", i), 100.0 + 20.0 * (i / 2) as f64))
            .collect();
        build_line_map(&tokens, &LineMapOptions::default())
    }

    #[test]
    fn test_single_line() {
        let info = five_lines();
        let numerals = NumeralRegistry::new();

        // tokens 4 and 5 are both on line 3
        let entry = ApparatusEntry::new(4, 5);
        assert_eq!(line_number_string(&entry, &info, &numerals, "la"), "3");

        let entry = ApparatusEntry::new(4, 4);
        assert_eq!(line_number_string(&entry, &info, &numerals, "la"), "3");
    }

    #[test]
    fn test_line_range() {
        let info = five_lines();
        let numerals = NumeralRegistry::new();

        let entry = ApparatusEntry::new(4, 9);
        assert_eq!(line_number_string(&entry, &info, &numerals, "la"), "3-5");
        assert_eq!(line_number_string(&entry, &info, &numerals, "ar"), "٣-٥");
    }

    #[test]
    fn test_entry_before_main_text() {
        let info = five_lines();
        let numerals = NumeralRegistry::new();

        let entry = ApparatusEntry::new(40, 41);
        assert_eq!(line_number_string(&entry, &info, &numerals, "la"), "1");
        assert_eq!(line_number_string(&entry, &info, &numerals, "ar"), "١");
    }

    #[test]
    fn test_unknown_end_line() {
        let info = five_lines();
        let numerals = NumeralRegistry::new();

        let entry = ApparatusEntry::new(2, 40);
        assert_eq!(line_number_string(&entry, &info, &numerals, "la"), "2-???");
        assert_eq!(line_number_string(&entry, &info, &numerals, "ar"), "٢-???");
    }

    #[test]
    fn test_unmeasured_tokens() {
        let tokens = vec![
            PositionedToken::text("in", 10.0),
            PositionedToken::unmeasured("principio"),
            PositionedToken::unmeasured("erat"),
        ];
        let info = build_line_map(&tokens, &LineMapOptions::default());
        let numerals = NumeralRegistry::new();

        let entry = ApparatusEntry::new(1, 2);
        assert_eq!(
            line_number_string(&entry, &info, &numerals, "la"),
            UNSUPPORTED_MARKER
        );

        let entry = ApparatusEntry::new(0, 1);
        assert_eq!(line_number_string(&entry, &info, &numerals, "la"), "1-???");
    }

    #[test]
    fn test_line_headings_skip_repeats() {
        let info = five_lines();
        let numerals = NumeralRegistry::new();

        let entries = vec![
            ApparatusEntry::new(0, 0),
            ApparatusEntry::new(1, 1),
            ApparatusEntry::new(2, 2),
            ApparatusEntry::new(3, 6),
            ApparatusEntry::new(7, 7),
        ];
        let headings = line_headings(&entries, &info, &numerals, "la");
        assert_eq!(
            headings,
            vec![
                Some("1".to_string()),
                None,
                Some("2".to_string()),
                Some("2-4".to_string()),
                Some("4".to_string()),
            ]
        );
    }
}
