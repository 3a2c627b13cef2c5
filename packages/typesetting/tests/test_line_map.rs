/// Line mapping properties over realistic measured main texts
///
/// These tests validate that:
/// - Well-separated positions get consecutive line numbers by rank
/// - Sub-pixel jitter within half a line height stays on one line
/// - Repeated words are counted per line, never across lines
/// - Mapping is a pure function of its input

use apparatus_typesetting::{build_line_map, LineMapOptions, PositionedToken, TokenKind};

fn measured(words: &[(&str, f64)]) -> Vec<PositionedToken> {
    words
        .iter()
        .map(|(word, y)| PositionedToken::text(*word, *y))
        .collect()
}

#[test]
fn test_line_number_is_rank_of_separated_positions() {
    // input order deliberately differs from vertical order
    let positions = [250.0, 10.0, 130.0, 70.0, 190.0];
    let tokens: Vec<PositionedToken> = positions
        .iter()
        .enumerate()
        .map(|(i, y)| PositionedToken::text(format!("w{}", i), *y))
        .collect();

    let info = build_line_map(&tokens, &LineMapOptions::default());

    for (i, y) in positions.iter().enumerate() {
        let rank = positions.iter().filter(|other| *other < y).count() as u32 + 1;
        assert_eq!(info.line_number(i), Some(rank), "token {} at y={}", i, y);
    }
    assert_eq!(info.y_positions, vec![10.0, 70.0, 130.0, 190.0, 250.0]);
}

#[test]
fn test_cluster_within_half_line_height() {
    let tokens = measured(&[
        ("Lorem", 100.0),
        ("ipsum", 100.25),
        ("dolor", 104.0),
        ("sit", 107.5),
        ("amet", 124.0),
    ]);

    let info = build_line_map(&tokens, &LineMapOptions::default());

    let lines: Vec<Option<u32>> = (0..tokens.len()).map(|i| info.line_number(i)).collect();
    assert_eq!(lines, vec![Some(1), Some(1), Some(1), Some(1), Some(2)]);
    assert_eq!(info.line_map.entries().len(), 5);
    assert_eq!(info.line_map.line_count(), 2);
}

#[test]
fn test_larger_line_height_merges_more() {
    let tokens = measured(&[("a", 100.0), ("b", 112.0), ("c", 130.0)]);

    let narrow = build_line_map(&tokens, &LineMapOptions::default());
    let wide = build_line_map(&tokens, &LineMapOptions::new(24.0).unwrap());

    assert_eq!(narrow.line_number(1), Some(2));
    assert_eq!(wide.line_number(1), Some(1));
    assert_eq!(wide.line_number(2), Some(2));
}

#[test]
fn test_occurrence_stamps_for_repeated_words() {
    let tokens = measured(&[("a", 40.0), ("b", 40.0), ("a", 40.0), ("a", 40.0)]);
    let info = build_line_map(&tokens, &LineMapOptions::default());

    let stamps: Vec<(u32, u32)> = (0..4)
        .map(|i| (info.occurrence_in_line(i), info.total_occurrences_in_line(i)))
        .collect();
    assert_eq!(stamps, vec![(1, 3), (1, 1), (2, 3), (3, 3)]);
}

#[test]
fn test_occurrences_across_paragraphs_and_lines() {
    let tokens = vec![
        PositionedToken::text("qui", 20.0),
        PositionedToken::text("dixit", 20.0),
        PositionedToken::text("qui", 20.5),
        PositionedToken::paragraph_end(Some(20.5)),
        PositionedToken::text("qui", 60.0),
        PositionedToken::text("autem", 60.0),
    ];

    let info = build_line_map(&tokens, &LineMapOptions::default());

    assert_eq!(info.tokens.len(), tokens.len());
    assert_eq!(info.tokens[3].kind, TokenKind::ParagraphEnd);
    assert_eq!(info.total_occurrences_in_line(0), 2);
    assert_eq!(info.occurrence_in_line(2), 2);
    assert_eq!(info.occurrence_in_line(4), 1);
    assert_eq!(info.total_occurrences_in_line(4), 1);
}

#[test]
fn test_tokens_keep_input_order() {
    let tokens = measured(&[("gamma", 50.0), ("alpha", 10.0), ("beta", 30.0)]);
    let info = build_line_map(&tokens, &LineMapOptions::default());

    let words: Vec<&str> = info.tokens.iter().map(|t| t.plain_text.as_str()).collect();
    assert_eq!(words, vec!["gamma", "alpha", "beta"]);
}

#[test]
fn test_mapping_is_idempotent() {
    let tokens = measured(&[
        ("in", 10.0),
        ("principio", 10.0),
        ("erat", 10.5),
        ("verbum", 30.0),
        ("et", 30.0),
        ("verbum", 30.0),
    ]);

    let first = build_line_map(&tokens, &LineMapOptions::default());
    let second = build_line_map(&tokens, &LineMapOptions::default());
    assert_eq!(first, second);

    // feeding the annotated output back in changes nothing either
    let again = build_line_map(&first.tokens, &LineMapOptions::default());
    assert_eq!(first, again);
}

#[test]
fn test_out_of_range_lookups_do_not_panic() {
    let info = build_line_map(&measured(&[("a", 10.0)]), &LineMapOptions::default());

    assert_eq!(info.occurrence_in_line(1), 1);
    assert_eq!(info.occurrence_in_line(usize::MAX), 1);
    assert_eq!(info.total_occurrences_in_line(5), 1);
    assert_eq!(info.line_number(5), None);
}

#[test]
fn test_unmeasured_text_token_has_unknown_line() {
    let tokens = vec![
        PositionedToken::text("visible", 10.0),
        PositionedToken::unmeasured("hidden"),
    ];
    let info = build_line_map(&tokens, &LineMapOptions::default());

    assert_eq!(info.line_number(0), Some(1));
    assert_eq!(info.line_number(1), None);
    assert_eq!(info.occurrence_in_line(1), 1);
    assert_eq!(info.y_positions, vec![10.0]);
}
