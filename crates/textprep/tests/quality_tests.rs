use textprep::quality::*;
use textprep::TextStat;

fn stat(final_word_count: usize) -> TextStat {
    TextStat {
        original_word_count: 10,
        stopwords_removed: 0,
        final_word_count,
    }
}

#[test]
fn flags_short_documents() {
    let warnings = check_text_quality(&[stat(5), stat(2), stat(3), stat(0)], 3);
    let flagged: Vec<usize> = warnings.iter().map(|w| w.document).collect();
    assert_eq!(flagged, vec![1, 3]);
}

#[test]
fn no_warnings_when_all_long_enough() {
    assert!(check_text_quality(&[stat(3), stat(4)], DEFAULT_MIN_WORDS).is_empty());
}

#[test]
fn zero_minimum_never_warns() {
    assert!(check_text_quality(&[stat(0)], 0).is_empty());
}

#[test]
fn warning_message_is_one_based() {
    let warnings = check_text_quality(&[stat(5), stat(1)], 3);
    assert_eq!(
        warnings[0].to_string(),
        "document 2 has only 1 meaningful word(s) left (minimum 3)"
    );
}
