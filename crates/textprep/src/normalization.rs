use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Normalize text: lowercase, strip punctuation, replace digit runs with a space.
///
/// Whitespace is left as is; splitting happens in [`crate::tokenization`].
/// The output is a fixed point: normalizing it again returns it unchanged.
pub fn normalize_text(text: &str) -> String {
    normalize_with(text, true)
}

/// Same as [`normalize_text`], with lowercasing optional.
pub fn normalize_with(text: &str, lowercase: bool) -> String {
    if lowercase {
        replace_digit_runs(&strip_punctuation(&text.to_lowercase()))
    } else {
        replace_digit_runs(&strip_punctuation(text))
    }
}

/// Drop every character that is neither a word character nor whitespace.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| is_word_char(*c) || is_space(*c))
        .collect()
}

/// Replace each maximal run of decimal digits with a single space.
pub fn replace_digit_runs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_digits = false;
    for c in text.chars() {
        if is_decimal_digit(c) {
            if !in_digits {
                result.push(' ');
                in_digits = true;
            }
        } else {
            result.push(c);
            in_digits = false;
        }
    }
    result
}

/// Word characters: letters, numbers of any kind, and underscore.
pub fn is_word_char(c: char) -> bool {
    c == '_'
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
        )
}

/// Decimal digits (category Nd). Superscripts and roman numerals are not digits.
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

/// Non-empty runs between [`is_space`] characters.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|w| !w.is_empty())
}

/// Count whitespace-separated words without any cleaning.
pub fn raw_word_count(text: &str) -> usize {
    words(text).count()
}
