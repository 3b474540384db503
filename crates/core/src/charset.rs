//! Character-set preparation.

use std::collections::BTreeSet;

use crate::config::KeepOptions;

/// Space and the ASCII punctuation characters (33 characters, including both
/// ASCII quote marks).
pub const BASIC_LATIN: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// ASCII digits.
pub const DIGITS: &str = "0123456789";

/// Common CJK and full-width punctuation (20 characters).
///
/// Quotes are the curly `“”‘’` rather than ASCII `"` and `'`, which belong to
/// [`BASIC_LATIN`], so the three sets stay disjoint.
pub const CJK_PUNCTUATION: &str = "。，、；：？！“”‘’【】《》（）·—…";

/// Collects the characters to keep: `text` plus the supplementary sets selected by `keep`.
pub fn char_set(text: &str, keep: KeepOptions) -> BTreeSet<char> {
    let mut chars: BTreeSet<char> = text.chars().collect();

    if keep.basic_latin {
        chars.extend(BASIC_LATIN.chars());
    }
    if keep.digits {
        chars.extend(DIGITS.chars());
    }
    if keep.cjk_punctuation {
        chars.extend(CJK_PUNCTUATION.chars());
    }

    chars
}

/// Deduplicates `text`, adds the selected supplementary sets and returns the
/// characters in ascending code-point order.
pub fn prepare_text(text: &str, keep: KeepOptions) -> String {
    char_set(text, keep).into_iter().collect()
}

/// Shortens `text` to at most `limit` characters, appending `...` when cut.
pub fn preview(text: &str, limit: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() { format!("{head}...") } else { head }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    #[test]
    fn test_fixed_set_sizes() {
        assert_eq!(set(BASIC_LATIN).len(), 33);
        assert_eq!(set(DIGITS).len(), 10);
        assert_eq!(set(CJK_PUNCTUATION).len(), 20);
    }

    #[test]
    fn test_fixed_sets_are_disjoint() {
        assert!(set(BASIC_LATIN).is_disjoint(&set(DIGITS)));
        assert!(set(BASIC_LATIN).is_disjoint(&set(CJK_PUNCTUATION)));
        assert!(set(DIGITS).is_disjoint(&set(CJK_PUNCTUATION)));
    }

    #[test]
    fn test_quote_marks_not_shared() {
        for quote in ['"', '\''] {
            assert!(BASIC_LATIN.contains(quote));
            assert!(!CJK_PUNCTUATION.contains(quote));
        }
        for quote in ['“', '”', '‘', '’'] {
            assert!(CJK_PUNCTUATION.contains(quote));
        }
    }

    #[test]
    fn test_empty_text_no_sets() {
        assert_eq!(prepare_text("", KeepOptions::default()), "");
    }

    #[test]
    fn test_empty_text_all_sets() {
        let prepared = prepare_text("", KeepOptions::ALL);
        let expected: BTreeSet<char> =
            BASIC_LATIN.chars().chain(DIGITS.chars()).chain(CJK_PUNCTUATION.chars()).collect();
        assert_eq!(set(&prepared), expected);
        assert_eq!(prepared.chars().count(), 63);
    }

    #[test]
    fn test_dedup_and_sort() {
        assert_eq!(prepare_text("滴天髓天滴", KeepOptions::default()), "天滴髓");
        assert_eq!(prepare_text("cabbage", KeepOptions::default()), "abceg");
    }

    #[test]
    fn test_digits_only() {
        let keep = KeepOptions { digits: true, ..Default::default() };
        assert_eq!(prepare_text("", keep), "0123456789");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("abc", 50), "abc");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("滴天髓", 3), "滴天髓");
        assert_eq!(preview("滴天髓", 2), "滴天...");
    }
}
