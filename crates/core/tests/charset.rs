use std::collections::BTreeSet;

use proptest::prelude::*;

use glyphtrim_core::{BASIC_LATIN, CJK_PUNCTUATION, DIGITS, KeepOptions, char_set, prepare_text};

fn keep_options() -> impl Strategy<Value = KeepOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(basic_latin, digits, cjk_punctuation)| {
        KeepOptions { basic_latin, digits, cjk_punctuation }
    })
}

#[test]
fn all_sets_on_empty_text_is_exact_union() {
    let prepared: BTreeSet<char> = prepare_text("", KeepOptions::ALL).chars().collect();
    let union: BTreeSet<char> =
        BASIC_LATIN.chars().chain(DIGITS.chars()).chain(CJK_PUNCTUATION.chars()).collect();
    assert_eq!(prepared, union);
    assert_eq!(
        union.len(),
        BASIC_LATIN.chars().count() + DIGITS.chars().count() + CJK_PUNCTUATION.chars().count()
    );
}

proptest! {
    #[test]
    fn prepared_text_has_no_duplicates(text in any::<String>(), keep in keep_options()) {
        let prepared = prepare_text(&text, keep);
        let unique: BTreeSet<char> = prepared.chars().collect();
        prop_assert_eq!(unique.len(), prepared.chars().count());
    }

    #[test]
    fn prepared_text_covers_input(text in any::<String>(), keep in keep_options()) {
        let prepared: BTreeSet<char> = prepare_text(&text, keep).chars().collect();
        prop_assert!(text.chars().all(|c| prepared.contains(&c)));
    }

    #[test]
    fn prepared_text_is_sorted(text in any::<String>(), keep in keep_options()) {
        let prepared: Vec<char> = prepare_text(&text, keep).chars().collect();
        prop_assert!(prepared.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn enabling_a_set_never_shrinks(text in any::<String>(), keep in keep_options()) {
        let base = char_set(&text, keep);
        let widened = [
            KeepOptions { basic_latin: true, ..keep },
            KeepOptions { digits: true, ..keep },
            KeepOptions { cjk_punctuation: true, ..keep },
        ];
        for options in widened {
            prop_assert!(char_set(&text, options).is_superset(&base));
        }
    }
}
