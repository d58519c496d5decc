//! Korean-locale title collation.

use icu::collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use icu::locale::locale;
use std::cmp::Ordering;
use std::sync::LazyLock;

static KO_COLLATOR: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    Collator::try_new(locale!("ko").into(), CollatorOptions::default())
        .expect("compiled collation data for the ko locale")
});

/// Compares two titles under Korean collation rules.
///
/// Mixed Hangul/Latin text sorts the way a Korean reader expects rather
/// than by raw code point — e.g. `"apple"` sorts before `"Banana"` even
/// though `'B' < 'a'` in UTF-8.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    KO_COLLATOR.compare(a, b)
}
