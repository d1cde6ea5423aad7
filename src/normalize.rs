//! Title text canonicalization.
//!
//! Calendar titles are typed on phones, pasted from chat apps and edited with
//! Japanese IMEs, so the same title shows up with full-width brackets, full-width
//! slashes, non-breaking spaces and ideographic spaces. Everything downstream
//! (the title grammar, the identity key) works on the output of [`normalize`].

use unicode_normalization::UnicodeNormalization;

/// Space characters that NFKC leaves alone or maps inconsistently.
const NON_BREAKING_SPACES: &[char] = &['\u{00A0}', '\u{2007}', '\u{202F}'];

/// Canonicalize a raw title.
///
/// 1. Non-breaking spaces become ordinary spaces
/// 2. NFKC compatibility normalization (full-width `｜／，` fold to `|/,`)
/// 3. Leading/trailing whitespace trimmed
///
/// Empty input yields an empty string. The function is idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let spaced: String = text
        .chars()
        .map(|c| {
            if NON_BREAKING_SPACES.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    let folded: String = spaced.nfkc().collect();
    folded.trim().to_string()
}
