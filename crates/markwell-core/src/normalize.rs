//! Canonical text form used for answer comparison.
//!
//! Grading never compares raw submission text. Both sides of every textual
//! comparison go through [`normalize`] first, so "  Paris. " and "paris"
//! grade identically.

/// Punctuation stripped when it stands alone (not part of a number).
const STRIPPED_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Canonicalize text for comparison.
///
/// Applies, in order: lower-casing; typographic-quote folding (`‘ ’ “ ”`
/// to `'` and `"`); stripping of `. , ; : ! ?` unless the character is
/// immediately preceded by a digit (so `3.14` survives); trimming and
/// collapsing of whitespace runs to a single space.
///
/// Total and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut kept = String::with_capacity(lowered.len());
    let mut prev: Option<char> = None;
    for c in lowered.chars() {
        let mapped = match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        };
        let strip = STRIPPED_PUNCTUATION.contains(&mapped)
            && !prev.is_some_and(|p| p.is_ascii_digit());
        if !strip {
            kept.push(mapped);
        }
        prev = Some(c);
    }

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
