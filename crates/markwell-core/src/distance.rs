//! Levenshtein edit distance between answer strings.
//!
//! The distance is diagnostic only: the evaluator logs it for textual
//! questions so near-misses show up in traces, but the verdict is decided
//! purely by normalized equality.

/// Minimum number of single-character insertions, deletions, or
/// substitutions transforming `a` into `b`.
///
/// Operates on Unicode scalar values. `O(len(a) * len(b))` time,
/// `O(min)` extra space via the two-row formulation of the standard
/// DP table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // prev[j] holds dp[i-1][j]; base row dp[0][j] = j.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
