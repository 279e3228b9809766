//! Reusable input sequences.

/// Hints exercised by the fifty-element scenario: unknown, tiny, the
/// default, exact, and a large overestimate.
pub const SCENARIO_HINTS: [i64; 5] = [0, 1, 16, 50, 1000];

/// `[0, 1, ..., n - 1]`.
pub fn ints(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// `n` single-character strings starting at `"a"` and counting up
/// through the Unicode scalar values.
pub fn letters(n: usize) -> Vec<String> {
    ('a'..).take(n).map(String::from).collect()
}
