//! Ternary term utilities
//!
//! Terms are fixed-length strings over the ternary alphabet `{0, 1, dash}`,
//! most significant variable first. Input terms are dash-free; implicants may
//! carry dashes at positions where a variable has been eliminated. The dash
//! symbol is configurable per problem, so the functions here that interpret
//! dashes take it as an argument.
//!
//! All functions are pure and operate character-wise, so any `char` works as
//! the dash symbol.

use crate::error::TermError;

/// Count the positions at which two equal-length terms differ.
///
/// # Examples
///
/// ```
/// use qmc_logic::term::hamming;
///
/// assert_eq!(hamming("0110", "0111"), 1);
/// assert_eq!(hamming("10-1", "1011"), 1);
/// assert_eq!(hamming("000", "000"), 0);
/// ```
pub fn hamming(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Index of the unique position at which two terms differ.
///
/// Returns `None` when the terms differ at zero positions or at more than
/// one position.
///
/// # Examples
///
/// ```
/// use qmc_logic::term::diff_pos;
///
/// assert_eq!(diff_pos("0110", "0100"), Some(2));
/// assert_eq!(diff_pos("0110", "0110"), None);
/// assert_eq!(diff_pos("0110", "1111"), None);
/// ```
pub fn diff_pos(a: &str, b: &str) -> Option<usize> {
    let mut positions = a
        .chars()
        .zip(b.chars())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i);
    let first = positions.next()?;
    match positions.next() {
        None => Some(first),
        Some(_) => None,
    }
}

/// Indices of every position at which two terms differ.
pub fn diff_positions(a: &str, b: &str) -> Vec<usize> {
    a.chars()
        .zip(b.chars())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

/// Number of `1` symbols in a term. Zeros and dashes do not count.
///
/// # Examples
///
/// ```
/// use qmc_logic::term::count_ones;
///
/// assert_eq!(count_ones("1011"), 3);
/// assert_eq!(count_ones("1-0-"), 1);
/// ```
pub fn count_ones(t: &str) -> usize {
    t.chars().filter(|&c| c == '1').count()
}

/// Render an integer as a `width`-character binary term, MSB first.
///
/// Fails with [`TermError::OutOfRange`] when `n` does not fit in `width`
/// bits.
///
/// # Examples
///
/// ```
/// use qmc_logic::term::to_bits;
///
/// assert_eq!(to_bits(5, 4).unwrap(), "0101");
/// assert!(to_bits(16, 4).is_err());
/// ```
pub fn to_bits(n: u64, width: usize) -> Result<String, TermError> {
    if width < 64 && n >> width != 0 {
        return Err(TermError::OutOfRange { value: n, width });
    }
    Ok((0..width)
        .rev()
        .map(|i| {
            if i < 64 && (n >> i) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect())
}

/// True when `term` agrees with `pattern` at every non-dash position of
/// `pattern`.
///
/// # Examples
///
/// ```
/// use qmc_logic::term::mask_match;
///
/// assert!(mask_match("1-0-", "1101", '-'));
/// assert!(!mask_match("1-0-", "1111", '-'));
/// ```
pub fn mask_match(pattern: &str, term: &str, dc: char) -> bool {
    pattern
        .chars()
        .zip(term.chars())
        .all(|(p, t)| p == dc || p == t)
}

/// Filter `terms` down to those matched by `pattern`.
pub fn mask_matches<I, S>(pattern: &str, terms: I, dc: char) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .filter(|t| mask_match(pattern, t.as_ref(), dc))
        .map(|t| t.as_ref().to_string())
        .collect()
}
