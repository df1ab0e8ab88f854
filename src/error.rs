//! Error types for the Quine-McCluskey minimizer
//!
//! Errors are organized by source: [`TermError`] covers malformed individual
//! terms, while [`ProblemError`] covers problem-level validation and wraps
//! term errors when they surface during construction. All validation is
//! performed when a problem is built; solving a validly constructed problem
//! cannot fail.

use std::fmt;
use std::io;

// ============================================================================
// Term-Level Errors
// ============================================================================

/// Errors produced when an individual input term is malformed
///
/// Input terms may be given as integers (interpreted as a `width`-bit binary
/// number, most significant bit first) or as `width`-character strings over
/// `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// An integer term does not fit in `width` bits
    OutOfRange {
        /// The offending value
        value: u64,
        /// The declared variable count
        width: usize,
    },
    /// A string term does not have exactly `width` symbols
    WrongLength {
        /// The offending term
        term: String,
        /// The declared variable count
        expected: usize,
        /// The number of symbols actually present
        actual: usize,
    },
    /// A string term contains a symbol other than `0` or `1`
    InvalidSymbol {
        /// The offending term
        term: String,
        /// Zero-based position of the bad symbol
        position: usize,
        /// The bad symbol itself
        symbol: char,
    },
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::OutOfRange { value, width } => {
                write!(f, "Term {} does not fit in {} bits", value, width)
            }
            TermError::WrongLength {
                term,
                expected,
                actual,
            } => write!(
                f,
                "Term '{}' has {} symbols, expected {}",
                term, actual, expected
            ),
            TermError::InvalidSymbol {
                term,
                position,
                symbol,
            } => write!(
                f,
                "Term '{}' has invalid symbol '{}' at position {}. Expected 0 or 1.",
                term, symbol, position
            ),
        }
    }
}

impl std::error::Error for TermError {}

impl From<TermError> for io::Error {
    fn from(err: TermError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// ============================================================================
// Problem-Level Errors
// ============================================================================

/// Errors produced when a problem description is invalid
///
/// These are surfaced by [`ProblemBuilder::build`] and are fatal to the
/// request; a successfully built [`Problem`] always solves.
///
/// [`Problem`]: crate::Problem
/// [`ProblemBuilder::build`]: crate::ProblemBuilder::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// Both minterms and maxterms were supplied
    MixedTerms,
    /// Neither minterms nor maxterms were supplied
    EmptyTerms,
    /// The variable count is zero
    ZeroWidth,
    /// The dash symbol collides with `0` or `1`
    InvalidDash {
        /// The offending symbol
        symbol: char,
    },
    /// The variable alphabet has fewer symbols than the problem has variables
    AlphabetTooSmall {
        /// The declared variable count
        width: usize,
        /// The number of variable names available
        available: usize,
    },
    /// An input term failed validation
    Term(TermError),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::MixedTerms => {
                write!(f, "Minterms and maxterms are mutually exclusive")
            }
            ProblemError::EmptyTerms => {
                write!(f, "Either minterms or maxterms must be supplied")
            }
            ProblemError::ZeroWidth => write!(f, "Variable count must be positive"),
            ProblemError::InvalidDash { symbol } => write!(
                f,
                "Dash symbol '{}' must be distinct from '0' and '1'",
                symbol
            ),
            ProblemError::AlphabetTooSmall { width, available } => write!(
                f,
                "{} variables requested but only {} variable names available; \
                 supply a larger alphabet",
                width, available
            ),
            ProblemError::Term(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::Term(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TermError> for ProblemError {
    fn from(err: TermError) -> Self {
        ProblemError::Term(err)
    }
}

impl From<ProblemError> for io::Error {
    fn from(err: ProblemError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_term_error_out_of_range() {
        let err = TermError::OutOfRange {
            value: 16,
            width: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("4 bits"));
    }

    #[test]
    fn test_term_error_wrong_length() {
        let err = TermError::WrongLength {
            term: "010".to_string(),
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'010'"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn test_term_error_invalid_symbol() {
        let err = TermError::InvalidSymbol {
            term: "01x1".to_string(),
            position: 2,
            symbol: 'x',
        };
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("position 2"));
    }

    #[test]
    fn test_problem_error_from_term_error() {
        let term_err = TermError::OutOfRange { value: 9, width: 3 };
        let err: ProblemError = term_err.into();
        assert!(matches!(err, ProblemError::Term(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_problem_error_display() {
        assert!(ProblemError::MixedTerms.to_string().contains("exclusive"));
        assert!(ProblemError::EmptyTerms.to_string().contains("supplied"));
        assert!(ProblemError::ZeroWidth.to_string().contains("positive"));
    }

    #[test]
    fn test_problem_error_to_io_error() {
        let err = ProblemError::MixedTerms;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_term_error_to_io_error() {
        let err = TermError::OutOfRange {
            value: 100,
            width: 2,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
