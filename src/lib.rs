//! # Quine-McCluskey Logic Minimizer
//!
//! Exact two-level minimization of Boolean functions. Given a truth-table
//! description (the assignments where the function must be true or must be
//! false, plus optional don't-cares), this crate computes every minimum-cost
//! sum-of-products (or product-of-sums) cover and renders each one as a
//! human-readable Boolean expression.
//!
//! ## Overview
//!
//! Minimization runs in two phases:
//!
//! 1. **Prime-implicant generation**: input terms are iteratively combined
//!    pairwise over the ternary alphabet `{0, 1, -}` until no further
//!    combination is possible; the surviving terms are the prime implicants.
//! 2. **Minimal cover selection**: the prime-implicant chart is reduced by
//!    essential-implicant extraction and row/column dominance, then solved
//!    by branching search with cost-based pruning, returning *all*
//!    minimum-cost covers without duplicates.
//!
//! The algorithm is exact and therefore exponential; it is meant for small
//! variable counts, not for synthesis-scale inputs.
//!
//! ## Example
//!
//! ```
//! use qmc_logic::ProblemBuilder;
//!
//! // f(A,B,C,D) with don't-cares at 9 and 14.
//! let mut problem = ProblemBuilder::new(4)
//!     .minterms([4u64, 8, 10, 11, 12, 15])
//!     .dontcares([9u64, 14])
//!     .build()?;
//!
//! for expr in problem.solve() {
//!     println!("{}", expr); // e.g. "(AC) + (AD') + (BC'D')"
//! }
//! # Ok::<(), qmc_logic::ProblemError>(())
//! ```
//!
//! ## Step-wise use
//!
//! Every stage of the pipeline is exposed:
//! [`Problem::find_primes`] returns the prime map,
//! [`Problem::table`] hands out an owned [`PrimeTable`] whose reduction
//! rules ([`PrimeTable::essentials`], [`PrimeTable::row_dominance`],
//! [`PrimeTable::col_dominance`]) can be applied manually, and
//! [`Problem::to_boolean`] renders whatever covers were selected.
//!
//! Problem descriptions can also be read from JSON via [`TruthTable`]; the
//! `qmc` binary wraps this for command-line use.

pub mod error;
pub mod term;

mod implicants;
mod problem;
mod render;
mod search;
mod table;
mod truth_table;

pub use error::{ProblemError, TermError};
pub use problem::{Problem, ProblemBuilder, TermInput, DEFAULT_DASH};
pub use search::cover_cost;
pub use table::PrimeTable;
pub use truth_table::TruthTable;
