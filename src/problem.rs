//! Problem construction and orchestration
//!
//! A [`Problem`] holds one minimization request: the variable count, the
//! input term sets, and the solver preferences. It is created through
//! [`ProblemBuilder`], which validates everything up front, and then drives
//! the pipeline: prime-implicant generation, minimal-cover selection, and
//! expression rendering. Intermediate results are cached on the problem so
//! the stages can also be stepped through individually.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ProblemError, TermError};
use crate::implicants;
use crate::render;
use crate::search;
use crate::table::PrimeTable;
use crate::term;

/// Default dash symbol for eliminated variable positions.
pub const DEFAULT_DASH: char = '-';

/// One input term, as supplied by the caller.
///
/// Terms are either integers (interpreted as a `width`-bit binary number,
/// MSB first) or dash-free binary strings of exactly `width` symbols. The
/// two forms may be mixed freely within one list. In serialized form the
/// distinction is carried by the JSON type: `5` versus `"0101"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermInput {
    /// Integer form; must satisfy `value < 2^width`
    Index(u64),
    /// String form; `width` symbols over `0`/`1`
    Bits(String),
}

impl TermInput {
    /// Resolve to a canonical `width`-character binary term.
    pub fn into_term(self, width: usize) -> Result<String, TermError> {
        match self {
            TermInput::Index(n) => term::to_bits(n, width),
            TermInput::Bits(s) => {
                let actual = s.chars().count();
                if actual != width {
                    return Err(TermError::WrongLength {
                        term: s,
                        expected: width,
                        actual,
                    });
                }
                if let Some((position, symbol)) = s
                    .chars()
                    .enumerate()
                    .find(|(_, c)| *c != '0' && *c != '1')
                {
                    return Err(TermError::InvalidSymbol {
                        term: s,
                        position,
                        symbol,
                    });
                }
                Ok(s)
            }
        }
    }
}

impl From<u64> for TermInput {
    fn from(n: u64) -> Self {
        TermInput::Index(n)
    }
}

impl From<&str> for TermInput {
    fn from(s: &str) -> Self {
        TermInput::Bits(s.to_string())
    }
}

impl From<String> for TermInput {
    fn from(s: String) -> Self {
        TermInput::Bits(s)
    }
}

/// Builder for [`Problem`]
///
/// Collects the term lists and preferences, then validates the whole
/// request in [`build`](ProblemBuilder::build).
///
/// # Examples
///
/// ```
/// use qmc_logic::ProblemBuilder;
///
/// let mut problem = ProblemBuilder::new(3)
///     .minterms([1u64, 3, 5, 7])
///     .build()?;
/// assert_eq!(problem.solve(), ["(C)"]);
/// # Ok::<(), qmc_logic::ProblemError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    width: usize,
    dc: char,
    vars: Option<Vec<String>>,
    minonly: bool,
    sortterms: bool,
    minterms: Vec<TermInput>,
    maxterms: Vec<TermInput>,
    dontcares: Vec<TermInput>,
}

impl ProblemBuilder {
    /// Start a problem over `width` Boolean variables.
    pub fn new(width: usize) -> Self {
        ProblemBuilder {
            width,
            dc: DEFAULT_DASH,
            vars: None,
            minonly: true,
            sortterms: true,
            minterms: Vec::new(),
            maxterms: Vec::new(),
            dontcares: Vec::new(),
        }
    }

    /// Add required-true assignments. Mutually exclusive with
    /// [`maxterms`](ProblemBuilder::maxterms).
    pub fn minterms<T, I>(mut self, terms: I) -> Self
    where
        T: Into<TermInput>,
        I: IntoIterator<Item = T>,
    {
        self.minterms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Add required-false assignments. Mutually exclusive with
    /// [`minterms`](ProblemBuilder::minterms).
    pub fn maxterms<T, I>(mut self, terms: I) -> Self
    where
        T: Into<TermInput>,
        I: IntoIterator<Item = T>,
    {
        self.maxterms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Add unconstrained assignments, free to enlarge implicants.
    pub fn dontcares<T, I>(mut self, terms: I) -> Self
    where
        T: Into<TermInput>,
        I: IntoIterator<Item = T>,
    {
        self.dontcares.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Set the dash symbol (default `-`). Must differ from `0` and `1`.
    pub fn dash(mut self, dc: char) -> Self {
        self.dc = dc;
        self
    }

    /// Supply variable names by position, replacing the default `A..Z`.
    ///
    /// Required for problems wider than 26 variables.
    pub fn variables<S, I>(mut self, vars: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.vars = Some(vars.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only minimum-cost covers (default true).
    pub fn minonly(mut self, minonly: bool) -> Self {
        self.minonly = minonly;
        self
    }

    /// Sort implicants within each emitted cover in descending order
    /// (default true). When disabled, discovery order is kept.
    pub fn sortterms(mut self, sortterms: bool) -> Self {
        self.sortterms = sortterms;
        self
    }

    /// Validate the request and produce a [`Problem`].
    pub fn build(self) -> Result<Problem, ProblemError> {
        if self.width == 0 {
            return Err(ProblemError::ZeroWidth);
        }
        if self.dc == '0' || self.dc == '1' {
            return Err(ProblemError::InvalidDash { symbol: self.dc });
        }
        match (self.minterms.is_empty(), self.maxterms.is_empty()) {
            (true, true) => return Err(ProblemError::EmptyTerms),
            (false, false) => return Err(ProblemError::MixedTerms),
            _ => {}
        }

        let vars = match self.vars {
            Some(vars) => vars,
            None => ('A'..='Z').map(String::from).collect(),
        };
        if vars.len() < self.width {
            return Err(ProblemError::AlphabetTooSmall {
                width: self.width,
                available: vars.len(),
            });
        }

        let width = self.width;
        let resolve = |inputs: Vec<TermInput>| -> Result<BTreeSet<String>, TermError> {
            inputs.into_iter().map(|t| t.into_term(width)).collect()
        };

        Ok(Problem {
            width,
            dc: self.dc,
            vars,
            minonly: self.minonly,
            sortterms: self.sortterms,
            minterms: resolve(self.minterms)?,
            maxterms: resolve(self.maxterms)?,
            dontcares: resolve(self.dontcares)?,
            pool: BTreeMap::new(),
            primes: BTreeMap::new(),
            covers: Vec::new(),
            expressions: Vec::new(),
        })
    }
}

/// One exact-minimization request and its computed results.
///
/// A problem is created once per minimization via [`ProblemBuilder`] and is
/// driven by [`solve`](Problem::solve), which runs prime generation, cover
/// selection, and rendering in order. Each stage caches its output, so
/// repeated calls are free and the stages can be inspected individually:
/// [`find_primes`](Problem::find_primes) for the prime map,
/// [`table`](Problem::table) for a fresh reducible cover table,
/// [`find_covers`](Problem::find_covers) for the selected covers, and
/// [`to_boolean`](Problem::to_boolean) for the rendered expressions.
///
/// # Examples
///
/// ```
/// use qmc_logic::ProblemBuilder;
///
/// let mut problem = ProblemBuilder::new(4)
///     .minterms([4u64, 8, 10, 11, 12, 15])
///     .dontcares([9u64, 14])
///     .build()?;
///
/// for expr in problem.solve() {
///     println!("{}", expr);
/// }
/// # Ok::<(), qmc_logic::ProblemError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    width: usize,
    dc: char,
    vars: Vec<String>,
    minonly: bool,
    sortterms: bool,
    minterms: BTreeSet<String>,
    maxterms: BTreeSet<String>,
    dontcares: BTreeSet<String>,
    // Stage caches; empty means not yet computed. None of them can be
    // empty once their stage has run (a valid problem always has at least
    // one prime, one cover, and one expression).
    pool: BTreeMap<String, bool>,
    primes: BTreeMap<String, BTreeSet<String>>,
    covers: Vec<Vec<String>>,
    expressions: Vec<String>,
}

impl Problem {
    /// Start building a problem over `width` variables.
    pub fn builder(width: usize) -> ProblemBuilder {
        ProblemBuilder::new(width)
    }

    /// The variable count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The dash symbol used in implicant strings.
    pub fn dash(&self) -> char {
        self.dc
    }

    /// Variable names by position.
    pub fn variables(&self) -> &[String] {
        &self.vars
    }

    /// The required-true assignments, in canonical string form.
    pub fn minterms(&self) -> &BTreeSet<String> {
        &self.minterms
    }

    /// The required-false assignments, in canonical string form.
    pub fn maxterms(&self) -> &BTreeSet<String> {
        &self.maxterms
    }

    /// The unconstrained assignments, in canonical string form.
    pub fn dontcares(&self) -> &BTreeSet<String> {
        &self.dontcares
    }

    /// True when the problem was stated in maxterms (product-of-sums
    /// output).
    pub fn is_maxterm_based(&self) -> bool {
        !self.maxterms.is_empty()
    }

    /// Generate the prime implicants, returning the prime map.
    ///
    /// Each prime maps to the set of required terms it covers; a prime that
    /// covers only don't-cares maps to the empty set. The map is computed
    /// once and reused by later stages.
    pub fn find_primes(&mut self) -> &BTreeMap<String, BTreeSet<String>> {
        if self.primes.is_empty() {
            let inputs: BTreeSet<String> = self
                .minterms
                .iter()
                .chain(self.maxterms.iter())
                .chain(self.dontcares.iter())
                .cloned()
                .collect();
            let required: BTreeSet<String> = self
                .minterms
                .iter()
                .chain(self.maxterms.iter())
                .cloned()
                .collect();
            let (pool, primes) = implicants::generate(&inputs, &required, self.width, self.dc);
            self.pool = pool;
            self.primes = primes;
        }
        &self.primes
    }

    /// Every implicant seen during generation, mapped to its used flag.
    ///
    /// An implicant marked used was absorbed into a larger one; the
    /// unused entries are the primes.
    pub fn implicant_pool(&mut self) -> &BTreeMap<String, bool> {
        self.find_primes();
        &self.pool
    }

    /// A fresh cover table over the prime map, for step-wise reduction.
    ///
    /// The table is an owned copy: reducing it (essentials, row dominance,
    /// column dominance) leaves the problem's prime map untouched.
    pub fn table(&mut self) -> PrimeTable {
        PrimeTable::from_rows(self.find_primes().clone())
    }

    /// Select the minimal covers, as lists of prime strings.
    pub fn find_covers(&mut self) -> &[Vec<String>] {
        if self.covers.is_empty() {
            let table = self.table();
            self.covers = search::minimal_covers(table, self.minonly, self.sortterms, self.dc);
        }
        &self.covers
    }

    /// The selected covers. Alias for [`find_covers`](Problem::find_covers).
    pub fn covers(&mut self) -> &[Vec<String>] {
        self.find_covers()
    }

    /// Render the selected covers as Boolean expression strings.
    pub fn to_boolean(&mut self) -> &[String] {
        if self.expressions.is_empty() {
            self.find_covers();
            self.expressions = render::render_covers(
                &self.covers,
                &self.vars,
                self.dc,
                self.is_maxterm_based(),
            );
        }
        &self.expressions
    }

    /// Run the full pipeline and return the expressions, one per minimal
    /// cover.
    ///
    /// All validation happens at construction; solving a built problem
    /// always succeeds (the algorithm is deterministic and total, though
    /// exponential in the worst case).
    pub fn solve(&mut self) -> &[String] {
        self.to_boolean()
    }
}
