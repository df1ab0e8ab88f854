//! On-disk problem descriptions
//!
//! A [`TruthTable`] is the serializable form of a minimization request,
//! matching the builder surface field for field. The CLI reads these from
//! JSON files; terms may be integers or binary strings and the two may be
//! mixed within one list:
//!
//! ```json
//! {
//!   "width": 4,
//!   "minterms": [4, 8, "1010", 11, 12, 15],
//!   "dontcares": [9, 14]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ProblemError;
use crate::problem::{Problem, ProblemBuilder, TermInput};

/// A complete problem description, ready to serialize.
///
/// Optional fields fall back to the builder defaults: dash `-`, variables
/// `A..Z`, `minonly` and `sortterms` both true.
///
/// # Examples
///
/// ```
/// use qmc_logic::TruthTable;
///
/// let json = r#"{ "width": 3, "minterms": [1, 3, 5, 7] }"#;
/// let table: TruthTable = serde_json::from_str(json).unwrap();
/// let mut problem = table.into_problem()?;
/// assert_eq!(problem.solve(), ["(C)"]);
/// # Ok::<(), qmc_logic::ProblemError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TruthTable {
    /// Number of Boolean variables
    pub width: usize,
    /// Required-true assignments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minterms: Vec<TermInput>,
    /// Required-false assignments (mutually exclusive with minterms)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maxterms: Vec<TermInput>,
    /// Unconstrained assignments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dontcares: Vec<TermInput>,
    /// Dash symbol override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc: Option<char>,
    /// Variable-name override, by position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vec<String>>,
    /// Keep only minimum-cost covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minonly: Option<bool>,
    /// Sort implicants within each cover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortterms: Option<bool>,
}

impl TruthTable {
    /// Validate and convert into a solvable [`Problem`].
    pub fn into_problem(self) -> Result<Problem, ProblemError> {
        let mut builder = ProblemBuilder::new(self.width)
            .minterms(self.minterms)
            .maxterms(self.maxterms)
            .dontcares(self.dontcares);
        if let Some(dc) = self.dc {
            builder = builder.dash(dc);
        }
        if let Some(vars) = self.vars {
            builder = builder.variables(vars);
        }
        if let Some(minonly) = self.minonly {
            builder = builder.minonly(minonly);
        }
        if let Some(sortterms) = self.sortterms {
            builder = builder.sortterms(sortterms);
        }
        builder.build()
    }
}
