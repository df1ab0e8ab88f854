//! Prime-implicant cover table
//!
//! [`PrimeTable`] is the working form of the prime-implicant chart: rows are
//! prime implicants, columns are the required terms still awaiting coverage.
//! The reduction rules (essential extraction, row dominance, column
//! dominance) mutate a table in place; the cover search clones the table per
//! branch so each recursion frame owns its copy.

use std::collections::{BTreeMap, BTreeSet};

/// A prime-implicant/term incidence table.
///
/// Rows map each prime to the set of required terms it covers. The column
/// view is derived on demand with [`columns`](PrimeTable::columns). Ordered
/// containers keep iteration deterministic, so identical inputs always
/// reduce identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeTable {
    rows: BTreeMap<String, BTreeSet<String>>,
}

impl PrimeTable {
    pub(crate) fn from_rows(rows: BTreeMap<String, BTreeSet<String>>) -> Self {
        PrimeTable { rows }
    }

    /// True when no rows remain (every required term is covered).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of remaining rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The row view: prime -> covered terms.
    pub fn rows(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.rows
    }

    /// The column view: term -> primes covering it.
    ///
    /// Only terms present in some row appear, so every column set is
    /// non-empty.
    pub fn columns(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut cols: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (prime, terms) in &self.rows {
            for t in terms {
                cols.entry(t.clone()).or_default().insert(prime.clone());
            }
        }
        cols
    }

    /// Primes that are the unique cover of at least one term.
    ///
    /// A prime essential for several terms appears once: essentials form a
    /// set, not a multiset.
    pub fn essentials(&self) -> BTreeSet<String> {
        self.columns()
            .into_values()
            .filter(|primes| primes.len() == 1)
            .flatten()
            .collect()
    }

    /// Remove the essential rows and every column they cover.
    ///
    /// Rows left without columns are dropped.
    pub fn purge(&mut self, essentials: &BTreeSet<String>) {
        let mut covered: BTreeSet<String> = BTreeSet::new();
        for e in essentials {
            if let Some(terms) = self.rows.get(e) {
                covered.extend(terms.iter().cloned());
            }
        }
        for e in essentials {
            self.rows.remove(e);
        }
        for terms in self.rows.values_mut() {
            terms.retain(|t| !covered.contains(t));
        }
        self.drop_empty_rows();
    }

    /// Remove every row whose coverage is a proper subset of another row's.
    ///
    /// Rows with equal coverage both survive; they seed alternative minimum
    /// covers. Returns whether anything was removed.
    pub fn row_dominance(&mut self) -> bool {
        let doomed: Vec<String> = self
            .rows
            .iter()
            .filter(|(p1, t1)| {
                self.rows
                    .iter()
                    .any(|(p2, t2)| *p1 != p2 && t1.len() < t2.len() && t1.is_subset(t2))
            })
            .map(|(p, _)| p.clone())
            .collect();
        for p in &doomed {
            self.rows.remove(p);
        }
        !doomed.is_empty()
    }

    /// Remove every column whose covering-prime set is a proper superset of
    /// another column's.
    ///
    /// Such a term is covered for free by whatever covers the smaller
    /// column, so it imposes no independent constraint. Rows left without
    /// columns are dropped. Returns whether anything was removed.
    pub fn col_dominance(&mut self) -> bool {
        let cols = self.columns();
        let doomed: Vec<String> = cols
            .iter()
            .filter(|(t2, p2)| {
                cols.iter()
                    .any(|(t1, p1)| *t2 != t1 && p1.len() < p2.len() && p1.is_subset(p2))
            })
            .map(|(t, _)| t.clone())
            .collect();
        if doomed.is_empty() {
            return false;
        }
        for terms in self.rows.values_mut() {
            for t in &doomed {
                terms.remove(t);
            }
        }
        self.drop_empty_rows();
        true
    }

    /// The residual table after committing to `prime`: its covered terms
    /// leave every column, the row itself is deleted, and rows left empty
    /// are dropped.
    pub(crate) fn reduced_by(&self, prime: &str) -> PrimeTable {
        let mut out = self.clone();
        if let Some(covered) = self.rows.get(prime) {
            out.rows.remove(prime);
            for terms in out.rows.values_mut() {
                terms.retain(|t| !covered.contains(t));
            }
            out.drop_empty_rows();
        }
        out
    }

    pub(crate) fn drop_empty_rows(&mut self) {
        self.rows.retain(|_, terms| !terms.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &[&str])]) -> PrimeTable {
        PrimeTable::from_rows(
            rows.iter()
                .map(|(p, ts)| {
                    (
                        p.to_string(),
                        ts.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_columns_invert_rows() {
        let t = table(&[("0-", &["00", "01"]), ("-1", &["01", "11"])]);
        let cols = t.columns();
        assert_eq!(cols["00"], set(&["0-"]));
        assert_eq!(cols["01"], set(&["0-", "-1"]));
        assert_eq!(cols["11"], set(&["-1"]));
    }

    #[test]
    fn test_essentials_unique_cover() {
        let t = table(&[("0-", &["00", "01"]), ("-1", &["01", "11"])]);
        // 00 is covered only by 0-, 11 only by -1.
        assert_eq!(t.essentials(), set(&["0-", "-1"]));
    }

    #[test]
    fn test_essentials_collapse_to_set() {
        let t = table(&[("1-", &["10", "11"])]);
        // Essential for both of its terms, reported once.
        assert_eq!(t.essentials(), set(&["1-"]));
    }

    #[test]
    fn test_no_essentials_in_cyclic_core() {
        let t = table(&[
            ("a", &["1", "2"]),
            ("b", &["2", "3"]),
            ("c", &["3", "1"]),
        ]);
        assert!(t.essentials().is_empty());
    }

    #[test]
    fn test_purge_removes_rows_and_covered_columns() {
        let mut t = table(&[
            ("0-", &["00", "01"]),
            ("-1", &["01", "11"]),
            ("1-", &["11", "10"]),
        ]);
        t.purge(&set(&["0-"]));
        assert!(!t.rows().contains_key("0-"));
        // 01 left with -1's row; 11 and 10 untouched.
        assert_eq!(t.rows()["-1"], set(&["11"]));
        assert_eq!(t.rows()["1-"], set(&["11", "10"]));
    }

    #[test]
    fn test_purge_drops_emptied_rows() {
        let mut t = table(&[("a", &["1", "2"]), ("b", &["1"])]);
        t.purge(&set(&["a"]));
        assert!(t.is_empty());
    }

    #[test]
    fn test_row_dominance_proper_subset() {
        let mut t = table(&[("big", &["1", "2", "3"]), ("small", &["1", "2"])]);
        assert!(t.row_dominance());
        assert!(t.rows().contains_key("big"));
        assert!(!t.rows().contains_key("small"));
    }

    #[test]
    fn test_row_dominance_keeps_equal_rows() {
        let mut t = table(&[("x", &["1", "2"]), ("y", &["1", "2"])]);
        assert!(!t.row_dominance());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_col_dominance_removes_superset_column() {
        // Term "2" is covered by everything covering "1" and more, so it
        // adds no constraint.
        let mut t = table(&[("a", &["1", "2"]), ("b", &["2", "3"])]);
        assert!(t.col_dominance());
        let cols = t.columns();
        assert!(cols.contains_key("1"));
        assert!(cols.contains_key("3"));
        assert!(!cols.contains_key("2"));
    }

    #[test]
    fn test_col_dominance_keeps_equal_columns() {
        let mut t = table(&[("a", &["1", "2"]), ("b", &["1", "2"])]);
        assert!(!t.col_dominance());
        assert_eq!(t.columns().len(), 2);
    }

    #[test]
    fn test_reduced_by_removes_choice_and_coverage() {
        let t = table(&[
            ("a", &["1", "2"]),
            ("b", &["2", "3"]),
            ("c", &["3", "4"]),
        ]);
        let r = t.reduced_by("a");
        assert!(!r.rows().contains_key("a"));
        assert_eq!(r.rows()["b"], set(&["3"]));
        assert_eq!(r.rows()["c"], set(&["3", "4"]));
        // Original untouched.
        assert_eq!(t.rows()["b"], set(&["2", "3"]));
    }
}
