//! Minimal-cover search
//!
//! Branching enumeration over a reduced prime-implicant table. Each frame
//! first drives the table to a fixed point of essential extraction, row
//! dominance, and column dominance; if rows remain, it branches on the term
//! with the fewest covering primes and recurses on a per-branch copy of the
//! residual table. Covers are pruned to minimum literal cost and
//! deduplicated before being returned.

use std::collections::BTreeSet;

use crate::table::PrimeTable;

/// Literal cost of a cover: total non-dash symbols across its implicants.
///
/// Two single-literal implicants cost 2; one three-literal implicant costs
/// 3. Implicant count is not the cost measure.
///
/// # Examples
///
/// ```
/// use qmc_logic::cover_cost;
///
/// let cover = vec!["1-0-".to_string(), "--11".to_string()];
/// assert_eq!(cover_cost(&cover, '-'), 4);
/// ```
pub fn cover_cost(cover: &[String], dc: char) -> usize {
    cover
        .iter()
        .map(|p| p.chars().filter(|&c| c != dc).count())
        .sum()
}

/// Enumerate the covers of `table`, minimum-cost only when `minonly`.
///
/// Each cover is a list of prime strings; with `sortterms` the implicants
/// within a cover are sorted in descending order, otherwise discovery order
/// is kept. The returned list is duplicate-free.
pub(crate) fn minimal_covers(
    table: PrimeTable,
    minonly: bool,
    sortterms: bool,
    dc: char,
) -> Vec<Vec<String>> {
    recurse(table, minonly, sortterms, dc)
}

fn recurse(mut table: PrimeTable, minonly: bool, sortterms: bool, dc: char) -> Vec<Vec<String>> {
    // Rows covering nothing required (e.g. primes over don't-cares only)
    // never constrain the search.
    table.drop_empty_rows();

    // Joint fixed point: extracting essentials can expose new dominance and
    // vice versa, so iterate all three reductions until none of them fires.
    let mut prefix: Vec<String> = Vec::new();
    loop {
        let mut changed = false;
        let essentials = table.essentials();
        if !essentials.is_empty() {
            prefix.extend(essentials.iter().cloned());
            table.purge(&essentials);
            changed = true;
        }
        changed |= table.row_dominance();
        changed |= table.col_dominance();
        if !changed {
            break;
        }
    }

    if table.is_empty() {
        return finalize(vec![prefix], minonly, sortterms, dc);
    }

    // Branch on the hardest column: the term with the fewest covering
    // primes. BTreeMap order breaks ties toward the smallest term string.
    let columns = table.columns();
    let mut pick: Option<&BTreeSet<String>> = None;
    for primes in columns.values() {
        if pick.map_or(true, |best| primes.len() < best.len()) {
            pick = Some(primes);
        }
    }
    let candidates = match pick {
        Some(candidates) => candidates,
        // Unreachable: a non-empty table with no empty rows has columns.
        None => {
            debug_assert!(false, "non-empty table produced no columns");
            return finalize(vec![prefix], minonly, sortterms, dc);
        }
    };

    let mut covers: Vec<Vec<String>> = Vec::new();
    for prime in candidates {
        let residual = table.reduced_by(prime);
        for child in recurse(residual, minonly, sortterms, dc) {
            let mut cover = Vec::with_capacity(prefix.len() + 1 + child.len());
            cover.extend(prefix.iter().cloned());
            cover.push(prime.clone());
            cover.extend(child);
            covers.push(cover);
        }
    }
    finalize(covers, minonly, sortterms, dc)
}

fn finalize(
    mut covers: Vec<Vec<String>>,
    minonly: bool,
    sortterms: bool,
    dc: char,
) -> Vec<Vec<String>> {
    if sortterms {
        for cover in covers.iter_mut() {
            cover.sort_by(|a, b| b.cmp(a));
        }
    }
    if minonly {
        if let Some(min) = covers.iter().map(|c| cover_cost(c, dc)).min() {
            covers.retain(|c| cover_cost(c, dc) == min);
        }
    }
    // Duplicates arise when branches commit to the same primes in a
    // different order; compare as multisets.
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    covers.retain(|c| {
        let mut key = c.clone();
        key.sort();
        seen.insert(key)
    });
    covers
}
