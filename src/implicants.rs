//! Prime-implicant generation
//!
//! The combination phase of the Quine-McCluskey algorithm: input terms are
//! bucketed by their number of `1` symbols, adjacent buckets are scanned for
//! pairs at Hamming distance one, and each such pair is replaced by a single
//! term with the differing position dashed out. Terms that were absorbed into
//! a combination are marked *used*; once no further combinations are
//! possible, the terms never marked used are exactly the prime implicants.

use std::collections::{BTreeMap, BTreeSet};

use crate::term;

/// Every implicant seen during generation, mapped to its used flag.
pub(crate) type Pool = BTreeMap<String, bool>;

/// Prime implicant -> the required terms it covers.
pub(crate) type PrimeMap = BTreeMap<String, BTreeSet<String>>;

/// Run the combination phase and build the prime map.
///
/// `inputs` is every term that participates in combination (required terms
/// plus don't-cares); `required` is the subset that must end up covered
/// (minterms or maxterms). Don't-cares enlarge implicants but never appear
/// on the right-hand side of the prime map, so they cannot force coverage
/// during cover selection.
pub(crate) fn generate(
    inputs: &BTreeSet<String>,
    required: &BTreeSet<String>,
    width: usize,
    dc: char,
) -> (Pool, PrimeMap) {
    let mut pool: Pool = BTreeMap::new();

    // Level-0 bins, keyed by count of 1 symbols.
    let mut bins: Vec<BTreeSet<String>> = vec![BTreeSet::new(); width + 1];
    for t in inputs {
        pool.insert(t.clone(), false);
        bins[term::count_ones(t)].insert(t.clone());
    }

    loop {
        let mut next: Vec<BTreeSet<String>> = vec![BTreeSet::new(); width + 1];
        let mut combined_any = false;

        for k in 0..width {
            for a in &bins[k] {
                for b in &bins[k + 1] {
                    // Within a level all terms carry the same number of
                    // dashes, so a single differing position is always a
                    // 0/1 flip and the pair is combinable.
                    let pos = match term::diff_pos(a, b) {
                        Some(pos) => pos,
                        None => continue,
                    };
                    let combined: String = a
                        .chars()
                        .enumerate()
                        .map(|(i, c)| if i == pos { dc } else { c })
                        .collect();

                    if let Some(used) = pool.get_mut(a.as_str()) {
                        *used = true;
                    }
                    if let Some(used) = pool.get_mut(b.as_str()) {
                        *used = true;
                    }
                    // Set semantics: a combination reached along several
                    // paths enters the pool once, and an existing used flag
                    // is never reset.
                    pool.entry(combined.clone()).or_insert(false);
                    next[term::count_ones(&combined)].insert(combined);
                    combined_any = true;
                }
            }
        }

        if !combined_any {
            break;
        }
        bins = next;
    }

    let primes: PrimeMap = pool
        .iter()
        .filter(|&(_, &used)| !used)
        .map(|(p, _)| {
            let covered: BTreeSet<String> = required
                .iter()
                .filter(|t| term::mask_match(p, t, dc))
                .cloned()
                .collect();
            (p.clone(), covered)
        })
        .collect();

    (pool, primes)
}
