//! Essential prime implicant selection and greedy covering
//!
//! A maxterm covered by exactly one prime makes that prime essential.
//! Whatever the essentials leave uncovered is covered greedily: the prime
//! covering the most still-uncovered maxterms is taken next. This is the
//! usual set-cover heuristic and does not guarantee the fewest clauses.

use crate::error::{Error, Result};
use crate::term::Term;
use log::{debug, warn};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeSet;

/// A prime added by the greedy step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GreedyPick {
    pub term: Term,
    /// Maxterms this pick covered that nothing selected before it did
    pub newly_covered: Vec<u32>,
}

/// Outcome of stage 4
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Selection {
    /// Essential primes, in order of the first maxterm that forced them
    pub essentials: Vec<Term>,
    /// Maxterms left uncovered once the essentials were taken, ascending
    pub uncovered: Vec<u32>,
    /// Primes added greedily, in selection order
    pub additions: Vec<GreedyPick>,
}

impl Selection {
    /// Every selected prime: essentials first, then greedy additions
    pub fn selected(&self) -> impl Iterator<Item = &Term> {
        self.essentials
            .iter()
            .chain(self.additions.iter().map(|pick| &pick.term))
    }

    pub fn len(&self) -> usize {
        self.essentials.len() + self.additions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, term: &Term) -> bool {
        self.selected().any(|t| t.equals_pattern(term))
    }
}

/// Select primes until every value of `working_set` is covered.
///
/// Greedy ties are broken by the lowest pattern in string order, so the
/// result does not depend on the order of `primes`. Fails with
/// [`Error::CoverageExhausted`] if some value cannot be covered at all.
pub fn select_implicants(primes: &[Term], working_set: &[u32]) -> Result<Selection> {
    let mut selection = Selection::default();
    let mut covered: BTreeSet<u32> = BTreeSet::new();

    for &value in working_set {
        let mut coverers = primes.iter().filter(|p| p.matches(value));
        let (Some(only), None) = (coverers.next(), coverers.next()) else {
            continue;
        };
        if selection.contains(only) {
            continue;
        }

        debug!("{} is essential (sole cover of {})", only, value);
        covered.extend(working_set.iter().copied().filter(|v| only.matches(*v)));
        selection.essentials.push(only.clone());
    }

    selection.uncovered = working_set
        .iter()
        .copied()
        .filter(|v| !covered.contains(v))
        .collect();
    selection.uncovered.sort_unstable();

    let mut remaining = selection.uncovered.clone();
    while !remaining.is_empty() {
        let best = primes
            .iter()
            .filter(|p| !selection.contains(p))
            .map(|p| (p, remaining.iter().filter(|v| p.matches(**v)).count()))
            .filter(|(_, count)| *count > 0)
            .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| b.pattern().cmp(a.pattern())));

        let Some((prime, count)) = best else {
            warn!("no prime implicant covers {:?}", remaining);
            return Err(Error::CoverageExhausted {
                uncovered: remaining,
            });
        };

        debug!("greedy pick {} covers {} more", prime, count);
        let newly_covered: Vec<u32> = remaining
            .iter()
            .copied()
            .filter(|v| prime.matches(*v))
            .collect();
        remaining.retain(|v| !prime.matches(*v));
        selection.additions.push(GreedyPick {
            term: prime.clone(),
            newly_covered,
        });
    }

    Ok(selection)
}
