//! Quine-McCluskey minimization to Product-of-Sums
//!
//! The minimizer works on the complement of the caller's minterms (the
//! maxterms) and runs four ordered stages:
//!
//! 1. **Complement & group**: build one term per maxterm and bucket the
//!    terms by popcount.
//! 2. **Combine**: repeatedly combine terms of adjacent buckets until a pass
//!    produces nothing; every term never combined is a prime implicant.
//! 3. **Coverage table**: relate every prime to every maxterm.
//! 4. **Select**: take the essential primes, then greedily add primes until
//!    every maxterm is covered.
//!
//! All stages run inside [`Minimizer::solve`], which returns one immutable
//! [`Solution`] holding every intermediate artifact.

use crate::config::{Config, RenderConfig};
use crate::cover::{select_implicants, Selection};
use crate::error::Result;
use crate::problem::Problem;
use crate::solution::{Outcome, Solution};
use crate::table::CoverageTable;
use crate::term::{Pattern, Term};
use log::{debug, trace};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::HashMap;

/// One generation of the combination process.
///
/// Bucket `i` holds the terms whose pattern has `i` ones. Level 0 has
/// `num_vars + 1` buckets; each following level has one bucket fewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Level {
    pub buckets: Vec<Vec<Term>>,
}

impl Level {
    pub fn new(buckets: Vec<Vec<Term>>) -> Self {
        Level { buckets }
    }

    /// Total number of terms across buckets
    pub fn term_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Terms in bucket order, then insertion order
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.buckets.iter().flatten()
    }
}

/// Ordered collection of terms keyed by pattern.
///
/// Inserting a pattern that is already present unions the covered sets
/// into the stored term instead of adding a second one.
#[derive(Debug, Default)]
struct TermSet {
    terms: Vec<Term>,
    index: HashMap<Pattern, usize>,
}

impl TermSet {
    fn insert(&mut self, term: Term) {
        match self.index.get(term.pattern()) {
            Some(&i) => {
                self.terms[i] = self.terms[i].merged(&term);
            }
            None => {
                self.index.insert(term.pattern().clone(), self.terms.len());
                self.terms.push(term);
            }
        }
    }

    fn into_terms(self) -> Vec<Term> {
        self.terms
    }
}

/// Result of a single combination pass over a level
#[derive(Debug)]
pub struct CombinationPass {
    /// Terms produced by combining bucket `i` with bucket `i + 1`
    pub next: Level,
    /// `combined[i][j]` is true when term `j` of bucket `i` took part in at
    /// least one successful combination
    pub combined: Vec<Vec<bool>>,
}

impl CombinationPass {
    /// True when at least one pair combined
    pub fn any_combined(&self) -> bool {
        !self.next.is_empty()
    }

    /// Terms of `level` that combined with nothing during this pass
    pub fn uncombined<'a>(&'a self, level: &'a Level) -> impl Iterator<Item = &'a Term> {
        level
            .buckets
            .iter()
            .zip(self.combined.iter())
            .flat_map(|(bucket, flags)| {
                bucket
                    .iter()
                    .zip(flags.iter())
                    .filter(|(_, combined)| !**combined)
                    .map(|(term, _)| term)
            })
    }
}

/// Stage 1: one term per value, bucketed by popcount
pub fn group_by_popcount(values: &[u32], num_vars: usize) -> Level {
    let mut buckets = vec![Vec::new(); num_vars + 1];
    for &value in values {
        let term = Term::from_value(value, num_vars);
        buckets[term.popcount()].push(term);
    }
    Level::new(buckets)
}

/// Combine every term of each bucket with every term of the next bucket
pub fn combine_level(level: &Level) -> CombinationPass {
    let mut combined: Vec<Vec<bool>> = level
        .buckets
        .iter()
        .map(|bucket| vec![false; bucket.len()])
        .collect();
    let mut next = Vec::with_capacity(level.buckets.len().saturating_sub(1));

    for i in 0..level.buckets.len().saturating_sub(1) {
        let mut bucket = TermSet::default();

        for (a, lower) in level.buckets[i].iter().enumerate() {
            for (b, upper) in level.buckets[i + 1].iter().enumerate() {
                if let Some(term) = lower.combine_with(upper) {
                    trace!("combine {} + {} -> {}", lower, upper, term);
                    combined[i][a] = true;
                    combined[i + 1][b] = true;
                    bucket.insert(term);
                }
            }
        }

        next.push(bucket.into_terms());
    }

    CombinationPass {
        next: Level::new(next),
        combined,
    }
}

/// Stage 2: combine to a fixed point.
///
/// Returns every level that was produced (level 0 first) and the prime
/// implicants, deduplicated by pattern, in the order they were found.
pub fn find_prime_implicants(initial: Level) -> (Vec<Level>, Vec<Term>) {
    let mut levels = vec![initial];
    let mut primes = TermSet::default();

    loop {
        let Some(current) = levels.last() else {
            break;
        };
        let pass = combine_level(current);

        for term in pass.uncombined(current) {
            primes.insert(term.clone());
        }

        if !pass.any_combined() {
            break;
        }

        debug!(
            "level {}: {} terms",
            levels.len(),
            pass.next.term_count()
        );
        levels.push(pass.next);
    }

    let primes = primes.into_terms();
    debug!(
        "{} prime implicants after {} levels",
        primes.len(),
        levels.len()
    );
    (levels, primes)
}

/// POS product of the selected clauses
pub fn product_expression(clauses: &[String], render: &RenderConfig) -> String {
    clauses.join(&render.product_separator)
}

/// Runs the four minimization stages over a validated problem
#[derive(Debug, Clone)]
pub struct Minimizer {
    problem: Problem,
    config: Config,
}

impl Minimizer {
    /// Create a minimizer with the default configuration
    pub fn new(problem: Problem) -> Self {
        Self::with_config(problem, Config::default())
    }

    pub fn with_config(problem: Problem, config: Config) -> Self {
        Minimizer { problem, config }
    }

    /// Run every stage and return the complete result.
    ///
    /// Consumes the minimizer; solving again means building a new one.
    pub fn solve(self) -> Result<Solution> {
        let Minimizer { problem, config } = self;
        let render = config.render;
        let variables = problem.variables().to_vec();
        let working_set = problem.maxterms();

        debug!(
            "{} variables, {} minterms, {} maxterms",
            problem.num_vars(),
            problem.minterms().len(),
            working_set.len()
        );

        if working_set.is_empty() {
            debug!("every value is a minterm: tautology");
            return Ok(Solution {
                problem,
                working_set,
                levels: Vec::new(),
                prime_implicants: Vec::new(),
                table: CoverageTable::default(),
                selection: Selection::default(),
                outcome: Outcome::Tautology,
                render,
            });
        }

        let grouped = group_by_popcount(&working_set, problem.num_vars());
        debug!(
            "grouped into buckets of sizes {:?}",
            grouped.buckets.iter().map(Vec::len).collect::<Vec<_>>()
        );

        let (levels, primes) = find_prime_implicants(grouped);
        let table = CoverageTable::build(&primes, &working_set, &variables, &render);
        let selection = select_implicants(&primes, &working_set)?;

        let outcome = if selection.is_empty() {
            Outcome::NoImplicants
        } else {
            let clauses: Vec<String> = selection
                .selected()
                .map(|term| term.to_clause(&variables, &render))
                .collect();
            let expression = product_expression(&clauses, &render);
            Outcome::Expression {
                clauses,
                expression,
            }
        };

        Ok(Solution {
            problem,
            working_set,
            levels,
            prime_implicants: primes,
            table,
            selection,
            outcome,
            render,
        })
    }
}

/// Minimize with the default configuration
pub fn minimize(minterms: &[u32], variables: &str) -> Result<Solution> {
    let problem = Problem::new(minterms.to_vec(), variables)?;
    Minimizer::new(problem).solve()
}

/// Minimize with an explicit configuration
pub fn minimize_with_config(minterms: &[u32], variables: &str, config: &Config) -> Result<Solution> {
    let problem = Problem::with_limits(minterms.to_vec(), variables, &config.limits)?;
    Minimizer::with_config(problem, config.clone()).solve()
}
