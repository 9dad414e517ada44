//! Minimization result
//!
//! A [`Solution`] is produced once by [`crate::Minimizer::solve`] and never
//! changes afterwards. The trace accessors are read-only projections of the
//! stored stage artifacts.

use crate::config::RenderConfig;
use crate::cover::Selection;
use crate::minimize::Level;
use crate::problem::Problem;
use crate::render;
use crate::table::CoverageTable;
use crate::term::Term;
use schemars::JsonSchema;
use serde::Serialize;

/// Final result of a minimization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A POS expression of one or more clauses
    Expression {
        clauses: Vec<String>,
        expression: String,
    },
    /// Every input is a minterm; there are no maxterms to minimize
    Tautology,
    /// No implicant was selected for a non-empty working set
    NoImplicants,
}

/// Every artifact of a minimization run
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Solution {
    pub(crate) problem: Problem,
    /// Maxterms, ascending
    pub(crate) working_set: Vec<u32>,
    /// Level 0 is the popcount grouping; later levels are combination passes
    pub(crate) levels: Vec<Level>,
    pub(crate) prime_implicants: Vec<Term>,
    pub(crate) table: CoverageTable,
    pub(crate) selection: Selection,
    pub(crate) outcome: Outcome,
    #[serde(skip)]
    pub(crate) render: RenderConfig,
}

impl Solution {
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Variable names as a string
    pub fn variables(&self) -> String {
        self.problem.variable_string()
    }

    /// Minterms as supplied by the caller
    pub fn minterms(&self) -> &[u32] {
        self.problem.minterms()
    }

    /// Maxterms the minimization ran over
    pub fn working_set(&self) -> &[u32] {
        &self.working_set
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Initial popcount grouping, absent for a tautology
    pub fn grouping(&self) -> Option<&Level> {
        self.levels.first()
    }

    pub fn prime_implicants(&self) -> &[Term] {
        &self.prime_implicants
    }

    pub fn table(&self) -> &CoverageTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected implicants: essentials first, then greedy additions
    pub fn essential_implicants(&self) -> Vec<&Term> {
        self.selection.selected().collect()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_tautology(&self) -> bool {
        matches!(self.outcome, Outcome::Tautology)
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Render a term as a clause with this solution's variables
    pub fn clause(&self, term: &Term) -> String {
        term.to_clause(self.problem.variables(), &self.render)
    }

    /// Final expression, or the tautology / no-implicant marker
    pub fn expression(&self) -> String {
        match &self.outcome {
            Outcome::Expression { expression, .. } => expression.clone(),
            Outcome::Tautology => self.render.tautology.clone(),
            Outcome::NoImplicants => self.render.no_implicants.clone(),
        }
    }

    /// Final line for display, e.g. `POS Expression: (A + B) · (C')`
    pub fn pos_expression(&self) -> String {
        render::final_expression(self)
    }

    /// Grouping stage as text
    pub fn grouping_trace(&self) -> String {
        render::grouping_trace(self)
    }

    /// Combination stage and prime implicant list as text
    pub fn combination_trace(&self) -> String {
        render::combination_trace(self)
    }

    /// Coverage table as text
    pub fn table_trace(&self) -> String {
        self.table.to_text()
    }

    /// Essential selection narrative as text
    pub fn essentials_trace(&self) -> String {
        render::essentials_trace(self)
    }

    /// Every trace followed by the final expression
    pub fn report(&self) -> String {
        render::report(self)
    }
}
