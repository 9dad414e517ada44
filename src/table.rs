//! Prime implicant coverage table
//!
//! Rows are prime implicants in the order they were found, columns are the
//! maxterms in ascending order. A cell is marked when the prime covers the
//! maxterm.

use crate::config::RenderConfig;
use crate::term::Term;
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt::Write;

const HEADER_LABEL: &str = "Prime Implicant";
pub const MIN_CLAUSE_WIDTH: usize = 22;
pub const MIN_CELL_WIDTH: usize = 4;

/// One prime implicant row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CoverageRow {
    /// Binary pattern of the prime
    pub pattern: String,
    /// Rendered POS clause
    pub clause: String,
    /// Maxterms covered by the prime, ascending
    pub covered: Vec<u32>,
    /// One flag per column
    pub marks: Vec<bool>,
}

/// Dense prime x maxterm coverage relation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CoverageTable {
    /// Maxterms, ascending
    pub columns: Vec<u32>,
    pub rows: Vec<CoverageRow>,
}

impl CoverageTable {
    /// Build the table for `primes` against `working_set`
    pub fn build(
        primes: &[Term],
        working_set: &[u32],
        variables: &[char],
        render: &RenderConfig,
    ) -> Self {
        let mut columns = working_set.to_vec();
        columns.sort_unstable();

        let rows = primes
            .iter()
            .map(|prime| CoverageRow {
                pattern: prime.pattern().to_string(),
                clause: prime.to_clause(variables, render),
                covered: prime.covered_values(),
                marks: columns.iter().map(|v| prime.matches(*v)).collect(),
            })
            .collect();

        CoverageTable { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check whether row `row` covers the maxterm `value`
    pub fn covers(&self, row: usize, value: u32) -> bool {
        match (self.rows.get(row), self.columns.binary_search(&value)) {
            (Some(r), Ok(col)) => r.marks[col],
            _ => false,
        }
    }

    /// Indices of the rows covering `value`
    pub fn coverers(&self, value: u32) -> Vec<usize> {
        (0..self.rows.len())
            .filter(|&row| self.covers(row, value))
            .collect()
    }

    /// Render as a text table.
    ///
    /// The clause column is as wide as the longest clause (at least
    /// [`MIN_CLAUSE_WIDTH`]); every value column is as wide as the widest
    /// maxterm plus a gap (at least [`MIN_CELL_WIDTH`]).
    pub fn to_text(&self) -> String {
        let clause_width = self
            .rows
            .iter()
            .map(|row| row.clause.chars().count())
            .chain([HEADER_LABEL.len(), MIN_CLAUSE_WIDTH])
            .max()
            .unwrap_or(MIN_CLAUSE_WIDTH);
        let cell_width = self
            .columns
            .iter()
            .map(|c| c.to_string().len() + 1)
            .chain([MIN_CELL_WIDTH])
            .max()
            .unwrap_or(MIN_CELL_WIDTH);

        let mut out = String::new();

        let header: String = self
            .columns
            .iter()
            .map(|c| format!("{:<width$}", c, width = cell_width))
            .collect();
        let _ = writeln!(
            out,
            "{}",
            format!("{:<width$} | {}", HEADER_LABEL, header, width = clause_width).trim_end()
        );
        let _ = writeln!(
            out,
            "{}-|-{}",
            "-".repeat(clause_width),
            "-".repeat(self.columns.len() * cell_width)
        );

        for row in &self.rows {
            let cells: String = row
                .marks
                .iter()
                .map(|m| format!("{:<width$}", if *m { "X" } else { "" }, width = cell_width))
                .collect();
            let line = format!("{:<width$} | {}", row.clause, cells, width = clause_width);
            let _ = writeln!(out, "{}", line.trim_end());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> CoverageTable {
        let primes = vec![
            Term::from_parts("0-".parse().unwrap(), [0, 1].into_iter().collect()),
            Term::from_value(3, 2),
        ];
        let vars: Vec<char> = "AB".chars().collect();
        CoverageTable::build(&primes, &[3, 0, 1], &vars, &RenderConfig::default())
    }

    #[test]
    fn test_build_sorts_columns() {
        let table = sample();
        assert_eq!(table.columns, vec![0, 1, 3]);
        assert_eq!(table.rows[0].clause, "(A)");
        assert_eq!(table.rows[0].marks, vec![true, true, false]);
        assert_eq!(table.rows[1].clause, "(A' + B')");
        assert_eq!(table.rows[1].covered, vec![3]);
    }

    #[test]
    fn test_coverers() {
        let table = sample();
        assert_eq!(table.coverers(0), vec![0]);
        assert_eq!(table.coverers(3), vec![1]);
        assert!(table.coverers(2).is_empty());
        assert!(!table.covers(5, 0));
    }

    #[test]
    fn test_text_rendering() {
        let expected = "\
Prime Implicant        | 0   1   3
-----------------------|-------------
(A)                    | X   X
(A' + B')              |         X
";
        assert_eq!(sample().to_text(), expected);
    }

    /// Column of every `|` and of every `X` under its header label
    fn assert_aligned(text: &str, table: &CoverageTable) {
        let lines: Vec<&str> = text.lines().collect();
        let bar = lines[0].find('|').unwrap();
        for line in &lines {
            assert_eq!(line.find('|'), Some(bar), "misaligned: {:?}", line);
        }

        let label_starts: Vec<usize> = table
            .columns
            .iter()
            .map(|c| lines[0].find(&c.to_string()).unwrap())
            .collect();
        for (row, line) in table.rows.iter().zip(&lines[2..]) {
            for (marked, start) in row.marks.iter().zip(&label_starts) {
                assert_eq!(line.get(*start..*start + 1) == Some("X"), *marked, "row {:?}", line);
            }
        }
    }

    #[test]
    fn test_long_clauses_widen_the_column() {
        let vars: Vec<char> = "ABCDE".chars().collect();
        let primes = vec![Term::from_value(0, 5), Term::from_value(31, 5)];
        let table = CoverageTable::build(&primes, &[0, 31], &vars, &RenderConfig::default());

        let expected = "\
Prime Implicant          | 0   31
-------------------------|---------
(A + B + C + D + E)      | X
(A' + B' + C' + D' + E') |     X
";
        let text = table.to_text();
        assert_eq!(text, expected);
        assert_aligned(&text, &table);
    }

    #[test]
    fn test_wide_values_widen_the_cells() {
        let vars: Vec<char> = "ABCDEFGHIJ".chars().collect();
        let primes = vec![Term::from_value(1000, 10), Term::from_value(7, 10)];
        let table = CoverageTable::build(&primes, &[1000, 7], &vars, &RenderConfig::default());

        let text = table.to_text();
        assert!(text.starts_with("Prime Implicant"));
        assert!(text.lines().next().unwrap().ends_with("7    1000"));
        assert_aligned(&text, &table);
    }
}
