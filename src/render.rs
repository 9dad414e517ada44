//! Text projections of a solution
//!
//! Every function here formats data already stored in a [`Solution`];
//! nothing is recomputed.

use crate::solution::{Outcome, Solution};
use crate::term::Term;
use std::fmt::Write;

fn join_values(values: &[u32]) -> String {
    if values.is_empty() {
        return "(none)".to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn covered_list(term: &Term) -> String {
    join_values(&term.covered_values())
}

/// Original minterms, the complemented working set and the popcount groups
pub fn grouping_trace(solution: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Original minterms: {}", join_values(solution.minterms()));
    let _ = writeln!(out, "Using complement: {}", join_values(solution.working_set()));
    out.push('\n');

    let Some(grouping) = solution.grouping() else {
        let _ = writeln!(out, "Every input is a minterm: the function is a tautology");
        return out;
    };

    for (ones, bucket) in grouping.buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let _ = writeln!(out, "Group {} ({} ones):", ones, ones);
        for term in bucket {
            let value = term
                .source()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(out, "  {} = {}", value, term.pattern());
        }
        out.push('\n');
    }

    out
}

/// Every combination level followed by the prime implicant list
pub fn combination_trace(solution: &Solution) -> String {
    let mut out = String::new();

    if solution.levels().is_empty() {
        let _ = writeln!(out, "No maxterms to combine");
        return out;
    }

    if solution.levels().len() == 1 {
        let _ = writeln!(out, "No more possible pairings");
        out.push('\n');
    }

    for (iteration, level) in solution.levels().iter().enumerate().skip(1) {
        let _ = writeln!(out, "Iteration {}:", iteration);
        for (group, bucket) in level.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            let _ = writeln!(out, "  Group {}:", group);
            for term in bucket {
                let _ = writeln!(out, "    {} (from: {})", term.pattern(), covered_list(term));
            }
            out.push('\n');
        }
    }

    let _ = writeln!(out, "Prime Implicants:");
    for prime in solution.prime_implicants() {
        let _ = writeln!(
            out,
            "  {} = {} (covers: {})",
            prime.pattern(),
            solution.clause(prime),
            covered_list(prime)
        );
    }

    out
}

/// Essential primes, the uncovered remainder, greedy additions and the
/// final selection
pub fn essentials_trace(solution: &Solution) -> String {
    let mut out = String::new();

    if solution.is_tautology() {
        let _ = writeln!(out, "No maxterms to cover");
        return out;
    }

    let selection = solution.selection();

    let _ = writeln!(out, "Essential Prime Implicants:");
    if selection.essentials.is_empty() {
        let _ = writeln!(out, "No essential prime implicants found");
    } else {
        for term in &selection.essentials {
            let _ = writeln!(out, "- {}", solution.clause(term));
        }
    }

    if !selection.uncovered.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "Not all minterms are covered by essential prime implicants"
        );
        let _ = writeln!(out, "Uncovered minterms: {}", join_values(&selection.uncovered));
        for pick in &selection.additions {
            let _ = writeln!(
                out,
                "Added additional prime implicant: {} (covers: {})",
                solution.clause(&pick.term),
                join_values(&pick.newly_covered)
            );
        }
    }

    out.push('\n');
    let _ = writeln!(out, "Final Prime Implicants:");
    for term in selection.selected() {
        let _ = writeln!(out, "- {}", solution.clause(term));
    }

    out
}

/// Final line naming the outcome
pub fn final_expression(solution: &Solution) -> String {
    let render = solution.render_config();
    match solution.outcome() {
        Outcome::Expression { expression, .. } => format!("POS Expression: {}", expression),
        Outcome::Tautology => format!("Tautology: {}", render.tautology),
        Outcome::NoImplicants => render.no_implicants.clone(),
    }
}

/// All stage traces in order, followed by the final expression
pub fn report(solution: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Variables: {}", solution.variables());
    out.push('\n');

    let _ = writeln!(out, "== Step 1: Grouping ==");
    out.push_str(&grouping_trace(solution));
    let _ = writeln!(out, "== Step 2: Combining ==");
    out.push_str(&combination_trace(solution));
    out.push('\n');
    let _ = writeln!(out, "== Step 3: Prime Implicant Table ==");
    if solution.table().is_empty() {
        let _ = writeln!(out, "(empty)");
    } else {
        out.push_str(&solution.table_trace());
    }
    out.push('\n');
    let _ = writeln!(out, "== Step 4: Essential Prime Implicants ==");
    out.push_str(&essentials_trace(solution));
    out.push('\n');
    let _ = writeln!(out, "{}", final_expression(solution));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::minimize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grouping_trace() {
        let solution = minimize(&[0, 4], "ABC").unwrap();
        let expected = "\
Original minterms: 0, 4
Using complement: 1, 2, 3, 5, 6, 7

Group 1 (1 ones):
  1 = 001
  2 = 010

Group 2 (2 ones):
  3 = 011
  5 = 101
  6 = 110

Group 3 (3 ones):
  7 = 111

";
        assert_eq!(grouping_trace(&solution), expected);
    }

    #[test]
    fn test_tautology_traces() {
        let solution = minimize(&[0, 1], "A").unwrap();
        assert_eq!(
            grouping_trace(&solution),
            "Original minterms: 0, 1\nUsing complement: (none)\n\nEvery input is a minterm: the function is a tautology\n"
        );
        assert_eq!(combination_trace(&solution), "No maxterms to combine\n");
        assert_eq!(essentials_trace(&solution), "No maxterms to cover\n");
        assert_eq!(final_expression(&solution), "Tautology: 1");
    }

    #[test]
    fn test_no_pairing_trace() {
        let solution = minimize(&[0, 3], "AB").unwrap();
        let expected = "\
No more possible pairings

Prime Implicants:
  01 = (A + B') (covers: 1)
  10 = (A' + B) (covers: 2)
";
        assert_eq!(combination_trace(&solution), expected);
    }

    #[test]
    fn test_essentials_trace_with_greedy() {
        // maxterms 0, 1, 3, 7, 6, 4 form a cycle: each has two covering primes
        let solution = minimize(&[2, 5], "ABC").unwrap();
        let trace = essentials_trace(&solution);
        assert!(trace.starts_with("Essential Prime Implicants:\nNo essential prime implicants found\n"));
        assert!(trace.contains("Uncovered minterms: 0, 1, 3, 4, 6, 7\n"));
        assert!(trace.contains("Added additional prime implicant: "));
        assert!(trace.contains("\nFinal Prime Implicants:\n"));
    }
}
