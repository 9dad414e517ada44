//! Parsing of user input and rendered clauses
//!
//! Minterm lists are comma separated (`"0, 1, 2, 5"`); blank items are
//! ignored. Variable strings are single letters, upper-cased before use.
//! [`parse_clause`] reads a rendered POS clause back into a pattern.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::term::{Bit, Pattern};
use regex::Regex;
use std::sync::OnceLock;

fn minterm_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("static regex"))
}

fn variables_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+$").expect("static regex"))
}

/// Parse a comma separated list of non-negative integers
pub fn parse_minterms(input: &str) -> Result<Vec<u32>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            if !minterm_item_regex().is_match(item) {
                return Err(Error::Parse(format!("Invalid minterm '{}'", item)));
            }
            item.parse::<u32>()
                .map_err(|e| Error::Parse(format!("Invalid minterm '{}': {}", item, e)))
        })
        .collect()
}

/// Normalize a variable string: trimmed, letters only, upper-cased
pub fn parse_variables(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::NoVariables);
    }
    if !variables_regex().is_match(trimmed) {
        return Err(Error::Parse(format!(
            "Invalid variables '{}': use single letters such as ABCD",
            trimmed
        )));
    }
    Ok(trimmed.to_uppercase())
}

/// Read a rendered clause such as `(A + C')` back into a pattern over
/// `variables`. Variables absent from the clause become wildcards.
pub fn parse_clause(clause: &str, variables: &[char], render: &RenderConfig) -> Result<Pattern> {
    let clause = clause.trim();
    if clause == render.empty_clause {
        return Ok(Pattern::wildcard(variables.len()));
    }

    let inner = clause
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| Error::Parse(format!("Clause '{}' is not parenthesised", clause)))?;

    let separator = render.sum_separator.trim();
    let mut bits = vec![Bit::DontCare; variables.len()];

    for literal in inner.split(separator).map(str::trim) {
        let (name, bit) = match literal.strip_suffix(render.complement_mark.as_str()) {
            Some(name) if !render.complement_mark.is_empty() => (name.trim(), Bit::One),
            _ => (literal, Bit::Zero),
        };

        let mut chars = name.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(Error::Parse(format!("Invalid literal '{}'", literal)));
        };
        let pos = variables
            .iter()
            .position(|v| *v == c)
            .ok_or_else(|| Error::Parse(format!("Unknown variable '{}'", c)))?;

        if bits[pos] != Bit::DontCare {
            return Err(Error::Parse(format!("Variable '{}' appears twice", c)));
        }
        bits[pos] = bit;
    }

    Ok(Pattern::from_bits(bits))
}
