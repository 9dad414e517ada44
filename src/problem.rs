//! Validated minimization input
//!
//! A problem is a list of minterms together with the ordered variable
//! names. Validation happens once, here, before any stage runs.

use crate::config::{LimitsConfig, MAX_SUPPORTED_VARIABLES};
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::HashSet;

/// Minterms and variable names accepted by the minimizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Problem {
    /// Minterms exactly as supplied (order and duplicates preserved for traces)
    minterms: Vec<u32>,
    /// Variable names; index i names pattern position i
    variables: Vec<char>,
}

impl Problem {
    /// Validate against the default limits
    pub fn new(minterms: Vec<u32>, variables: &str) -> Result<Self> {
        Self::with_limits(minterms, variables, &LimitsConfig::default())
    }

    /// Validate against explicit limits
    pub fn with_limits(
        minterms: Vec<u32>,
        variables: &str,
        limits: &LimitsConfig,
    ) -> Result<Self> {
        let variables: Vec<char> = variables.chars().collect();

        if variables.is_empty() {
            return Err(Error::NoVariables);
        }

        let max = limits.max_variables.min(MAX_SUPPORTED_VARIABLES);
        if variables.len() > max {
            return Err(Error::TooManyVariables {
                count: variables.len(),
                max,
            });
        }

        let mut seen = HashSet::new();
        for &name in &variables {
            if !name.is_alphabetic() {
                return Err(Error::InvalidVariableName(name));
            }
            if !seen.insert(name) {
                return Err(Error::DuplicateVariable(name));
            }
        }

        let domain = 1u32 << variables.len();
        if let Some(&value) = minterms.iter().find(|&&m| m >= domain) {
            return Err(Error::MintermOutOfRange { value, domain });
        }

        Ok(Problem {
            minterms,
            variables,
        })
    }

    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Variable names as a string, e.g. `"ABCD"`
    pub fn variable_string(&self) -> String {
        self.variables.iter().collect()
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Number of values in the domain, `2^num_vars`
    pub fn domain_size(&self) -> u32 {
        1u32 << self.variables.len()
    }

    /// Complement of the minterms within the domain, ascending.
    ///
    /// These are the maxterms the POS is built from. Duplicated minterms are
    /// harmless since the complement is set based.
    pub fn maxterms(&self) -> Vec<u32> {
        let minterms: HashSet<u32> = self.minterms.iter().copied().collect();
        (0..self.domain_size())
            .filter(|v| !minterms.contains(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maxterms_are_complement() {
        let problem = Problem::new(vec![0, 4], "ABC").unwrap();
        assert_eq!(problem.maxterms(), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(problem.domain_size(), 8);
        assert_eq!(problem.num_vars(), 3);
    }

    #[test]
    fn test_duplicates_do_not_break_complement() {
        let problem = Problem::new(vec![1, 1, 2, 1], "AB").unwrap();
        assert_eq!(problem.maxterms(), vec![0, 3]);
        assert_eq!(problem.minterms(), &[1, 1, 2, 1]);
    }

    #[test]
    fn test_full_domain_has_no_maxterms() {
        let problem = Problem::new((0..8).collect::<Vec<_>>(), "ABC").unwrap();
        assert!(problem.maxterms().is_empty());
    }

    #[test]
    fn test_rejects_empty_variables() {
        assert!(matches!(Problem::new(vec![], ""), Err(Error::NoVariables)));
    }

    #[test]
    fn test_rejects_too_many_variables() {
        let err = Problem::new(vec![], "ABCDEFG").unwrap_err();
        assert!(matches!(err, Error::TooManyVariables { count: 7, max: 6 }));
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_raised_limit_allows_more_variables() {
        let limits = LimitsConfig { max_variables: 8 };
        let problem = Problem::with_limits(vec![255], "ABCDEFGH", &limits).unwrap();
        assert_eq!(problem.domain_size(), 256);
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!(matches!(
            Problem::new(vec![], "A1"),
            Err(Error::InvalidVariableName('1'))
        ));
        assert!(matches!(
            Problem::new(vec![], "ABA"),
            Err(Error::DuplicateVariable('A'))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_minterm() {
        let err = Problem::new(vec![0, 8], "ABC").unwrap_err();
        assert!(matches!(
            err,
            Error::MintermOutOfRange {
                value: 8,
                domain: 8
            }
        ));
    }
}
