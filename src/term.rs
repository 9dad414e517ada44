//! Terms of the Quine-McCluskey tables
//!
//! A term is a binary pattern over `{0, 1, -}` together with the set of
//! domain values it stands for. A freshly built term covers exactly one
//! value; combining two terms that differ in a single position yields a
//! new term with a wildcard in that position covering both parents.
//!
//! Position 0 of a pattern is the most significant bit and is named by the
//! first variable.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Value of a single position in a pattern.
///
/// Variants are ordered like their characters (`-` < `0` < `1`) so that
/// comparing patterns matches comparing their string forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    /// Position proven irrelevant by a prior combination
    DontCare,
    /// Variable is false
    Zero,
    /// Variable is true
    One,
}

impl Bit {
    /// Parse a character into a Bit
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            '-' => Ok(Bit::DontCare),
            _ => Err(Error::Parse(format!("Invalid character '{}' in pattern", c))),
        }
    }

    /// Convert to character representation
    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::DontCare => '-',
        }
    }

    /// Check if this position carries a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Bit::Zero | Bit::One)
    }
}

/// Bit `shift` of `value`; shifts past the width of `u32` read as 0
fn value_bit(value: u32, shift: usize) -> u32 {
    u32::try_from(shift)
        .ok()
        .and_then(|shift| value.checked_shr(shift))
        .map_or(0, |v| v & 1)
}

/// Fixed-length pattern over `{0, 1, -}`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<Bit>);

impl Pattern {
    /// Zero-padded binary form of `value` at `width` positions.
    ///
    /// `value` must fit in `width` bits; positions above bit 31 read as 0.
    pub fn from_value(value: u32, width: usize) -> Self {
        debug_assert!(
            u32::try_from(width)
                .ok()
                .and_then(|width| value.checked_shr(width))
                .is_none_or(|rest| rest == 0),
            "{} does not fit in {} bits",
            value,
            width
        );
        Pattern(
            (0..width)
                .rev()
                .map(|shift| {
                    if value_bit(value, shift) == 1 {
                        Bit::One
                    } else {
                        Bit::Zero
                    }
                })
                .collect(),
        )
    }

    /// Pattern with every position a wildcard
    pub fn wildcard(width: usize) -> Self {
        Pattern(vec![Bit::DontCare; width])
    }

    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Pattern(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    /// Number of `1` positions
    pub fn popcount(&self) -> usize {
        self.0.iter().filter(|b| **b == Bit::One).count()
    }

    /// Number of `-` positions
    pub fn wildcard_count(&self) -> usize {
        self.0.iter().filter(|b| **b == Bit::DontCare).count()
    }

    /// Number of `0`/`1` positions
    pub fn literal_count(&self) -> usize {
        self.0.iter().filter(|b| b.is_literal()).count()
    }

    /// Position of the single differing character, if the patterns have the
    /// same length and differ in exactly one position. Wildcards compare as
    /// ordinary characters.
    pub fn single_difference(&self, other: &Pattern) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        let mut diff_pos = None;
        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a != b {
                if diff_pos.is_some() {
                    return None;
                }
                diff_pos = Some(i);
            }
        }
        diff_pos
    }

    /// Copy of this pattern with position `pos` replaced by a wildcard
    pub fn with_wildcard(&self, pos: usize) -> Pattern {
        let mut bits = self.0.clone();
        bits[pos] = Bit::DontCare;
        Pattern(bits)
    }

    /// Check whether the bits of `value` agree with every literal position
    pub fn admits(&self, value: u32) -> bool {
        let width = self.len();
        self.0.iter().enumerate().all(|(i, bit)| {
            let set = value_bit(value, width - 1 - i) == 1;
            match bit {
                Bit::DontCare => true,
                Bit::One => set,
                Bit::Zero => !set,
            }
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|b| b.to_char()).collect();
        f.write_str(&s)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits: Result<Vec<Bit>> = s.chars().map(Bit::from_char).collect();
        let pattern = Pattern(bits?);
        if pattern.is_empty() {
            return Err(Error::Parse("Empty pattern".to_string()));
        }
        Ok(pattern)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single value or a merged group of values sharing a pattern.
///
/// Identity is the pattern alone: two terms are equal iff their patterns
/// are identical, regardless of their covered sets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Term {
    /// Binary pattern, e.g. `01-1`
    #[schemars(with = "String")]
    pattern: Pattern,
    /// Domain values this term stands for
    covered: BTreeSet<u32>,
    /// Original value for single-value terms, `None` for combined terms
    source: Option<u32>,
}

impl Term {
    /// Term for a single domain value
    pub fn from_value(value: u32, num_vars: usize) -> Self {
        Term {
            pattern: Pattern::from_value(value, num_vars),
            covered: BTreeSet::from([value]),
            source: Some(value),
        }
    }

    /// Term for a combined pattern and an explicit covered set
    pub fn from_parts(pattern: Pattern, covered: BTreeSet<u32>) -> Self {
        Term {
            pattern,
            covered,
            source: None,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn covered(&self) -> &BTreeSet<u32> {
        &self.covered
    }

    /// Covered values in ascending order
    pub fn covered_values(&self) -> Vec<u32> {
        self.covered.iter().copied().collect()
    }

    pub fn source(&self) -> Option<u32> {
        self.source
    }

    pub fn is_combined(&self) -> bool {
        self.source.is_none()
    }

    /// Grouping key: number of `1` positions
    pub fn popcount(&self) -> usize {
        self.pattern.popcount()
    }

    /// Combine with a term differing in exactly one position.
    ///
    /// The differing position becomes `-` and the covered set is the union
    /// of both parents. Returns `None` when the patterns differ in zero or
    /// more than one position, or have different lengths.
    pub fn combine_with(&self, other: &Term) -> Option<Term> {
        let pos = self.pattern.single_difference(&other.pattern)?;
        Some(Term::from_parts(
            self.pattern.with_wildcard(pos),
            self.covered.union(&other.covered).copied().collect(),
        ))
    }

    /// New term with this pattern and the union of both covered sets.
    ///
    /// Used when the same pattern is produced twice; merging again with the
    /// same term leaves the result unchanged.
    pub fn merged(&self, other: &Term) -> Term {
        Term {
            pattern: self.pattern.clone(),
            covered: self.covered.union(&other.covered).copied().collect(),
            source: self.source,
        }
    }

    /// Membership test on the covered set
    pub fn matches(&self, value: u32) -> bool {
        self.covered.contains(&value)
    }

    /// Pattern identity
    pub fn equals_pattern(&self, other: &Term) -> bool {
        self.pattern == other.pattern
    }

    /// POS literals in position order: `0` is the bare variable, `1` the
    /// complemented one, `-` is skipped.
    pub fn literals(&self, variables: &[char], render: &RenderConfig) -> Vec<String> {
        self.pattern
            .bits()
            .iter()
            .zip(variables.iter())
            .filter_map(|(bit, name)| match bit {
                Bit::Zero => Some(name.to_string()),
                Bit::One => Some(format!("{}{}", name, render.complement_mark)),
                Bit::DontCare => None,
            })
            .collect()
    }

    /// Render as a parenthesised sum clause, e.g. `(A + B' + D)`
    pub fn to_clause(&self, variables: &[char], render: &RenderConfig) -> String {
        let literals = self.literals(variables, render);
        if literals.is_empty() {
            render.empty_clause.clone()
        } else {
            format!("({})", literals.join(&render.sum_separator))
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.equals_pattern(other)
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}
