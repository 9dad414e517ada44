// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # qmc-pos: Quine-McCluskey minimization to Product-of-Sums
//!
//! Given the minterms of a boolean function over up to six named variables,
//! qmc-pos computes a minimal Product-of-Sums expression and keeps every
//! intermediate stage for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use qmc_pos::minimize;
//!
//! let solution = minimize(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14], "ABCD")?;
//! assert_eq!(solution.expression(), "(A' + B' + C' + D')");
//!
//! // Stage traces
//! println!("{}", solution.grouping_trace());
//! println!("{}", solution.combination_trace());
//! println!("{}", solution.table_trace());
//! println!("{}", solution.essentials_trace());
//! # Ok::<(), qmc_pos::Error>(())
//! ```
//!
//! ## How it works
//!
//! A POS is built from the maxterms, so the minimizer first complements the
//! minterms within `[0, 2^n)`. Then:
//!
//! ```text
//! maxterms ──► group by popcount ──► combine to fixed point ──► primes
//!                                                               │
//!         POS ◄── essentials + greedy cover ◄── coverage table ◄┘
//! ```
//!
//! Each prime renders as a sum clause: a `0` position is the bare variable,
//! a `1` position the complemented one (`A'`), a `-` position is dropped.
//!
//! ## Outcomes
//!
//! | Outcome | When | Default rendering |
//! |---------|------|-------------------|
//! | [`Outcome::Expression`] | at least one maxterm | `(A + B') · (C)` |
//! | [`Outcome::Tautology`] | every value is a minterm | `1` |
//! | [`Outcome::NoImplicants`] | nothing selected | `No essential prime implicants` |

pub mod config;
pub mod cover;
pub mod error;
pub mod minimize;
pub mod parse;
pub mod problem;
pub mod render;
pub mod solution;
pub mod table;
pub mod term;

// Re-exports
pub use config::{Config, LimitsConfig, RenderConfig, MAX_SUPPORTED_VARIABLES};
pub use cover::{select_implicants, GreedyPick, Selection};
pub use error::{Error, Result};
pub use minimize::{
    combine_level, find_prime_implicants, group_by_popcount, minimize, minimize_with_config,
    CombinationPass, Level, Minimizer,
};
pub use parse::{parse_clause, parse_minterms, parse_variables};
pub use problem::Problem;
pub use solution::{Outcome, Solution};
pub use table::{CoverageRow, CoverageTable};
pub use term::{Bit, Pattern, Term};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
