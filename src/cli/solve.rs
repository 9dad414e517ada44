//! Solve command

use super::util::{flag_value, has_flag, load_config, positional_args, write_output};
use qmc_pos::*;

/// Which part of the solution to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    All,
    Grouping,
    Combining,
    Table,
    Essentials,
    Expression,
}

impl Stage {
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "all" => Ok(Stage::All),
            "grouping" | "groups" | "1" => Ok(Stage::Grouping),
            "combining" | "combine" | "2" => Ok(Stage::Combining),
            "table" | "3" => Ok(Stage::Table),
            "essentials" | "essential" | "4" => Ok(Stage::Essentials),
            "expression" | "pos" => Ok(Stage::Expression),
            other => Err(format!(
                "Unknown stage: {}. Use all, grouping, combining, table, essentials or expression.",
                other
            )
            .into()),
        }
    }

    /// Text projection of `solution` for this stage
    pub fn render(self, solution: &Solution) -> String {
        match self {
            Stage::All => solution.report(),
            Stage::Grouping => solution.grouping_trace(),
            Stage::Combining => solution.combination_trace(),
            Stage::Table => solution.table_trace(),
            Stage::Essentials => solution.essentials_trace(),
            Stage::Expression => format!("{}\n", solution.pos_expression()),
        }
    }
}

pub fn cmd_solve(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let (minterms, variables) = match positional.as_slice() {
        [minterms, variables] => (*minterms, *variables),
        _ => {
            return Err(
                "Usage: qmc-pos solve <minterms> <variables> [--stage <name>] [--json] [--config <file>]"
                    .into(),
            )
        }
    };

    let config = load_config(args)?;
    let stage = match flag_value(args, &["--stage", "-s"]) {
        Some(name) => Stage::parse(name)?,
        None => Stage::All,
    };

    let minterms = parse_minterms(minterms)?;
    let variables = parse_variables(variables)?;
    log::info!("minimizing {:?} over {}", minterms, variables);

    let solution = minimize_with_config(&minterms, &variables, &config)?;

    let output = if has_flag(args, &["--json"]) {
        let mut json = serde_json::to_string_pretty(&solution)?;
        json.push('\n');
        json
    } else {
        stage.render(&solution)
    };

    write_output(args, &output)
}
