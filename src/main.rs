//! qmc-pos CLI - Command-line interface
//!
//! Commands:
//!   solve    - Minimize a function to Product-of-Sums
//!   config   - Show or check a configuration file
//!   schema   - Print JSON schemas of the outputs

mod cli;

use qmc_pos::VERSION;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    cli::util::init_logging(cli::util::verbosity(&args[2..]));

    let result = match args[1].as_str() {
        "solve" => cli::cmd_solve(&args[2..]),
        "config" => cli::cmd_config(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("qmc-pos {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
qmc-pos - Quine-McCluskey minimization to Product-of-Sums

USAGE:
    qmc-pos <COMMAND> [OPTIONS]

COMMANDS:
    solve <minterms> <variables>     Minimize; minterms are comma separated
    config <show|check>              Show or validate a configuration
    schema [solution|config]         Print JSON schema for an output type
    version                          Print version

OPTIONS:
    --stage <name>                   all, grouping, combining, table, essentials, expression
    --json                           Print the full solution as JSON
    --config <file.yaml>             Rendering and limit settings
    --output <file>                  Output file (default: stdout)
    -v, -vv, -vvv                    Log info, debug or trace to stderr

EXAMPLES:
    qmc-pos solve 0,1,2,5,6,7 ABC
    qmc-pos solve 0,4 ABC --stage table
    qmc-pos solve "" AB --json
"#
    );
}
