//! Config and schema CLI commands

use super::util::load_config;
use qmc_pos::*;

pub fn cmd_config(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err("Usage: qmc-pos config <show|check> [--config <file>]".into());
    }

    match args[0].as_str() {
        "show" => {
            let config = load_config(&args[1..])?;
            print!("{}", config.to_yaml()?);
            Ok(())
        }
        "check" => {
            // load_config validates limits and separators
            load_config(&args[1..])?;
            println!("✓ Configuration is valid");
            Ok(())
        }
        cmd => Err(format!("Unknown config subcommand: {}. Use 'show' or 'check'.", cmd).into()),
    }
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: solution, config");
            Ok(())
        }
        "solution" => print_schema::<Solution>(),
        "config" => print_schema::<Config>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
