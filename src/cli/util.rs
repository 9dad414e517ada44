//! CLI utility helpers

use qmc_pos::{Config, Error, Result};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::PathBuf;

/// Flags that consume the following argument
const VALUE_FLAGS: &[&str] = &["--config", "-c", "--stage", "-s", "--output", "-o"];

/// Arguments that are neither flags nor flag values
pub fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        // "" stays positional: it is an empty minterm list
        if arg.starts_with('-') && arg.len() > 1 {
            continue;
        }
        positional.push(arg.as_str());
    }
    positional
}

/// Value following any of `names`
pub fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.iter()
        .position(|arg| names.contains(&arg.as_str()))
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

pub fn has_flag(args: &[String], names: &[&str]) -> bool {
    args.iter().any(|arg| names.contains(&arg.as_str()))
}

/// Load `--config <file>` or fall back to defaults
pub fn load_config(args: &[String]) -> Result<Config> {
    match flag_value(args, &["--config", "-c"]) {
        Some(path) => Config::load(&PathBuf::from(path)),
        None => Ok(Config::default()),
    }
}

/// Count of `-v` occurrences; `-vv` counts twice
pub fn verbosity(args: &[String]) -> usize {
    args.iter()
        .map(|arg| match arg.as_str() {
            "--verbose" => 1,
            a if a.len() > 1 && a.starts_with('-') && a[1..].chars().all(|c| c == 'v') => {
                a.len() - 1
            }
            _ => 0,
        })
        .sum()
}

/// Install the terminal logger on stderr
pub fn init_logging(verbosity: usize) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // A logger may already be installed when embedded; keep the existing one
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Write content to `--output <file>` or stdout
pub fn write_output(args: &[String], content: &str) -> Result<()> {
    match flag_value(args, &["--output", "-o"]) {
        Some(path) => {
            fs::write(path, content).map_err(Error::Io)?;
            log::info!("written to {}", path);
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
