//! Command-line interface implementation for boilerplate.
//! Provides argument parsing and turns the parsed flags into run options.

use clap::{error::ErrorKind, CommandFactory, Parser};
use indexmap::IndexMap;
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::BoilerplateOptions;
use crate::constants::{OPT_NON_INTERACTIVE, OPT_VAR, OPT_VAR_FILE};
use crate::error::{Error, Result};

/// Command-line arguments structure for boilerplate.
#[derive(Parser, Debug)]
#[command(author, version, about = "boilerplate: generate projects from templates with typed variables", long_about = None)]
pub struct Args {
    /// Folder containing the template files and boilerplate.yml
    #[arg(long, value_name = "FOLDER")]
    pub template_folder: PathBuf,

    /// Folder the generated files are written to
    #[arg(long, value_name = "FOLDER")]
    pub output_folder: PathBuf,

    /// Variable value in NAME=VALUE form. May be repeated.
    #[arg(long = OPT_VAR, value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// YAML file of variable values. May be repeated; --var takes precedence.
    #[arg(long = OPT_VAR_FILE, value_name = "FILE")]
    pub var_files: Vec<PathBuf>,

    /// Never prompt; variables without a value or default are an error
    #[arg(long = OPT_NON_INTERACTIVE)]
    pub non_interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Splits a `NAME=VALUE` pair on the first `=`.
pub fn parse_var(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid variable '{s}', expected NAME=VALUE")),
    }
}

/// Reads a YAML mapping of variable names to values.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if the content is not a mapping
pub fn load_var_file<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, serde_json::Value>> {
    let path = path.as_ref();
    debug!("Loading variables from {}", path.display());

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(IndexMap::new());
    }
    serde_yaml::from_str(&content).map_err(|e| {
        Error::ConfigError(format!("invalid var file '{}': {}", path.display(), e))
    })
}

impl Args {
    /// Builds run options, merging var files first and `--var` values last.
    pub fn to_options(&self) -> Result<BoilerplateOptions> {
        let mut vars = IndexMap::new();
        for var_file in &self.var_files {
            vars.extend(load_var_file(var_file)?);
        }
        for (name, value) in &self.vars {
            vars.insert(name.clone(), serde_json::Value::String(value.clone()));
        }

        Ok(BoilerplateOptions {
            template_folder: self.template_folder.clone(),
            output_folder: self.output_folder.clone(),
            non_interactive: self.non_interactive,
            vars,
        })
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
