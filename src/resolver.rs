//! Variable resolution.
//! Picks a value for every declared variable from the command line, its
//! default, or the user, and coerces it into the declared type.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::config::{BoilerplateConfig, BoilerplateOptions};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::variables::{describe_raw, parse_yaml_string, Value, Variable};

/// Resolved values keyed by unqualified variable name.
pub type ResolvedVariables = BTreeMap<String, Value>;

/// Resolves a value for each variable declared by `config` and its dependencies.
///
/// Values passed in `options.vars` are kept as they are and take precedence
/// over defaults and prompting. Variables are processed in declaration order:
/// the config's own variables first, then each dependency's.
///
/// # Errors
/// * `Error::MissingVariableNonInteractiveError` if a value is needed but prompting is disabled
/// * `Error::TypeParseError` if a value does not fit the declared type
/// * `Error::PromptError` if reading user input fails
pub fn get_variables(
    options: &BoilerplateOptions,
    config: &BoilerplateConfig,
    prompter: &dyn Prompter,
) -> Result<ResolvedVariables> {
    let mut resolved: ResolvedVariables =
        options.vars.iter().map(|(name, raw)| (name.clone(), Value::infer(raw))).collect();

    for variable in all_variables(config) {
        let raw = match resolved.get(&variable.name) {
            Some(existing) => match options.vars.get(&variable.name) {
                Some(raw) => raw.clone(),
                None => {
                    warn!(
                        "Variable '{}' reuses the value already resolved under the name '{}'",
                        variable.full_name(),
                        variable.name
                    );
                    existing.to_raw()
                }
            },
            None => get_variable(&variable, options, prompter)?,
        };

        let value = variable.variable_type.parse_raw(&raw).map_err(|_| Error::TypeParseError {
            variable: variable.full_name(),
            value: describe_raw(&raw),
            expected: variable.variable_type,
        })?;

        debug!("Resolved variable '{}' to {}", variable.full_name(), value);
        resolved.insert(variable.name.clone(), value);
    }

    Ok(resolved)
}

/// Variables of the config followed by the namespaced variables of each dependency.
pub fn all_variables(config: &BoilerplateConfig) -> Vec<Variable> {
    let mut variables = config.variables.clone();
    for dependency in &config.dependencies {
        variables.extend(dependency.namespaced_variables());
    }
    variables
}

fn get_variable(
    variable: &Variable,
    options: &BoilerplateOptions,
    prompter: &dyn Prompter,
) -> Result<serde_json::Value> {
    if let Some(raw) = options.vars.get(&variable.name) {
        info!(
            "Using value specified via command line options for variable '{}': {}",
            variable.full_name(),
            describe_raw(raw)
        );
        return Ok(raw.clone());
    }

    match (&variable.default, options.non_interactive) {
        (Some(default), true) => {
            info!(
                "Using default value for variable '{}': {}",
                variable.full_name(),
                describe_raw(default)
            );
            Ok(default.clone())
        }
        (None, true) => Err(Error::MissingVariableNonInteractiveError {
            variable: variable.full_name(),
        }),
        (_, false) => get_variable_from_user(variable, prompter),
    }
}

/// Prompts for a value, falling back to the default on an empty answer.
fn get_variable_from_user(
    variable: &Variable,
    prompter: &dyn Prompter,
) -> Result<serde_json::Value> {
    prompter.title(&variable.full_name());
    if !variable.description.is_empty() {
        prompter.print(&format!("  {}", variable.description));
    }
    if let Some(default) = &variable.default {
        prompter.print(&format!("  (default: {})", describe_raw(default)));
    }
    let example = match &variable.example {
        Some(example) => describe_raw(example),
        None => variable.variable_type.example().to_string(),
    };
    prompter.print(&format!("  (type: {}, example: {})", variable.variable_type, example));
    prompter.print("");

    let answer = prompter.read_line("  Enter a value")?;
    if answer.is_empty() {
        // An empty answer cannot ask for an empty string; it always means the default.
        let default = variable.default.clone().unwrap_or(serde_json::Value::Null);
        info!(
            "Using default value for variable '{}': {}",
            variable.full_name(),
            describe_raw(&default)
        );
        return Ok(default);
    }

    parse_yaml_string(&answer)
}
