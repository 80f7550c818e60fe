//! Error handling for boilerplate.
//! Defines the error types and the result alias used throughout the crate.

use std::io;
use thiserror::Error;

use crate::constants::{OPT_NON_INTERACTIVE, OPT_VAR};
use crate::variables::VariableType;

/// Errors raised while embedding another file into a template.
///
/// Travels through minijinja as the source of a function error and is
/// recovered from there by the renderer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    #[error("Cannot read snippet file '{path}': {reason}.")]
    FileNotFound { path: String, reason: String },

    #[error("Snippet marker '{marker}' was not found as an opening and closing pair in '{path}'.")]
    MarkerNotFound { path: String, marker: String },
}

/// Custom error types for boilerplate operations.
///
/// This enum represents every error the variable resolution and template
/// processing stages can surface to their caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Raw YAML text could not be parsed
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors that occur during configuration parsing or validation
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A value is required but prompting is disabled.
    #[error(
        "Variable '{variable}' does not have a default, no value was specified at the command line using the --{opt_var} option, and the --{opt_non_interactive} flag is set, so cannot prompt user for a value.",
        opt_var = OPT_VAR,
        opt_non_interactive = OPT_NON_INTERACTIVE
    )]
    MissingVariableNonInteractiveError { variable: String },

    /// A raw value cannot be coerced into the requested type.
    #[error("Unable to parse '{value}' as a value of type {expected}.")]
    UnparseableValueError { value: String, expected: VariableType },

    /// The value resolved for a variable does not fit its declared type.
    #[error("Value '{value}' for variable '{variable}' cannot be parsed as type {expected}.")]
    TypeParseError {
        variable: String,
        value: String,
        expected: VariableType,
    },

    #[error(transparent)]
    SnippetError(#[from] SnippetError),

    /// Malformed template markup
    #[error("Syntax error in template '{template}': {message}.")]
    TemplateSyntaxError { template: String, message: String },

    /// Any other failure raised while rendering a template
    #[error("Template error in '{template}': {message}.")]
    TemplateError { template: String, message: String },

    /// A source file handed to path mapping is outside the template root.
    #[error("Path '{path}' is not located under the template folder '{root}'.")]
    PathNotUnderRootError { path: String, root: String },

    /// Interactive input could not be read
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// One or more template files failed to process
    #[error("Failed to process {failed} template file(s).")]
    ProcessError { failed: usize },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
