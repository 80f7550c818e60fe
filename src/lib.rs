//! boilerplate is a template processing system for project scaffolding.
//! It resolves typed variables from the command line, defaults, or the user,
//! and renders every file of a template folder into an output folder.

/// Command-line interface module for the boilerplate application
pub mod cli;

/// Configuration handling for boilerplate templates (boilerplate.yml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the boilerplate application
pub mod error;

/// Logger setup for the binary
pub mod logger;

/// Core template processing orchestration
/// Maps template files to output paths and writes the rendered results
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering with MiniJinja and per-template helpers
pub mod renderer;

/// Resolution of variable values from options, defaults and prompts
pub mod resolver;

/// Whole-file and marker-delimited file embedding
pub mod snippet;

/// Variable declarations, types and typed values
pub mod variables;
