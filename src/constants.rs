//! Common constants used throughout boilerplate.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 2] = ["boilerplate.yml", "boilerplate.yaml"];

/// Marker keyword delimiting a named snippet region
pub const SNIPPET_MARKER: &str = "boilerplate-snippet";

/// Rendered in place of variables that have no value
pub const MISSING_VALUE: &str = "<no value>";

/// Command line option names, referenced by user-facing error messages
pub const OPT_VAR: &str = "var";
pub const OPT_VAR_FILE: &str = "var-file";
pub const OPT_NON_INTERACTIVE: &str = "non-interactive";
