//! Configuration handling for boilerplate templates.
//! Loads `boilerplate.yml` from a template folder into the variable and
//! dependency declarations the resolver works from.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::variables::Variable;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Another template whose variables are resolved alongside this one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dependency {
    pub name: String,
    pub template_folder: PathBuf,
    pub output_folder: PathBuf,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Dependency {
    /// Variables of this dependency, namespaced by the dependency name.
    pub fn namespaced_variables(&self) -> Vec<Variable> {
        self.variables
            .iter()
            .cloned()
            .map(|variable| variable.with_namespace(self.name.clone()))
            .collect()
    }
}

/// In-memory form of a `boilerplate.yml` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoilerplateConfig {
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl BoilerplateConfig {
    /// Parses and validates configuration content.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the YAML is malformed, a variable has no
    ///   name, or a default does not fit its declared type
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a template without variables.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let dependency_variables = self.dependencies.iter().flat_map(|d| d.namespaced_variables());
        for variable in self.variables.iter().cloned().chain(dependency_variables) {
            if variable.name.trim().is_empty() {
                return Err(Error::ConfigError("every variable must have a name".to_string()));
            }
            if let Some(default) = &variable.default {
                variable.variable_type.parse_raw(default).map_err(|e| {
                    Error::ConfigError(format!(
                        "invalid default for variable '{}': {}",
                        variable.full_name(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }
}

/// Options controlling a single scaffolding run.
#[derive(Debug, Clone, Default)]
pub struct BoilerplateOptions {
    pub template_folder: PathBuf,
    pub output_folder: PathBuf,
    pub non_interactive: bool,
    /// Values supplied up front, keyed by unqualified variable name
    pub vars: IndexMap<String, serde_json::Value>,
}

/// Locates the config file inside a template folder.
///
/// # Returns
/// * `Option<PathBuf>` - Path of the first existing file from [`CONFIG_FILES`]
pub fn find_config_file<P: AsRef<Path>>(template_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| template_dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Loads the configuration of a template folder.
///
/// A template folder without a config file yields an empty configuration.
///
/// # Errors
/// * `Error::IoError` if the config file exists but cannot be read
/// * `Error::ConfigError` if its content is invalid
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<BoilerplateConfig> {
    match find_config_file(&template_dir) {
        Some(config_path) => {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            BoilerplateConfig::parse(&content)
        }
        None => {
            debug!(
                "No configuration file found in {} (tried: {})",
                template_dir.as_ref().display(),
                CONFIG_FILES.join(", ")
            );
            Ok(BoilerplateConfig::default())
        }
    }
}
