//! Template renderer and rendering functionality for boilerplate.
//! Renders template text with MiniJinja against the resolved variables, with
//! the helper functions of each template passed in explicitly.

use std::error::Error as StdError;
use std::path::Path;

use cruet::Inflector;
use minijinja::{AutoEscape, Environment, ErrorKind};

use crate::constants::MISSING_VALUE;
use crate::error::{Error, Result, SnippetError};
use crate::resolver::ResolvedVariables;
use crate::snippet::SnippetResolver;

/// A helper made available to one template.
#[derive(Debug, Clone)]
pub enum Helper {
    /// `snippet(path[, marker])`, resolving paths against the template's directory.
    Snippet(SnippetResolver),
    /// A string-to-string filter, e.g. `{{ name | snake_case }}`.
    Filter { name: &'static str, filter: fn(String) -> String },
}

/// Helpers registered for a single render call.
#[derive(Debug, Clone, Default)]
pub struct HelperTable {
    helpers: Vec<Helper>,
}

impl HelperTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard helpers, with `snippet` bound to the directory of `template_path`.
    pub fn for_template<P: AsRef<Path>>(template_path: P) -> Self {
        Self::new()
            .with(Helper::Snippet(SnippetResolver::for_template(template_path)))
            .with(Helper::Filter { name: "snake_case", filter: snake_case })
            .with(Helper::Filter { name: "camel_case", filter: camel_case })
            .with(Helper::Filter { name: "pascal_case", filter: pascal_case })
            .with(Helper::Filter { name: "kebab_case", filter: kebab_case })
    }

    pub fn with(mut self, helper: Helper) -> Self {
        self.helpers.push(helper);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Helper> {
        self.helpers.iter()
    }

    fn register(&self, env: &mut Environment<'static>) {
        for helper in &self.helpers {
            match helper {
                Helper::Snippet(resolver) => {
                    let resolver = resolver.clone();
                    env.add_function(
                        "snippet",
                        move |path: String, marker: Option<String>| -> std::result::Result<String, minijinja::Error> {
                            resolver.resolve(&path, marker.as_deref()).map_err(|e| {
                                minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string())
                                    .with_source(e)
                            })
                        },
                    );
                }
                Helper::Filter { name, filter } => env.add_filter(*name, *filter),
            }
        }
    }
}

fn snake_case(value: String) -> String {
    value.to_snake_case()
}

fn camel_case(value: String) -> String {
    value.to_camel_case()
}

fn pascal_case(value: String) -> String {
    value.to_pascal_case()
}

fn kebab_case(value: String) -> String {
    value.to_kebab_case()
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// # Arguments
    /// * `template_id` - Path of the template, used in error messages
    /// * `template` - Template string to render
    /// * `variables` - Resolved variables for interpolation
    /// * `helpers` - Helper functions available to this template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template_id: &Path,
        template: &str,
        variables: &ResolvedVariables,
        helpers: &HelperTable,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with lenient undefined handling.
    ///
    /// Output is never HTML-escaped, trailing newlines are kept, and
    /// undefined or null values render as [`MISSING_VALUE`].
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_formatter(|out, state, value| {
            if value.is_undefined() || value.is_none() {
                out.write_str(MISSING_VALUE).map_err(|_| {
                    minijinja::Error::new(ErrorKind::WriteFailure, "failed to write output")
                })
            } else {
                minijinja::escape_formatter(out, state, value)
            }
        });
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateSyntaxError` if the template markup is malformed
    /// * `Error::SnippetError` if a `snippet` call fails
    /// * `Error::TemplateError` for any other rendering failure
    fn render(
        &self,
        template_id: &Path,
        template: &str,
        variables: &ResolvedVariables,
        helpers: &HelperTable,
    ) -> Result<String> {
        let name = template_id.display().to_string();
        let mut env = self.env.clone();
        helpers.register(&mut env);

        env.add_template_owned(name.clone(), template.to_string())
            .map_err(|e| template_error(&name, e))?;
        let tmpl = env.get_template(&name).map_err(|e| template_error(&name, e))?;

        tmpl.render(variables).map_err(|e| template_error(&name, e))
    }
}

/// Renders `template` with the standard helpers bound to `template_id`.
pub fn render_template<P: AsRef<Path>>(
    template_id: P,
    template: &str,
    variables: &ResolvedVariables,
) -> Result<String> {
    let template_id = template_id.as_ref();
    MiniJinjaRenderer::new().render(
        template_id,
        template,
        variables,
        &HelperTable::for_template(template_id),
    )
}

fn template_error(template: &str, err: minijinja::Error) -> Error {
    if let Some(snippet_error) = find_snippet_error(&err) {
        return Error::SnippetError(snippet_error);
    }

    match err.kind() {
        ErrorKind::SyntaxError => Error::TemplateSyntaxError {
            template: template.to_string(),
            message: err.to_string(),
        },
        _ => Error::TemplateError { template: template.to_string(), message: err.to_string() },
    }
}

fn find_snippet_error(err: &minijinja::Error) -> Option<SnippetError> {
    let mut source = StdError::source(err);
    while let Some(current) = source {
        if let Some(snippet_error) = current.downcast_ref::<SnippetError>() {
            return Some(snippet_error.clone());
        }
        source = current.source();
    }
    None
}
