//! Core template processing orchestration.
//! Maps every file of the template folder to its place in the output folder,
//! rendering text files and copying everything else.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use log::{debug, error, info};
use walkdir::WalkDir;

use crate::config::BoilerplateOptions;
use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::renderer::{HelperTable, TemplateRenderer};
use crate::resolver::ResolvedVariables;

/// What to do with a single template file.
#[derive(Debug, PartialEq)]
pub enum FileOperation {
    /// Copy the file verbatim (binary content)
    Copy { target: PathBuf },
    /// Write rendered content
    Write { target: PathBuf, content: String },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::Copy { target } | FileOperation::Write { target, .. } => target,
        }
    }
}

/// Computes the output path of `file` by replacing the `template_root` prefix
/// with `output_root`.
///
/// Both `file` and `template_root` are made absolute against the current
/// directory and normalized before comparison, so an absolute root matches a
/// relative file and vice versa. The rest of the path is kept as is.
///
/// # Errors
/// * `Error::PathNotUnderRootError` if `file` is not inside `template_root`
/// * `Error::IoError` if the current directory cannot be determined
pub fn out_path<P, Q, R>(file: P, template_root: Q, output_root: R) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let file = absolute_path(file.as_ref())?;
    let template_root = absolute_path(template_root.as_ref())?;

    let relative = file.strip_prefix(&template_root).map_err(|_| Error::PathNotUnderRootError {
        path: file.display().to_string(),
        root: template_root.display().to_string(),
    })?;

    Ok(output_root.as_ref().join(relative))
}

/// Absolute, lexically normalized form of `path`. Symlinks are not resolved.
fn absolute_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

fn is_config_file(template_root: &Path, path: &Path) -> bool {
    CONFIG_FILES.iter().any(|name| path == template_root.join(name))
}

/// Renders (or copies) one template file.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    variables: &'a ResolvedVariables,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        variables: &'a ResolvedVariables,
    ) -> Self {
        Self { renderer, template_root, output_root, variables }
    }

    /// Decides the operation for `source`.
    ///
    /// # Returns
    /// * `Ok(None)` for directories and the template's own config file
    pub fn process(&self, source: &Path) -> Result<Option<FileOperation>> {
        if source.is_dir() || is_config_file(self.template_root, source) {
            debug!("Skipping {}", source.display());
            return Ok(None);
        }

        let target = out_path(source, self.template_root, self.output_root)?;

        match fs::read_to_string(source) {
            Ok(template) => {
                let helpers = HelperTable::for_template(source);
                let content = self.renderer.render(source, &template, self.variables, &helpers)?;
                Ok(Some(FileOperation::Write { target, content }))
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!("{} is not UTF-8 text, copying as is", source.display());
                Ok(Some(FileOperation::Copy { target }))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Carries out `operation`, creating parent directories as needed.
pub fn apply_operation(source: &Path, operation: &FileOperation) -> Result<()> {
    if let Some(parent) = operation.target().parent() {
        fs::create_dir_all(parent)?;
    }
    match operation {
        FileOperation::Copy { target } => fs::copy(source, target).map(|_| ())?,
        FileOperation::Write { target, content } => fs::write(target, content)?,
    }
    Ok(())
}

/// Generates the output folder from the template folder.
///
/// A file that fails is logged and skipped so the remaining files are still
/// generated.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths written, in walk order
///
/// # Errors
/// * `Error::ProcessError` if any file failed
/// * `Error::IoError` if the template folder cannot be walked
pub fn process_template(
    options: &BoilerplateOptions,
    variables: &ResolvedVariables,
    renderer: &dyn TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    let processor =
        Processor::new(renderer, &options.template_folder, &options.output_folder, variables);

    let mut written = Vec::new();
    let mut failed = 0;

    for entry in WalkDir::new(&options.template_folder).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let source = entry.path();

        let result = processor
            .process(source)
            .and_then(|operation| match operation {
                Some(operation) => apply_operation(source, &operation).map(|_| Some(operation)),
                None => Ok(None),
            });

        match result {
            Ok(Some(operation)) => {
                info!("Generated '{}'", operation.target().display());
                written.push(operation.target().to_path_buf());
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to process '{}': {}", source.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Error::ProcessError { failed });
    }
    Ok(written)
}
