//! boilerplate's main application entry point and orchestration logic.
//! Handles command-line argument parsing and drives variable resolution and
//! template processing.

use boilerplate::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::process_template,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    resolver::get_variables,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds run options from flags and var files
/// 2. Loads boilerplate.yml from the template folder
/// 3. Resolves a value for every declared variable
/// 4. Renders the template folder into the output folder
fn run(args: Args) -> Result<()> {
    let options = args.to_options()?;
    let config = get_config(&options.template_folder)?;

    let prompter = DialoguerPrompter::new();
    let variables = get_variables(&options, &config, &prompter)?;

    let renderer = MiniJinjaRenderer::new();
    let written = process_template(&options, &variables, &renderer)?;

    println!(
        "Generated {} file(s) in {}.",
        written.len(),
        options.output_folder.display()
    );
    Ok(())
}
