//! User input and interaction handling.
//! Console access goes through the [`Prompter`] trait so variable resolution
//! can run against a terminal or a scripted double.

use crate::error::{Error, Result};
use dialoguer::{console::style, Input};

/// Line-based console capability used while resolving variables.
pub trait Prompter {
    /// Writes a highlighted heading line.
    fn title(&self, text: &str);

    /// Writes a plain line of text.
    fn print(&self, text: &str);

    /// Reads one line of input. An empty answer is returned as an empty string.
    fn read_line(&self, prompt: &str) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn title(&self, text: &str) {
        println!("\n{}", style(text).green().bright());
    }

    fn print(&self, text: &str) {
        println!("{text}");
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
