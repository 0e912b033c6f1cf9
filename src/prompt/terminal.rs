//! Interactive terminal prompt
//!
//! Arrow-key selection of the dialog actions. Esc or `q` closes the dialog, which
//! counts as Cancel.

use crate::prompt::console::{write_notice, ConsolePrompt};
use crate::prompt::{ModalPrompt, PromptChoice, PromptError, PromptSpec, WindowOwner};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::{self, IsTerminal};
use std::sync::Arc;

/// Modal prompt drawn with `dialoguer` on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectPrompt;

impl ModalPrompt for SelectPrompt {
    fn show(&self, owner: Option<&WindowOwner>, spec: &PromptSpec) -> Result<PromptChoice, PromptError> {
        if spec.actions.is_empty() {
            return Err(PromptError::Unavailable("prompt has no actions".to_string()));
        }
        if let Some(owner) = owner {
            tracing::debug!("Showing '{}' over {}", spec.title, owner.name);
        }

        write_notice(&mut io::stderr(), spec)?;

        let labels: Vec<&str> = spec.actions.iter().map(|a| a.label.as_str()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose an action (Esc closes)")
            .items(&labels)
            .default(0)
            .interact_opt();

        match selection {
            Ok(index) => Ok(choice_for_selection(spec, index)),
            Err(e) => {
                tracing::warn!("Terminal closed while the prompt was open: {}", e);
                Ok(PromptChoice::Cancel)
            }
        }
    }
}

/// Map a selected row to its action; no selection is Cancel.
fn choice_for_selection(spec: &PromptSpec, index: Option<usize>) -> PromptChoice {
    index
        .and_then(|i| spec.actions.get(i))
        .map(|action| action.choice)
        .unwrap_or(PromptChoice::Cancel)
}

/// Prompt for the process terminal
///
/// Arrow-key selection when stdin and stderr are a terminal, line input otherwise.
pub fn stdio_prompt() -> Arc<dyn ModalPrompt> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        Arc::new(SelectPrompt)
    } else {
        tracing::debug!("No terminal attached, using line prompt");
        Arc::new(ConsolePrompt::stdio())
    }
}
