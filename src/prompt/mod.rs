//! Modal prompt seam
//!
//! The host facility that shows a blocking dialog with custom actions and a
//! rich-text body. Rendering is left to the implementation.

pub mod console;
pub mod terminal;

use crate::types::config::GateConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Window that owns a modal prompt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOwner {
    pub name: String,
}

impl WindowOwner {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Icon shown beside the message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptIcon {
    Warning,
}

/// Terminal action a user can pick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptChoice {
    /// The OK action
    Accept,
    Decline,
    /// Cancel button or window close
    Cancel,
}

/// A button on the prompt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAction {
    pub choice: PromptChoice,
    pub label: String,
}

/// Everything a prompt needs to render itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub title: String,
    pub icon: PromptIcon,
    /// Rich-text (HTML subset) body, not editable
    pub body: String,
    pub width: u32,
    pub height: u32,
    /// Actions in display order
    pub actions: Vec<PromptAction>,
}

impl PromptSpec {
    /// Build the legal notice prompt from the gate configuration.
    pub fn legal_notice(config: &GateConfig) -> Self {
        Self {
            title: config.title.clone(),
            icon: PromptIcon::Warning,
            body: crate::gate::notice::wrap_body(&config.message),
            width: config.width,
            height: config.height,
            actions: vec![
                PromptAction {
                    choice: PromptChoice::Accept,
                    label: config.accept_label.clone(),
                },
                PromptAction {
                    choice: PromptChoice::Decline,
                    label: config.decline_label.clone(),
                },
                PromptAction {
                    choice: PromptChoice::Cancel,
                    label: config.cancel_label.clone(),
                },
            ],
        }
    }

    pub fn label_for(&self, choice: PromptChoice) -> Option<&str> {
        self.actions
            .iter()
            .find(|action| action.choice == choice)
            .map(|action| action.label.as_str())
    }
}

/// Errors raised while showing a prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt could not be shown: {0}")]
    Unavailable(String),
}

/// Blocking modal dialog.
pub trait ModalPrompt: Send + Sync {
    /// Show `spec` and block until the user picks a terminal action.
    fn show(&self, owner: Option<&WindowOwner>, spec: &PromptSpec) -> Result<PromptChoice, PromptError>;
}
