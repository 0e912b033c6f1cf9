//! Test doubles for the gate's collaborators.

use crate::host::{HostLifecycle, LifecycleError};
use crate::prompt::{ModalPrompt, PromptChoice, PromptError, PromptSpec, WindowOwner};
use crate::storage::StorageError;
use std::sync::Mutex;

/// Prompt that answers with a fixed choice and remembers what it was shown.
pub struct ScriptedPrompt {
    choice: Option<PromptChoice>,
    seen: Mutex<Vec<(Option<WindowOwner>, PromptSpec)>>,
}

impl ScriptedPrompt {
    pub fn new(choice: PromptChoice) -> Self {
        Self {
            choice: Some(choice),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// A prompt that cannot be shown.
    pub fn failing() -> Self {
        Self {
            choice: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<(Option<WindowOwner>, PromptSpec)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn shown(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ModalPrompt for ScriptedPrompt {
    fn show(&self, owner: Option<&WindowOwner>, spec: &PromptSpec) -> Result<PromptChoice, PromptError> {
        self.seen.lock().unwrap().push((owner.cloned(), spec.clone()));
        self.choice
            .ok_or_else(|| PromptError::Unavailable("no display".to_string()))
    }
}

/// Lifecycle that records calls instead of acting on them.
#[derive(Default)]
pub struct RecordingLifecycle {
    calls: Mutex<Vec<String>>,
    fail_disable: bool,
}

impl RecordingLifecycle {
    pub fn failing_disable() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_disable: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn disabled(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("disable:").map(str::to_string))
            .collect()
    }

    pub fn restarts(&self) -> Vec<bool> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("restart:"))
            .map(|force| force == "true")
            .collect()
    }
}

impl HostLifecycle for RecordingLifecycle {
    fn disable_plugin(&self, id: &str) -> Result<(), LifecycleError> {
        if self.fail_disable {
            return Err(LifecycleError::Disable {
                id: id.to_string(),
                source: StorageError::NoDataDir,
            });
        }
        self.calls.lock().unwrap().push(format!("disable:{id}"));
        Ok(())
    }

    fn restart(&self, force: bool) -> Result<(), LifecycleError> {
        self.calls.lock().unwrap().push(format!("restart:{force}"));
        Ok(())
    }
}
