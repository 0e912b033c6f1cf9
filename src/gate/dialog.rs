//! Legal notice dialog
//!
//! One dialog instance is one trip through `Shown -> {Accepted, Declined, Cancelled}`.
//! The `Shown` state is the lifetime of a [`LegalNoticeDialog`] value; showing it
//! consumes the value, so a terminal action runs at most once.

use crate::gate::ConsentError;
use crate::host::HostLifecycle;
use crate::prompt::{ModalPrompt, PromptChoice, PromptSpec, WindowOwner};
use crate::storage::SettingsStore;
use crate::types::config::GateConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Terminal state of a dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentDecision {
    Accepted,
    Declined,
    Cancelled,
}

impl From<PromptChoice> for ConsentDecision {
    fn from(choice: PromptChoice) -> Self {
        match choice {
            PromptChoice::Accept => ConsentDecision::Accepted,
            PromptChoice::Decline => ConsentDecision::Declined,
            PromptChoice::Cancel => ConsentDecision::Cancelled,
        }
    }
}

impl std::fmt::Display for ConsentDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsentDecision::Accepted => write!(f, "accepted"),
            ConsentDecision::Declined => write!(f, "declined"),
            ConsentDecision::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Record of how a dialog ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentNotification {
    pub dialog_id: Uuid,
    pub decision: ConsentDecision,
    pub timestamp: DateTime<Utc>,
}

/// A legal notice dialog waiting to be shown
pub struct LegalNoticeDialog {
    id: Uuid,
    spec: PromptSpec,
    settings_key: String,
    plugin_id: String,
    settings: Arc<dyn SettingsStore>,
    lifecycle: Arc<dyn HostLifecycle>,
}

impl LegalNoticeDialog {
    pub fn new(
        config: &GateConfig,
        settings: Arc<dyn SettingsStore>,
        lifecycle: Arc<dyn HostLifecycle>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            spec: PromptSpec::legal_notice(config),
            settings_key: config.settings_key.clone(),
            plugin_id: config.plugin_id.clone(),
            settings,
            lifecycle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Show the dialog, block until the user decides, and act on the decision.
    ///
    /// Accepting persists consent. Declining or cancelling disables the plugin and
    /// force-restarts the host; with a real host the restart does not return.
    pub fn show(
        self,
        prompt: &dyn ModalPrompt,
        owner: Option<&WindowOwner>,
    ) -> Result<ConsentNotification, ConsentError> {
        let _span = tracing::info_span!("legal_notice", dialog_id = %self.id).entered();

        let choice = prompt.show(owner, &self.spec)?;
        self.finish(choice.into())
    }

    fn finish(self, decision: ConsentDecision) -> Result<ConsentNotification, ConsentError> {
        tracing::info!("Legal notice {}", decision);

        match decision {
            ConsentDecision::Accepted => {
                self.settings.set_value(&self.settings_key, true)?;
            }
            ConsentDecision::Declined | ConsentDecision::Cancelled => {
                self.lifecycle.disable_plugin(&self.plugin_id)?;
                self.lifecycle.restart(true)?;
            }
        }

        Ok(ConsentNotification {
            dialog_id: self.id,
            decision,
            timestamp: Utc::now(),
        })
    }
}
