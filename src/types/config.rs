//! Configuration types
//!
//! Consent gate configuration: where consent is recorded, which plugin it guards,
//! and what the dialog says.

use crate::gate::notice;
use serde::{Deserialize, Serialize};

/// Consent gate configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Settings key holding the consent record
    pub settings_key: String,
    /// Plugin disabled when consent is refused
    pub plugin_id: String,
    /// Dialog title
    pub title: String,
    /// Label of the OK action
    #[serde(default = "default_accept_label")]
    pub accept_label: String,
    /// Label of the decline action
    #[serde(default = "default_decline_label")]
    pub decline_label: String,
    /// Label of the cancel action
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
    /// Rich-text message body, before wrapping
    pub message: String,
    /// Message region width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Message region height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_accept_label() -> String {
    notice::ACCEPT_LABEL.to_string()
}

fn default_decline_label() -> String {
    notice::DECLINE_LABEL.to_string()
}

fn default_cancel_label() -> String {
    notice::CANCEL_LABEL.to_string()
}

fn default_width() -> u32 {
    notice::MESSAGE_SIZE.0
}

fn default_height() -> u32 {
    notice::MESSAGE_SIZE.1
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            settings_key: notice::LEGAL_NOTICE_KEY.to_string(),
            plugin_id: notice::PLUGIN_ID.to_string(),
            title: notice::LEGAL_NOTICE_TITLE.to_string(),
            accept_label: default_accept_label(),
            decline_label: default_decline_label(),
            cancel_label: default_cancel_label(),
            message: notice::LEGAL_NOTICE_MESSAGE.to_string(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl GateConfig {
    /// Validate configuration values
    ///
    /// Blank strings and zero sizes fall back to the built-in notice.
    pub fn validate(&mut self) {
        let defaults = Self::default();

        if self.settings_key.trim().is_empty() {
            tracing::warn!("Empty consent settings key, using {}", defaults.settings_key);
            self.settings_key = defaults.settings_key;
        }
        if self.plugin_id.trim().is_empty() {
            self.plugin_id = defaults.plugin_id;
        }
        if self.title.trim().is_empty() {
            self.title = defaults.title;
        }
        if self.accept_label.trim().is_empty() {
            self.accept_label = defaults.accept_label;
        }
        if self.decline_label.trim().is_empty() {
            self.decline_label = defaults.decline_label;
        }
        if self.cancel_label.trim().is_empty() {
            self.cancel_label = defaults.cancel_label;
        }
        if self.message.trim().is_empty() {
            self.message = defaults.message;
        }
        if self.width == 0 {
            self.width = defaults.width;
        }
        if self.height == 0 {
            self.height = defaults.height;
        }
    }
}
