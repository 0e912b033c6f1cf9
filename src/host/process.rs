//! Process lifecycle
//!
//! Host lifecycle for a stand-alone process: disabled plugins are recorded in the
//! settings file, and a restart relaunches the current executable.

use crate::host::{HostLifecycle, LifecycleError};
use crate::storage::settings::JsonSettingsStore;
use std::ffi::OsString;
use std::process::Command;
use std::sync::Arc;

pub struct ProcessLifecycle {
    settings: Arc<JsonSettingsStore>,
    relaunch_args: Vec<OsString>,
}

impl ProcessLifecycle {
    /// `relaunch_args` are passed to the new process on restart.
    pub fn new(settings: Arc<JsonSettingsStore>, relaunch_args: Vec<OsString>) -> Self {
        Self {
            settings,
            relaunch_args,
        }
    }
}

impl HostLifecycle for ProcessLifecycle {
    fn disable_plugin(&self, id: &str) -> Result<(), LifecycleError> {
        self.settings
            .disable_plugin(id)
            .map_err(|source| LifecycleError::Disable {
                id: id.to_string(),
                source,
            })?;
        tracing::info!("Plugin {} disabled", id);
        Ok(())
    }

    fn restart(&self, force: bool) -> Result<(), LifecycleError> {
        let exe = std::env::current_exe()?;
        tracing::info!("Restarting {} (force: {})", exe.display(), force);

        // There are no shutdown vetoes in a stand-alone process, so `force` only
        // shows up in the log.
        let child = Command::new(&exe).args(&self.relaunch_args).spawn()?;
        tracing::debug!("Relaunched as pid {}", child.id());
        std::process::exit(0)
    }
}
