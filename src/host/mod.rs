//! Host application seams
//!
//! The facilities the consent gate borrows from its host: a UI task queue and
//! the plugin lifecycle.

pub mod event_loop;
pub mod process;

use crate::gate::ConsentError;
use thiserror::Error;

/// Work posted to the UI thread
pub type UiTask = Box<dyn FnOnce() -> Result<(), ConsentError> + Send + 'static>;

/// Queue of work to be run on the host's UI thread.
pub trait UiTaskQueue: Send + Sync {
    /// Post `task` for later execution. Never runs it inline.
    fn schedule(&self, task: UiTask);
}

/// Errors raised by the host lifecycle.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to disable plugin {id}: {source}")]
    Disable {
        id: String,
        #[source]
        source: crate::storage::StorageError,
    },
    #[error("Failed to restart host: {0}")]
    Restart(#[from] std::io::Error),
}

/// Enable/disable and restart facilities of the host application.
pub trait HostLifecycle: Send + Sync {
    /// Mark the plugin `id` as disabled for subsequent launches.
    fn disable_plugin(&self, id: &str) -> Result<(), LifecycleError>;

    /// Restart the host. With `force` set, shutdown vetoes are ignored.
    ///
    /// Implementations that actually restart do not return on success.
    fn restart(&self, force: bool) -> Result<(), LifecycleError>;
}
