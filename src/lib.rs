//! Kode Beagle legal notice
//!
//! First-run consent gate: asks the user to accept the plugin's legal notice once,
//! records the answer in host settings, and disables the plugin when it is refused.

pub mod app;
pub mod gate;
pub mod host;
pub mod prompt;
pub mod storage;
pub mod types;
