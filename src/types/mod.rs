//! Shared type definitions
//!
//! Configuration types shared between the gate, the prompt and the host.

pub mod config;
