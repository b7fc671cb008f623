//! MPRIS2 bridge for the Radiotray-NG internet radio player.
//!
//! Radiotray-NG publishes its own control API on the session bus but no
//! MPRIS2 interface, so desktop media widgets and media keys cannot see it.
//! This crate wraps the player: it launches the process, connects to its
//! control service and republishes playback state through a standard
//! `org.mpris.MediaPlayer2` service, translating the MPRIS method calls
//! back into player commands.
//!
//! The binary is a thin shell around [`bridge::run`]; the pieces are usable
//! as a library:
//!
//! - [`services::radiotray`] - typed client for the player's control API
//!   plus process supervision
//! - [`services::mpris`] - the MPRIS interface implementation and the
//!   polling observer that keeps it current

/// Bridge orchestration: process, control service, MPRIS server, poll loop.
pub mod bridge;

/// Command-line interface definitions.
pub mod cli;

/// Core error types and result alias.
pub mod core;

/// Player-facing and desktop-facing services.
pub mod services;

/// Logging initialization.
pub mod tracing_config;

pub use crate::core::{BridgeError, Result};
