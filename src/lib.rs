//! Parley Notify - desktop notification dispatcher for the Parley chat shell
//!
//! This crate decides whether a notification should be suppressed (per-OS
//! do-not-disturb state), forwards it to the appropriate OS notification
//! subsystem, and relays the resulting user interaction (click, timeout)
//! back into window-shell behavior (focus, sound, flashing).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (request, tag, sounds, focus-assist levels) and errors
//! - **Application**: The dispatch use case, the in-flight registry, and port traits
//! - **Infrastructure**: Adapter implementations (DND probes, presenters, shell, sound)
//! - **CLI**: Diagnostic command-line surface exercising the full wiring

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
