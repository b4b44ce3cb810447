//! Application layer - Use cases and port interfaces
//!
//! Contains the dispatch use case, the in-flight notification registry,
//! and trait definitions for external system interactions.

pub mod dispatch;
pub mod ports;
pub mod registry;

// Re-export use cases
pub use dispatch::{DispatchOutcome, InteractionCallbacks, NotificationDispatcher};
pub use registry::{ActiveNotification, NotificationRegistry};
