//! Infrastructure layer - external integrations and utilities.
//!
//! - Collaborator traits the session drives (text widget, dialogs)
//! - Error types
//! - Logging setup

pub mod collaborators;
pub mod error;
pub mod logging;
