//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DisplayConfig, HighlightSet, Settings, Messages)
//! - `services/` - Business operations (file I/O, text search)
//! - `infrastructure/` - Collaborator traits, error, logging
//! - `state.rs` - The editor session every UI event is routed to

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use domain::{AppSettings, DisplayConfig, FontChoice, Message, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use state::{APP_NAME, EditorSession};
