//! Domain layer - core data structures and types.
//!
//! - Display configuration (font, size, theme presets)
//! - Search highlight set
//! - Startup settings
//! - Message types for the event system

pub mod display;
pub mod highlight;
pub mod messages;
pub mod settings;

pub use display::{DisplayConfig, FontChoice, Rgb, Theme, ThemeMode};
pub use highlight::{FOUND_STYLE, HighlightSet, HighlightStyle};
pub use messages::Message;
pub use settings::AppSettings;
