//! Seams between the editor session and the desktop toolkit.
//!
//! The session only ever talks to the screen through these traits, so it
//! can be driven by the FLTK adapters in `crate::ui` or by in-memory fakes.

use std::ops::Range;
use std::path::PathBuf;

use crate::app::domain::{DisplayConfig, HighlightStyle};

/// One entry of a file chooser's type filter, e.g. `Text Files` / `*.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub description: &'static str,
    pub pattern: &'static str,
}

/// Filters offered by both the open and save dialogs. They only narrow
/// what the chooser lists; any path the user picks is accepted.
pub const TEXT_FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        description: "Text Files",
        pattern: "*.txt",
    },
    FileFilter {
        description: "All Files",
        pattern: "*",
    },
];

pub const DEFAULT_EXTENSION: &str = "txt";

/// Modal path selection. `None` means the user cancelled.
pub trait FileDialog {
    fn ask_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    fn ask_save_path(&mut self, default_ext: &str, filters: &[FileFilter]) -> Option<PathBuf>;
}

/// Modal prompt for a search term. `None` means the user cancelled.
pub trait SearchPrompt {
    fn ask_search_term(&mut self) -> Option<String>;
}

/// The widget that holds and displays the buffer.
///
/// Positions are byte offsets into the text returned by `get_all_text`.
pub trait TextWidget {
    fn get_all_text(&self) -> String;

    fn insert_at_end(&mut self, text: &str);

    fn clear(&mut self);

    fn set_all_text(&mut self, text: &str) {
        self.clear();
        self.insert_at_end(text);
    }

    fn tag_range(&mut self, range: Range<usize>, style: HighlightStyle);

    fn clear_tag(&mut self, style: HighlightStyle);

    /// Re-render with new font and colors.
    fn configure(&mut self, display: &DisplayConfig);
}
