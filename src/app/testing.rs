//! In-memory collaborators for driving an `EditorSession` in tests.

use std::ops::Range;
use std::path::PathBuf;

use crate::app::domain::{DisplayConfig, HighlightStyle};
use crate::app::infrastructure::collaborators::{FileDialog, FileFilter, SearchPrompt, TextWidget};

#[derive(Debug, Default)]
pub struct MemoryWidget {
    pub text: String,
    pub tags: Vec<(Range<usize>, &'static str)>,
    pub display: Option<DisplayConfig>,
    pub configure_calls: usize,
}

impl TextWidget for MemoryWidget {
    fn get_all_text(&self) -> String {
        self.text.clone()
    }

    fn insert_at_end(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn clear(&mut self) {
        self.text.clear();
        self.tags.clear();
    }

    fn tag_range(&mut self, range: Range<usize>, style: HighlightStyle) {
        self.tags.push((range, style.name));
    }

    fn clear_tag(&mut self, style: HighlightStyle) {
        self.tags.retain(|(_, name)| *name != style.name);
    }

    fn configure(&mut self, display: &DisplayConfig) {
        self.display = Some(*display);
        self.configure_calls += 1;
    }
}

/// Answers each dialog with a fixed path, or cancels when `None`.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    pub open_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub last_default_ext: Option<String>,
    pub last_filters: Vec<FileFilter>,
}

impl ScriptedDialog {
    pub fn cancelling() -> Self {
        Self::default()
    }

    pub fn opening(path: impl Into<PathBuf>) -> Self {
        Self {
            open_path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn saving(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: Some(path.into()),
            ..Default::default()
        }
    }
}

impl FileDialog for ScriptedDialog {
    fn ask_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.last_filters = filters.to_vec();
        self.open_path.clone()
    }

    fn ask_save_path(&mut self, default_ext: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        self.last_default_ext = Some(default_ext.to_string());
        self.last_filters = filters.to_vec();
        self.save_path.clone()
    }
}

pub struct ScriptedPrompt(pub Option<String>);

impl SearchPrompt for ScriptedPrompt {
    fn ask_search_term(&mut self) -> Option<String> {
        self.0.clone()
    }
}
