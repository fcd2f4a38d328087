use std::path::{Path, PathBuf};

use super::domain::{DisplayConfig, FOUND_STYLE, HighlightSet, ThemeMode};
use super::infrastructure::collaborators::{
    DEFAULT_EXTENSION, FileDialog, SearchPrompt, TEXT_FILE_FILTERS, TextWidget,
};
use super::infrastructure::error::{AppError, Result};
use super::services::file_ops::{read_document, with_default_extension, write_document};
use super::services::text_ops::find_all_in_text;

pub const APP_NAME: &str = "OwnPad";

/// The single open document and how it is displayed.
///
/// The buffer itself lives in the widget `W`; the session is the only code
/// that replaces it wholesale or reads it back in full.
pub struct EditorSession<W: TextWidget> {
    widget: W,
    display: DisplayConfig,
    highlights: HighlightSet,
    file_path: Option<PathBuf>,
}

impl<W: TextWidget> EditorSession<W> {
    pub fn new(mut widget: W, display: DisplayConfig) -> Self {
        widget.configure(&display);
        Self {
            widget,
            display,
            highlights: HighlightSet::new(FOUND_STYLE),
            file_path: None,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn text(&self) -> String {
        self.widget.get_all_text()
    }

    pub fn title(&self) -> String {
        match self.file_path {
            Some(ref path) => format!("{} - {}", APP_NAME, path.display()),
            None => APP_NAME.to_string(),
        }
    }

    // --- File operations ---

    pub fn new_document(&mut self) {
        self.widget.clear();
        self.clear_highlights();
        self.file_path = None;
        tracing::debug!("new document");
    }

    /// Prompt for a file and load it. Returns the path that was opened.
    pub fn open_document(&mut self, dialog: &mut dyn FileDialog) -> Result<PathBuf> {
        let path = dialog
            .ask_open_path(TEXT_FILE_FILTERS)
            .ok_or(AppError::DialogCancelled)?;
        self.open_path(&path)?;
        Ok(path)
    }

    /// Load `path` into the buffer. On error nothing changes.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let content = read_document(path).inspect_err(|e| tracing::warn!(error = %e, "open failed"))?;

        self.widget.set_all_text(&content);
        self.clear_highlights();
        self.file_path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), bytes = content.len(), "opened document");
        Ok(())
    }

    /// Prompt for a destination and write the buffer there. Returns the
    /// path that was written.
    pub fn save_document_as(&mut self, dialog: &mut dyn FileDialog) -> Result<PathBuf> {
        let chosen = dialog
            .ask_save_path(DEFAULT_EXTENSION, TEXT_FILE_FILTERS)
            .ok_or(AppError::DialogCancelled)?;
        let path = with_default_extension(chosen, DEFAULT_EXTENSION);
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Write the buffer verbatim to `path`. On error nothing changes.
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        let text = self.widget.get_all_text();
        write_document(path, &text).inspect_err(|e| tracing::warn!(error = %e, "save failed"))?;

        self.file_path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), bytes = text.len(), "saved document");
        Ok(())
    }

    // --- View ---

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.display.theme_mode = mode;
        self.widget.configure(&self.display);
        tracing::debug!(?mode, "theme changed");
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.display.theme_mode.toggled());
    }

    /// Returns `true` if the size changed.
    pub fn increase_font_size(&mut self) -> bool {
        let changed = self.display.increase_font_size();
        if changed {
            self.widget.configure(&self.display);
            tracing::debug!(size = self.display.font_size(), "font size increased");
        }
        changed
    }

    /// Returns `true` if the size changed.
    pub fn decrease_font_size(&mut self) -> bool {
        let changed = self.display.decrease_font_size();
        if changed {
            self.widget.configure(&self.display);
            tracing::debug!(size = self.display.font_size(), "font size decreased");
        }
        changed
    }

    // --- Search ---

    /// Ask for a term and highlight it. `None` if the prompt was cancelled
    /// or left empty, in which case nothing changes.
    pub fn find(&mut self, prompt: &mut dyn SearchPrompt) -> Option<usize> {
        let word = prompt.ask_search_term()?;
        self.find_word(&word)
    }

    /// Highlight every case-insensitive, non-overlapping occurrence of
    /// `word`, replacing the previous highlights. Returns the match count,
    /// or `None` for an empty term.
    pub fn find_word(&mut self, word: &str) -> Option<usize> {
        if word.is_empty() {
            return None;
        }

        let text = self.widget.get_all_text();
        self.clear_highlights();
        for range in find_all_in_text(&text, word) {
            self.widget.tag_range(range.clone(), self.highlights.style());
            self.highlights.push(range);
        }

        tracing::debug!(word, matches = self.highlights.len(), "find");
        Some(self.highlights.len())
    }

    fn clear_highlights(&mut self) {
        self.widget.clear_tag(self.highlights.style());
        self.highlights.clear();
    }
}
