use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::infrastructure::collaborators::{FileDialog, FileFilter};

/// FLTK filter format: one `Description\tPattern` per line.
pub fn native_filter(filters: &[FileFilter]) -> String {
    filters
        .iter()
        .map(|f| format!("{}\t{}", f.description, f.pattern))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Native open/save choosers. Each dialog starts in the directory of the
/// last file picked.
#[derive(Debug, Default)]
pub struct FltkFileDialog {
    last_directory: Option<PathBuf>,
}

impl FltkFileDialog {
    fn run(&mut self, kind: FileDialogType, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        let is_save = matches!(kind, FileDialogType::BrowseSaveFile);
        let mut nfc = NativeFileChooser::new(kind);
        nfc.set_title(title);
        nfc.set_filter(&native_filter(filters));
        if is_save {
            nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
        }
        if let Some(ref dir) = self.last_directory {
            if let Err(e) = nfc.set_directory(dir) {
                tracing::debug!(dir = %dir.display(), error = ?e, "could not preset dialog directory");
            }
        }

        nfc.show(); // blocks until close
        let filename = nfc.filename();
        if filename.as_os_str().is_empty() {
            return None;
        }

        self.last_directory = filename.parent().map(Path::to_path_buf);
        Some(filename)
    }
}

impl FileDialog for FltkFileDialog {
    fn ask_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.run(FileDialogType::BrowseFile, "Open File", filters)
    }

    fn ask_save_path(&mut self, _default_ext: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        // The native chooser has no default-extension option; the session appends it.
        self.run(FileDialogType::BrowseSaveFile, "Save As", filters)
    }
}
