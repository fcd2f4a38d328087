use fltk::dialog;

use crate::app::infrastructure::collaborators::SearchPrompt;

/// Modal "Find" input. Pre-fills the previous term.
#[derive(Debug, Default)]
pub struct FltkSearchPrompt {
    last_term: String,
}

impl SearchPrompt for FltkSearchPrompt {
    fn ask_search_term(&mut self) -> Option<String> {
        let term = dialog::input_default("Enter word:", &self.last_term)?;
        if !term.is_empty() {
            self.last_term = term.clone();
        }
        Some(term)
    }
}
