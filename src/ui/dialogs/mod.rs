pub mod find;

use fltk::dialog;

use crate::app::AppError;

/// Show a failed operation to the user. Cancelled dialogs stay silent.
pub fn report_error(err: &AppError) {
    if err.is_cancelled() {
        return;
    }
    dialog::alert_default(&err.to_string());
}
