use fltk::{app, prelude::*};

use own_pad::app::infrastructure::logging;
use own_pad::app::{AppSettings, DisplayConfig, EditorSession, Message};
use own_pad::ui::dialogs::find::FltkSearchPrompt;
use own_pad::ui::dialogs::report_error;
use own_pad::ui::file_dialogs::FltkFileDialog;
use own_pad::ui::main_window::{MainWidgets, build_main_window};
use own_pad::ui::menu::{DARK_MODE_TOGGLE_PATH, build_menu, update_menu_checkbox};
use own_pad::ui::text_widget::FltkTextWidget;
use own_pad::ui::theme::{ChromeWidgets, apply_theme};

fn refresh_chrome(widgets: &mut MainWidgets, session: &EditorSession<FltkTextWidget>) {
    let mode = session.display().theme_mode;
    apply_theme(
        ChromeWidgets {
            window: &mut widgets.wind,
            menu: &mut widgets.menu,
            button_column: &mut widgets.button_column,
            buttons: &mut widgets.buttons,
        },
        mode,
    );
    update_menu_checkbox(&widgets.menu, DARK_MODE_TOGGLE_PATH, mode.is_dark());
    widgets.wind.set_label(&session.title());
}

fn main() {
    logging::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let display = DisplayConfig::from_settings(&settings);

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, display.theme_mode.is_dark());

    let mut session = EditorSession::new(FltkTextWidget::new(widgets.text_editor.clone()), display);
    let mut file_dialog = FltkFileDialog::default();
    let mut find_prompt = FltkSearchPrompt::default();

    refresh_chrome(&mut widgets, &session);
    widgets.wind.show();
    tracing::info!(?display, "started");

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };

        match msg {
            Message::FileNew => {
                session.new_document();
                widgets.wind.set_label(&session.title());
            }
            Message::FileOpen => match session.open_document(&mut file_dialog) {
                Ok(_) => widgets.wind.set_label(&session.title()),
                Err(e) => report_error(&e),
            },
            Message::FileSaveAs => match session.save_document_as(&mut file_dialog) {
                Ok(_) => widgets.wind.set_label(&session.title()),
                Err(e) => report_error(&e),
            },
            Message::FileQuit => app.quit(),
            Message::SetTheme(mode) => {
                session.set_theme(mode);
                refresh_chrome(&mut widgets, &session);
            }
            Message::ToggleTheme => {
                session.toggle_theme();
                refresh_chrome(&mut widgets, &session);
            }
            Message::FontIncrease => {
                session.increase_font_size();
            }
            Message::FontDecrease => {
                session.decrease_font_size();
            }
            Message::ShowFind => {
                if let Some(count) = session.find(&mut find_prompt) {
                    tracing::debug!(count, "find finished");
                }
            }
        }
    }
}
