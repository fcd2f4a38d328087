use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Message, ThemeMode};

pub const DARK_MODE_TOGGLE_PATH: &str = "View/Toggle Dark Mode";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save As...", Shortcut::Ctrl | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add("View/Dark Mode", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetTheme(ThemeMode::Dark)) });
    menu.add("View/Light Mode", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetTheme(ThemeMode::Light)) });
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(DARK_MODE_TOGGLE_PATH, Shortcut::Ctrl | 'd', dm_flag | MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ToggleTheme) });
    menu.add("View/Increase Font", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FontIncrease) });
    menu.add("View/Decrease Font", Shortcut::Ctrl | '-', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FontDecrease) });

    // Search
    menu.add("Search/Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });
}

/// Sync a toggle item's check mark with state changed elsewhere.
pub fn update_menu_checkbox(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx >= 0 {
        if let Some(mut item) = menu.at(idx) {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}
