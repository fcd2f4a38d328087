pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod text_widget;
pub mod theme;
