use super::display::ThemeMode;

/// All messages that can be sent through the FLTK channel.
/// Each button and menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSaveAs,
    FileQuit,

    // View
    SetTheme(ThemeMode),
    ToggleTheme,
    FontIncrease,
    FontDecrease,

    // Search
    ShowFind,
}
