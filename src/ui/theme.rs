use fltk::{
    button::Button,
    enums::Color,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::ThemeMode;

/// Borrowed window chrome around the editor. The editor itself is themed
/// through `TextWidget::configure`.
pub struct ChromeWidgets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub button_column: &'a mut Flex,
    pub buttons: &'a mut [Button],
}

pub fn apply_theme(chrome: ChromeWidgets, mode: ThemeMode) {
    let (window_bg, panel_bg, button_bg, label, hover) = if mode.is_dark() {
        (
            Color::from_rgb(25, 25, 25),
            Color::from_rgb(35, 35, 35),
            Color::from_rgb(50, 50, 50),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(60, 60, 60),
        )
    } else {
        (
            Color::from_rgb(240, 240, 240),
            Color::from_rgb(240, 240, 240),
            Color::from_rgb(225, 225, 225),
            Color::Black,
            Color::from_rgb(200, 200, 200),
        )
    };

    chrome.window.set_color(window_bg);
    chrome.window.set_label_color(label);
    chrome.menu.set_color(panel_bg);
    chrome.menu.set_text_color(label);
    chrome.menu.set_selection_color(hover); // Hover color
    chrome.button_column.set_color(panel_bg);
    for button in chrome.buttons.iter_mut() {
        button.set_color(button_bg);
        button.set_label_color(label);
        button.set_selection_color(hover);
    }

    chrome.window.redraw();
}
