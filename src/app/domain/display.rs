use serde::{Deserialize, Serialize};

use super::settings::AppSettings;

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 40;
pub const FONT_SIZE_STEP: u32 = 2;

/// An RGB color, independent of any toolkit's color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn preset(self) -> Theme {
        match self {
            ThemeMode::Light => Theme {
                background: Rgb::WHITE,
                foreground: Rgb::BLACK,
                cursor: Rgb::BLACK,
            },
            ThemeMode::Dark => Theme {
                background: Rgb(0x1e, 0x1e, 0x1e),
                foreground: Rgb::WHITE,
                cursor: Rgb::WHITE,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Editor colors for one theme preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub cursor: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    Times,
    Courier,
    Helvetica,
    Screen,
}

impl FontChoice {
    pub fn family_name(self) -> &'static str {
        match self {
            FontChoice::Times => "Times",
            FontChoice::Courier => "Courier",
            FontChoice::Helvetica => "Helvetica",
            FontChoice::Screen => "Screen",
        }
    }
}

/// Font and colors the text widget is rendered with.
///
/// `font_size` always stays within `MIN_FONT_SIZE..=MAX_FONT_SIZE`; the
/// only mutators are the step methods below, which refuse to leave that
/// range instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub font: FontChoice,
    font_size: u32,
    pub theme_mode: ThemeMode,
}

impl DisplayConfig {
    pub fn new(font: FontChoice, font_size: u32, theme_mode: ThemeMode) -> Self {
        Self {
            font,
            font_size: font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            theme_mode,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.font, settings.font_size, settings.theme_mode)
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.preset()
    }

    /// Returns `true` if the size changed.
    pub fn increase_font_size(&mut self) -> bool {
        let next = self.font_size + FONT_SIZE_STEP;
        if next > MAX_FONT_SIZE {
            return false;
        }
        self.font_size = next;
        true
    }

    /// Returns `true` if the size changed.
    pub fn decrease_font_size(&mut self) -> bool {
        match self.font_size.checked_sub(FONT_SIZE_STEP) {
            Some(next) if next >= MIN_FONT_SIZE => {
                self.font_size = next;
                true
            }
            _ => false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}
