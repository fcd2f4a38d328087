use std::ops::Range;

use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::{StyleTableEntryExt, TextAttr, TextBuffer, TextEditor},
};

use crate::app::domain::{DisplayConfig, FOUND_STYLE, FontChoice, HighlightStyle, Rgb};
use crate::app::infrastructure::collaborators::TextWidget;

const PLAIN_STYLE: char = 'A';
const FOUND_STYLE_CHAR: char = 'B';

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub(crate) fn to_font(font: FontChoice) -> Font {
    match font {
        FontChoice::Times => Font::Times,
        FontChoice::Courier => Font::Courier,
        FontChoice::Helvetica => Font::Helvetica,
        FontChoice::Screen => Font::Screen,
    }
}

fn style_char(style: HighlightStyle) -> char {
    if style.name == FOUND_STYLE.name {
        FOUND_STYLE_CHAR
    } else {
        PLAIN_STYLE
    }
}

/// `TextWidget` backed by an FLTK `TextEditor`.
///
/// Tags live in a style buffer holding one style byte per text byte
/// (`'A'` plain, `'B'` found). A modify callback on the text buffer keeps
/// the two the same length while the user types, so tagged ranges move
/// with the text around them.
pub struct FltkTextWidget {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
}

impl FltkTextWidget {
    pub fn new(mut editor: TextEditor) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();

        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            // Remove before inserting: a wholesale set_text reports both at pos 0.
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            if inserted > 0 {
                let filler = PLAIN_STYLE.to_string().repeat(inserted as usize);
                style_buf.insert(pos, &filler);
            }
        });

        editor.set_buffer(buffer.clone());

        Self {
            editor,
            buffer,
            style_buffer,
        }
    }

    fn style_table(display: &DisplayConfig) -> Vec<StyleTableEntryExt> {
        let theme = display.theme();
        let font = to_font(display.font);
        let size = display.font_size() as i32;

        vec![
            StyleTableEntryExt {
                color: to_color(theme.foreground),
                font,
                size,
                attr: TextAttr::None,
                bgcolor: to_color(theme.background),
            },
            StyleTableEntryExt {
                color: to_color(theme.foreground),
                font,
                size,
                attr: TextAttr::BgColor,
                bgcolor: to_color(FOUND_STYLE.background),
            },
        ]
    }
}

impl TextWidget for FltkTextWidget {
    fn get_all_text(&self) -> String {
        self.buffer.text()
    }

    fn insert_at_end(&mut self, text: &str) {
        self.buffer.append(text);
    }

    fn clear(&mut self) {
        self.buffer.set_text("");
        self.editor.set_insert_position(0);
    }

    fn tag_range(&mut self, range: Range<usize>, style: HighlightStyle) {
        let len = self.style_buffer.length().max(0) as usize;
        let end = range.end.min(len);
        if range.start >= end {
            return;
        }
        let marks = style_char(style).to_string().repeat(end - range.start);
        self.style_buffer.replace(range.start as i32, end as i32, &marks);
        self.editor.redraw();
    }

    fn clear_tag(&mut self, style: HighlightStyle) {
        let ch = style_char(style);
        if ch == PLAIN_STYLE {
            return;
        }
        let styles = self.style_buffer.text();
        if styles.contains(ch) {
            self.style_buffer.set_text(&styles.replace(ch, &PLAIN_STYLE.to_string()));
            self.editor.redraw();
        }
    }

    fn configure(&mut self, display: &DisplayConfig) {
        let theme = display.theme();
        self.editor.set_text_font(to_font(display.font));
        self.editor.set_text_size(display.font_size() as i32);
        self.editor.set_color(to_color(theme.background));
        self.editor.set_text_color(to_color(theme.foreground));
        self.editor.set_cursor_color(to_color(theme.cursor));
        self.editor
            .set_highlight_data_ext(self.style_buffer.clone(), Self::style_table(display));
        self.editor.redraw();
    }
}
