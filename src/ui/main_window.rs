use fltk::{
    app::Sender,
    button::Button,
    enums::FrameType,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::Message;
use crate::app::state::APP_NAME;

const BUTTON_COLUMN_WIDTH: i32 = 110;
const BUTTON_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub button_column: Flex,
    pub buttons: Vec<Button>,
    pub text_editor: TextEditor,
}

fn side_button(column: &mut Flex, label: &str, sender: &Sender<Message>, msg: Message) -> Button {
    let mut button = Button::default().with_label(label);
    button.emit(*sender, msg);
    column.fixed(&button, BUTTON_HEIGHT);
    button
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 700, APP_NAME);
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, 900, 700, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    // Raised button column on the left
    let mut button_column = Flex::default();
    button_column.set_type(FlexType::Column);
    button_column.set_frame(FrameType::UpBox);
    button_column.set_margin(5);
    button_column.set_pad(5);
    let buttons = vec![
        side_button(&mut button_column, "NEW FILE", sender, Message::FileNew),
        side_button(&mut button_column, "OPEN FILE", sender, Message::FileOpen),
        side_button(&mut button_column, "SAVE AS", sender, Message::FileSaveAs),
        side_button(&mut button_column, "A +", sender, Message::FontIncrease),
        side_button(&mut button_column, "A -", sender, Message::FontDecrease),
    ];
    button_column.end();
    body.fixed(&button_column, BUTTON_COLUMN_WIDTH);

    let text_editor = TextEditor::default();

    body.end();
    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        button_column,
        buttons,
        text_editor,
    }
}
