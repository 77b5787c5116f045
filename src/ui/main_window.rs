use fltk::{
    app::{self, Sender},
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::Message;

pub const APP_TITLE: &str = "Text Editor";
const STATUS_HEIGHT: i32 = 22;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub word_count_frame: Frame,
}

pub fn build_main_window(width: i32, height: i32, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, width, height, APP_TITLE);
    wind.set_xclass("ThemePad");

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut word_count_frame = Frame::default().with_label("Words: 0");
    word_count_frame.set_frame(FrameType::FlatBox);
    word_count_frame.set_align(Align::Right | Align::Inside);
    word_count_frame.set_label_size(13);
    flex.fixed(&word_count_frame, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Content changes are picked up when the key is released
    let s = *sender;
    text_editor.handle(move |_, event| {
        if matches!(event, Event::KeyUp | Event::Paste | Event::DndRelease) {
            s.send(Message::ContentChanged);
        }
        false
    });

    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::FileExit);
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        word_count_frame,
    }
}
