use fltk::{
    app::Sender,
    button::Button,
    enums::CallbackTrigger,
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::domain::Message;

/// Non-modal Find and Replace window. Its buttons only send messages; the
/// dispatch loop does the work against the document.
pub struct FindReplaceDialog {
    window: Window,
    find_input: Input,
}

impl FindReplaceDialog {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(320, 150)
            .with_label("Find and Replace")
            .center_screen();

        Frame::default().with_pos(10, 15).with_size(70, 30).with_label("Find:");
        let mut find_input = Input::default().with_pos(90, 15).with_size(215, 30);

        Frame::default().with_pos(10, 55).with_size(70, 30).with_label("Replace:");
        let replace_input = Input::default().with_pos(90, 55).with_size(215, 30);

        let mut find_btn = Button::default()
            .with_pos(20, 105).with_size(85, 30).with_label("Find");
        let mut replace_btn = Button::default()
            .with_pos(115, 105).with_size(85, 30).with_label("Replace");
        let mut close_btn = Button::default()
            .with_pos(210, 105).with_size(85, 30).with_label("Close");

        window.end();
        window.make_resizable(false);

        let s = *sender;
        let find_value = find_input.clone();
        find_btn.set_callback(move |_| {
            s.send(Message::Find(find_value.value()));
        });

        // Enter key on the find input triggers Find
        let mut find_btn2 = find_btn.clone();
        find_input.set_trigger(CallbackTrigger::EnterKey);
        find_input.set_callback(move |_| {
            find_btn2.do_callback();
        });

        let s = *sender;
        let needle_input = find_input.clone();
        replace_btn.set_callback(move |_| {
            s.send(Message::ReplaceAll {
                needle: needle_input.value(),
                replacement: replace_input.value(),
            });
        });

        let dialog_close = window.clone();
        close_btn.set_callback(move |_| {
            dialog_close.clone().hide();
        });

        let dialog_x = window.clone();
        window.set_callback(move |_| {
            dialog_x.clone().hide();
        });

        Self { window, find_input }
    }

    pub fn show(&mut self) {
        self.window.show();
        let _ = self.find_input.take_focus();
    }

    pub fn hide(&mut self) {
        self.window.hide();
    }
}
