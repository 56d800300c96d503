//! Native modal dialogs backed by rfd.
//!
//! All calls block until the user answers, like the rest of the
//! single-threaded event handling.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::core::editor::{Dialogs, SaveChoice, APP_NAME, SAVE_PROMPT};

const SAVE_LABEL: &str = "Save";
const DISCARD_LABEL: &str = "Discard";
const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Default)]
pub struct NativeDialogs;

fn text_file_dialog(title: &str) -> FileDialog {
    FileDialog::new()
        .set_title(title)
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"])
}

impl Dialogs for NativeDialogs {
    fn pick_open_file(&mut self) -> Option<PathBuf> {
        text_file_dialog("Open File").pick_file()
    }

    fn pick_save_file(&mut self, suggested_name: &str) -> Option<PathBuf> {
        let mut dialog = text_file_dialog("Save File As");
        if !suggested_name.is_empty() {
            dialog = dialog.set_file_name(suggested_name);
        }
        dialog.save_file()
    }

    fn confirm_discard(&mut self) -> SaveChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(APP_NAME)
            .set_description(SAVE_PROMPT)
            .set_buttons(MessageButtons::YesNoCancelCustom(
                SAVE_LABEL.to_string(),
                DISCARD_LABEL.to_string(),
                CANCEL_LABEL.to_string(),
            ))
            .show();
        choice_from_result(result)
    }

    fn notify_error(&mut self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(APP_NAME)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_about(&mut self, title: &str, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Map the dialog result to a guard answer. Anything unexpected cancels.
fn choice_from_result(result: MessageDialogResult) -> SaveChoice {
    match result {
        MessageDialogResult::Yes => SaveChoice::Save,
        MessageDialogResult::No => SaveChoice::Discard,
        MessageDialogResult::Custom(label) if label == SAVE_LABEL => SaveChoice::Save,
        MessageDialogResult::Custom(label) if label == DISCARD_LABEL => SaveChoice::Discard,
        _ => SaveChoice::Cancel,
    }
}
