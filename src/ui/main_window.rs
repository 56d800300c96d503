//! Main application window.
//!
//! Menu bar and toolbar on top, status bar at the bottom, and the text
//! area filling the rest. Every command is forwarded to the editor core.

use std::ops::Range;
use std::time::Instant;

use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{RichText, TextEdit, Ui, ViewportCommand};

use crate::config::Config;
use crate::core::commands::{
    Command, MenuItem, EDIT_MENU, FILE_MENU, HELP_MENU, TOOLBAR, WINDOW_SHORTCUTS,
};
use crate::core::editor::{Dialogs, Editor};
use crate::core::selection;
use crate::ui::dialogs::NativeDialogs;
use crate::ui::theme;
use crate::utils::clipboard::{ClipboardAccess, SystemClipboard};

/// Main window state.
pub struct MainWindow<D = NativeDialogs, C = SystemClipboard> {
    editor: Editor,
    dialogs: D,
    clipboard: C,
    config: Config,

    text_edit_id: egui::Id,
    shown_title: String,
    // Set once the unsaved-changes guard has approved closing.
    close_approved: bool,
    theme_applied: bool,
}

impl MainWindow {
    pub fn new(config: Config) -> Self {
        Self::with_services(config, NativeDialogs, SystemClipboard::default())
    }
}

impl<D: Dialogs, C: ClipboardAccess> MainWindow<D, C> {
    pub fn with_services(config: Config, dialogs: D, clipboard: C) -> Self {
        Self {
            editor: Editor::new(config.status_timeout()),
            dialogs,
            clipboard,
            config,

            text_edit_id: egui::Id::new("document_text"),
            shown_title: String::new(),
            close_approved: false,
            theme_applied: false,
        }
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx, &self.config);
            self.theme_applied = true;
        }

        self.handle_close_request(ctx);

        let mut triggered = Self::consume_shortcuts(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            if let Some(command) = Self::render_menu_bar(ui) {
                triggered = Some(command);
            }
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            if let Some(command) = Self::render_toolbar(ui) {
                triggered = Some(command);
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_text_area(ui);
        });

        if let Some(command) = triggered {
            self.run_command(ctx, command);
        }

        self.sync_title(ctx);
    }

    fn consume_shortcuts(ctx: &egui::Context) -> Option<Command> {
        WINDOW_SHORTCUTS.iter().copied().find(|command| {
            command
                .shortcut()
                .is_some_and(|shortcut| ctx.input_mut(|i| i.consume_shortcut(&shortcut)))
        })
    }

    fn render_menu_bar(ui: &mut Ui) -> Option<Command> {
        let mut triggered = None;
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| Self::render_menu_items(ui, FILE_MENU, &mut triggered));
            ui.menu_button("Edit", |ui| Self::render_menu_items(ui, EDIT_MENU, &mut triggered));
            ui.menu_button("Help", |ui| Self::render_menu_items(ui, HELP_MENU, &mut triggered));
        });
        triggered
    }

    fn render_menu_items(ui: &mut Ui, items: &[MenuItem], triggered: &mut Option<Command>) {
        for item in items {
            match *item {
                MenuItem::Separator => {
                    ui.separator();
                }
                MenuItem::Command(command) => {
                    let mut button = egui::Button::new(command.label());
                    if let Some(shortcut) = command.shortcut() {
                        button = button.shortcut_text(ui.ctx().format_shortcut(&shortcut));
                    }
                    if ui.add(button).clicked() {
                        *triggered = Some(command);
                        ui.close_menu();
                    }
                }
            }
        }
    }

    fn render_toolbar(ui: &mut Ui) -> Option<Command> {
        let mut triggered = None;
        ui.horizontal(|ui| {
            for item in TOOLBAR {
                match *item {
                    MenuItem::Separator => {
                        ui.separator();
                    }
                    MenuItem::Command(command) => {
                        let mut response = ui.button(command.toolbar_label());
                        if let Some(shortcut) = command.shortcut() {
                            let hint = format!("{} ({})", command.label(), ui.ctx().format_shortcut(&shortcut));
                            response = response.on_hover_text(hint);
                        }
                        if response.clicked() {
                            triggered = Some(command);
                        }
                    }
                }
            }
        });
        triggered
    }

    fn render_status_bar(&mut self, ui: &mut Ui) {
        let now = Instant::now();
        let message = self
            .editor
            .status_mut()
            .current_message(now)
            .map(str::to_owned);
        let cursor_label = self.editor.status().cursor_label();

        ui.horizontal(|ui| {
            if let Some(message) = message {
                ui.label(RichText::new(message).color(theme::status_color(self.config.dark_mode)));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(cursor_label);
            });
        });

        // Wake up when the transient message should disappear.
        if let Some(expires_at) = self.editor.status().expires_at() {
            ui.ctx()
                .request_repaint_after(expires_at.saturating_duration_since(now));
        }
    }

    fn render_text_area(&mut self, ui: &mut Ui) {
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = TextEdit::multiline(self.editor.document_mut().text_mut())
                    .id(self.text_edit_id)
                    .font(egui::TextStyle::Monospace)
                    .lock_focus(true)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .min_size(ui.available_size())
                    .show(ui);

                if let Some(range) = output.cursor_range {
                    self.editor.update_cursor(range.primary.ccursor.index);
                }
            });
    }

    fn run_command(&mut self, ctx: &egui::Context, command: Command) {
        log::debug!("Command: {:?}", command);
        match command {
            Command::New => {
                if self.editor.new_file(&mut self.dialogs) {
                    self.reset_text_state(ctx);
                }
            }
            Command::Open => {
                if self.editor.open(&mut self.dialogs) {
                    self.reset_text_state(ctx);
                }
            }
            Command::Save => {
                self.editor.save(&mut self.dialogs);
            }
            Command::SaveAs => {
                self.editor.save_as(&mut self.dialogs);
            }
            Command::Cut => {
                let range = self.selection(ctx);
                if let Some(cursor) = self.editor.cut(&range, &mut self.clipboard) {
                    self.place_cursor(ctx, cursor);
                }
            }
            Command::Copy => {
                let range = self.selection(ctx);
                self.editor.copy(&range, &mut self.clipboard);
                ctx.memory_mut(|m| m.request_focus(self.text_edit_id));
            }
            Command::Paste => {
                let range = self.selection(ctx);
                if let Some(cursor) = self.editor.paste(&range, &mut self.clipboard) {
                    self.place_cursor(ctx, cursor);
                }
            }
            Command::Quit => {
                if self.editor.request_close(&mut self.dialogs) {
                    self.close_approved = true;
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
            }
            Command::About => self.editor.about(&mut self.dialogs),
        }
    }

    /// Veto window close requests unless the unsaved-changes guard agrees.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.close_approved {
            return;
        }
        if self.editor.request_close(&mut self.dialogs) {
            self.close_approved = true;
        } else {
            log::debug!("Close cancelled");
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
        }
    }

    /// Forget the widget's undo history, cursor and selection.
    ///
    /// They belong to the replaced document; undo must not bring it back.
    fn reset_text_state(&mut self, ctx: &egui::Context) {
        ctx.data_mut(|d| d.remove::<TextEditState>(self.text_edit_id));
    }

    /// Current selection of the text area, or an empty range at the end.
    fn selection(&self, ctx: &egui::Context) -> Range<usize> {
        let len = self.editor.document().text().chars().count();
        TextEdit::load_state(ctx, self.text_edit_id)
            .and_then(|state| state.cursor.char_range())
            .map(|range| selection::char_range(range.primary.index, range.secondary.index))
            .map(|range| selection::clamp(range, len))
            .unwrap_or(len..len)
    }

    fn place_cursor(&mut self, ctx: &egui::Context, index: usize) {
        if let Some(mut state) = TextEdit::load_state(ctx, self.text_edit_id) {
            state
                .cursor
                .set_char_range(Some(CCursorRange::one(CCursor::new(index))));
            state.store(ctx, self.text_edit_id);
        }
        self.editor.update_cursor(index);
        ctx.memory_mut(|m| m.request_focus(self.text_edit_id));
        ctx.request_repaint();
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.editor.window_title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl Default for MainWindow {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::editor::SaveChoice;
    use crate::test_support::{FakeClipboard, FakeDialogs};
    use egui::{Event, Key, Modifiers, ViewportEvent, ViewportId, ViewportInfo};

    type TestWindow = MainWindow<FakeDialogs, FakeClipboard>;

    fn test_window() -> TestWindow {
        MainWindow::with_services(Config::default(), FakeDialogs::default(), FakeClipboard::default())
    }

    /// Run one frame and return the commands sent to the root viewport.
    fn frame(
        ctx: &egui::Context,
        window: &mut TestWindow,
        events: Vec<Event>,
        close_requested: bool,
        command: Option<Command>,
    ) -> Vec<ViewportCommand> {
        let mut input = egui::RawInput {
            events,
            ..Default::default()
        };
        let viewport = ViewportInfo {
            events: if close_requested {
                vec![ViewportEvent::Close]
            } else {
                Vec::new()
            },
            ..Default::default()
        };
        input.viewports.insert(ViewportId::ROOT, viewport);

        let output = ctx.run(input, |ctx| {
            window.render(ctx);
            if let Some(command) = command {
                window.run_command(ctx, command);
            }
        });
        output
            .viewport_output
            .get(&ViewportId::ROOT)
            .map(|v| v.commands.clone())
            .unwrap_or_default()
    }

    fn undo_key() -> Event {
        Event::Key {
            key: Key::Z,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::COMMAND,
        }
    }

    fn stored_cursor(ctx: &egui::Context, window: &TestWindow) -> Option<usize> {
        TextEdit::load_state(ctx, window.text_edit_id)
            .and_then(|state| state.cursor.char_range())
            .map(|range| range.primary.index)
    }

    fn title_count(commands: &[ViewportCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, ViewportCommand::Title(_)))
            .count()
    }

    #[test]
    fn test_open_forgets_previous_document_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        std::fs::write(&path, "new file").unwrap();

        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("old secret");
        ctx.memory_mut(|m| m.request_focus(window.text_edit_id));
        frame(&ctx, &mut window, Vec::new(), false, None);
        window.place_cursor(&ctx, 10);
        assert_eq!(stored_cursor(&ctx, &window), Some(10));

        window.dialogs.choices.push_back(SaveChoice::Discard);
        window.dialogs.open_picks.push_back(Some(path));
        frame(&ctx, &mut window, Vec::new(), false, Some(Command::Open));
        assert!(TextEdit::load_state(&ctx, window.text_edit_id).is_none());
        assert_eq!(window.editor.document().text(), "new file");

        frame(&ctx, &mut window, vec![undo_key()], false, None);
        assert_eq!(window.editor.document().text(), "new file");
        assert!(!window.editor.document().modified());
        assert_eq!(window.editor.window_title(), "MyGedit - new.txt");
    }

    #[test]
    fn test_new_forgets_previous_document_history() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("draft");
        frame(&ctx, &mut window, Vec::new(), false, None);
        window.place_cursor(&ctx, 5);

        window.dialogs.choices.push_back(SaveChoice::Discard);
        frame(&ctx, &mut window, Vec::new(), false, Some(Command::New));
        assert!(TextEdit::load_state(&ctx, window.text_edit_id).is_none());

        frame(&ctx, &mut window, vec![undo_key()], false, None);
        assert!(window.editor.document().text().is_empty());
        assert_eq!(window.editor.status().cursor_label(), "Ln 1, Col 1");
    }

    #[test]
    fn test_cancelled_new_keeps_widget_state() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("draft");
        frame(&ctx, &mut window, Vec::new(), false, None);
        window.place_cursor(&ctx, 3);

        window.dialogs.choices.push_back(SaveChoice::Cancel);
        frame(&ctx, &mut window, Vec::new(), false, Some(Command::New));
        assert_eq!(window.editor.document().text(), "draft");
        assert!(TextEdit::load_state(&ctx, window.text_edit_id).is_some());
    }

    #[test]
    fn test_stale_selection_is_clamped() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("abc");
        frame(&ctx, &mut window, Vec::new(), false, None);

        let mut state = TextEdit::load_state(&ctx, window.text_edit_id).unwrap();
        state
            .cursor
            .set_char_range(Some(CCursorRange::two(CCursor::new(2), CCursor::new(9))));
        state.store(&ctx, window.text_edit_id);
        assert_eq!(window.selection(&ctx), 2..3);

        window.clipboard.text = Some("XY".to_string());
        frame(&ctx, &mut window, Vec::new(), false, Some(Command::Paste));
        assert_eq!(window.editor.document().text(), "abXY");
        assert_eq!(stored_cursor(&ctx, &window), Some(4));
    }

    #[test]
    fn test_close_unmodified_goes_through() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        let commands = frame(&ctx, &mut window, Vec::new(), true, None);

        assert!(!commands.contains(&ViewportCommand::CancelClose));
        assert_eq!(window.dialogs.prompts, 0);
    }

    #[test]
    fn test_close_cancel_is_vetoed() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("work");
        window.dialogs.choices.push_back(SaveChoice::Cancel);

        let commands = frame(&ctx, &mut window, Vec::new(), true, None);
        assert!(commands.contains(&ViewportCommand::CancelClose));
        assert_eq!(window.dialogs.prompts, 1);
        assert_eq!(window.editor.document().text(), "work");
        assert!(window.editor.document().modified());
    }

    #[test]
    fn test_quit_approved_closes_without_second_prompt() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("work");
        window.dialogs.choices.push_back(SaveChoice::Discard);

        let commands = frame(&ctx, &mut window, Vec::new(), false, Some(Command::Quit));
        assert!(commands.contains(&ViewportCommand::Close));
        assert_eq!(window.dialogs.prompts, 1);

        // The close request that follows must not ask again.
        let commands = frame(&ctx, &mut window, Vec::new(), true, None);
        assert!(!commands.contains(&ViewportCommand::CancelClose));
        assert_eq!(window.dialogs.prompts, 1);
    }

    #[test]
    fn test_quit_cancelled_stays_open() {
        let ctx = egui::Context::default();
        let mut window = test_window();
        window.editor.document_mut().text_mut().push_str("work");
        window.dialogs.choices.push_back(SaveChoice::Cancel);

        let commands = frame(&ctx, &mut window, Vec::new(), false, Some(Command::Quit));
        assert!(!commands.contains(&ViewportCommand::Close));
        assert!(!window.close_approved);
    }

    #[test]
    fn test_title_sent_only_on_change() {
        let ctx = egui::Context::default();
        let mut window = test_window();

        let commands = frame(&ctx, &mut window, Vec::new(), false, None);
        assert!(commands.contains(&ViewportCommand::Title("MyGedit - Unsaved Document".to_string())));
        assert_eq!(title_count(&commands), 1);

        let commands = frame(&ctx, &mut window, Vec::new(), false, None);
        assert_eq!(title_count(&commands), 0);

        window.editor.document_mut().text_mut().push('x');
        let commands = frame(&ctx, &mut window, Vec::new(), false, None);
        assert!(commands.contains(&ViewportCommand::Title("MyGedit - Unsaved Document*".to_string())));
    }
}
