//! User-invocable commands, their labels, shortcuts and menu placement.

use egui::{Key, KeyboardShortcut, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Cut,
    Copy,
    Paste,
    Quit,
    About,
}

/// One entry of a menu or the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Command(Command),
    Separator,
}

pub const FILE_MENU: &[MenuItem] = &[
    MenuItem::Command(Command::New),
    MenuItem::Command(Command::Open),
    MenuItem::Command(Command::Save),
    MenuItem::Command(Command::SaveAs),
    MenuItem::Separator,
    MenuItem::Command(Command::Quit),
];

pub const EDIT_MENU: &[MenuItem] = &[
    MenuItem::Command(Command::Cut),
    MenuItem::Command(Command::Copy),
    MenuItem::Command(Command::Paste),
];

pub const HELP_MENU: &[MenuItem] = &[MenuItem::Command(Command::About)];

pub const TOOLBAR: &[MenuItem] = &[
    MenuItem::Command(Command::New),
    MenuItem::Command(Command::Open),
    MenuItem::Command(Command::Save),
    MenuItem::Separator,
    MenuItem::Command(Command::Cut),
    MenuItem::Command(Command::Copy),
    MenuItem::Command(Command::Paste),
];

/// Commands whose shortcuts the window consumes itself, in match order.
///
/// Save As comes before Save: egui matches shortcuts logically, so an
/// extra Shift would otherwise still trigger Save.
/// Cut/Copy/Paste are handled by the text widget.
pub const WINDOW_SHORTCUTS: &[Command] = &[
    Command::New,
    Command::Open,
    Command::SaveAs,
    Command::Save,
    Command::Quit,
];

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open...",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::Quit => "Quit",
            Command::About => "About",
        }
    }

    /// Short label with an icon for the toolbar.
    pub fn toolbar_label(self) -> &'static str {
        match self {
            Command::New => "🗋 New",
            Command::Open => "📂 Open",
            Command::Save => "💾 Save",
            Command::Cut => "✂ Cut",
            Command::Copy => "📋 Copy",
            Command::Paste => "📥 Paste",
            other => other.label(),
        }
    }

    pub fn shortcut(self) -> Option<KeyboardShortcut> {
        let cmd = Modifiers::COMMAND;
        let key = match self {
            Command::New => Key::N,
            Command::Open => Key::O,
            Command::Save => Key::S,
            Command::SaveAs => return Some(KeyboardShortcut::new(cmd | Modifiers::SHIFT, Key::S)),
            Command::Cut => Key::X,
            Command::Copy => Key::C,
            Command::Paste => Key::V,
            Command::Quit => Key::Q,
            Command::About => return None,
        };
        Some(KeyboardShortcut::new(cmd, key))
    }
}
