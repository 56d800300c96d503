//! egui front end: the main window, native dialogs and theme.

pub mod dialogs;
pub mod main_window;
pub mod theme;
