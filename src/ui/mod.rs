//! UI-Komponenten: Menü, Marker-Panel, Kartenfläche, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod map_view;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Keyboard-Shortcuts und Maus-Input sind in eigene Module ausgelagert.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use map_view::paint_map;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_marker_panel;
pub use status::render_status_bar;
