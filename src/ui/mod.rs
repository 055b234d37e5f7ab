//! UI-Komponenten: Menü, Toolbar, Properties, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_file_dialogs, show_import_progress, show_save_field_dialog};
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
