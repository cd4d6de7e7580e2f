//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod editor;
mod session;
mod view;

pub use app_state::AppState;
pub use dialogs::UiState;
pub use editor::PlacementMode;
pub use session::SessionState;
pub use view::ViewState;
