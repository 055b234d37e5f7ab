//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod session;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Felder, Karte, Sessions).
pub mod state;
pub mod use_cases;

pub use collaborators::{FieldStore, InMemoryFieldStore, LocalSnapshotProvider, SnapshotProvider};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use session::{DrawControlEvent, DrawingMode, LiveFeedback};
pub use state::{AppState, DrawingModeKind, DrawingState, ImportState, UiState, ViewState};
