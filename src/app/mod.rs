//! Application-Layer: Controller, State, Events und Pfad-Session.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod overlay;
pub mod replay;
pub mod session;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Session, Modus, Optionen).
pub mod state;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PathAction, PathEvent};
pub use overlay::build as build_path_overlay;
pub use replay::PickStep;
pub use session::{EventOutcome, PathEditingSession};
pub use state::AppState;
