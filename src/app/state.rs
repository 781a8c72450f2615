//! Application State: Session, Optionen und Modus-Schalter.

use super::{CommandLog, PathEditingSession};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Pfad-Session (besitzt die PathSequence exklusiv)
    pub session: PathEditingSession,
    /// Pfad-Erstellung aktiv; sonst erreichen Zell-Klicks die Session nicht
    pub path_creation_enabled: bool,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den angegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            session: PathEditingSession::with_policy(options.turn_policy()),
            path_creation_enabled: options.path_creation_on_start,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Pfad-Elemente zurück (für UI-Anzeige)
    pub fn path_len(&self) -> usize {
        self.session.sequence().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
