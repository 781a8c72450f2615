use super::PathEvent;
use crate::core::GridCoordinate;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pfad-Erstellungsmodus setzen
    SetPathCreation { enabled: bool },
    /// Aufgelöstes Zell-Ereignis an die Session weitergeben
    ApplyPathEvent { event: PathEvent },
    /// Pfad umkehren
    InvertPath,
    /// Pfad leeren
    ClearPath,
    /// Pfad aus Koordinatenliste neu aufbauen
    LoadPath { coordinates: Vec<GridCoordinate> },
    /// Optionen übernehmen (inkl. Turn-Policy)
    ApplyOptions { options: EditorOptions },
}
