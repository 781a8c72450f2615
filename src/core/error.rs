//! Fehlertypen der Pfad-Mutationen.

use super::GridCoordinate;
use thiserror::Error;

/// Fehler beim Bearbeiten einer `PathSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// Die Zelle ist bereits Teil des Pfads
    #[error("Zelle {0} ist bereits im Pfad enthalten")]
    AlreadyPresent(GridCoordinate),
    /// Die Zelle ist nicht Teil des Pfads
    #[error("Zelle {0} ist nicht im Pfad enthalten")]
    NotPresent(GridCoordinate),
    /// Das Maze-Layout kennt die Zelle nicht (Pfad passt nicht zum Labyrinth)
    #[error("Keine Layout-Daten für Zelle {0}: Pfad passt nicht zum Labyrinth")]
    MissingExternalData(GridCoordinate),
}

impl PathError {
    /// Die betroffene Zelle
    pub fn coordinate(&self) -> GridCoordinate {
        match *self {
            PathError::AlreadyPresent(c)
            | PathError::NotPresent(c)
            | PathError::MissingExternalData(c) => c,
        }
    }
}
