use crate::core::{GridCoordinate, OpenSides};
use serde::{Deserialize, Serialize};

/// Art der Zell-Interaktion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathAction {
    /// Primärtaste: Zelle an den Pfad anhängen
    Select,
    /// Sekundärtaste: Zelle aus dem Pfad entfernen
    Deselect,
}

/// Aufgelöstes Zell-Ereignis inklusive der offenen Seiten aus dem Maze-Layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEvent {
    /// Betroffene Zelle
    pub coordinate: GridCoordinate,
    /// Offene Seiten der Zelle
    pub open_sides: OpenSides,
    /// Anhängen oder Entfernen
    pub action: PathAction,
}

impl PathEvent {
    /// Ereignis für die Primärtaste
    pub fn select(coordinate: GridCoordinate, open_sides: OpenSides) -> Self {
        Self {
            coordinate,
            open_sides,
            action: PathAction::Select,
        }
    }

    /// Ereignis für die Sekundärtaste
    pub fn deselect(coordinate: GridCoordinate, open_sides: OpenSides) -> Self {
        Self {
            coordinate,
            open_sides,
            action: PathAction::Deselect,
        }
    }
}
