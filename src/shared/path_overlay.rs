//! Pfad-Overlay als expliziter Übergabevertrag zwischen App und externem Renderer.
//!
//! Lebt im shared-Modul, da `app` es baut und der Host es konsumiert.

use crate::core::{Direction, GridCoordinate};

/// Read-only Daten zum Zeichnen des Pfads in einem Frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverlay {
    /// Pfad-Erstellung aktiv (Zellen-Hervorhebung unter dem Cursor)
    pub active: bool,
    /// Start-Markierung am ersten Element
    pub start: Option<GridCoordinate>,
    /// Linien zwischen aufeinanderfolgenden Elementen, in Pfad-Reihenfolge
    pub segments: Vec<(GridCoordinate, GridCoordinate)>,
    /// End-Markierung am letzten Element
    pub end: Option<GridCoordinate>,
    /// Blickrichtung der End-Markierung, nur bei Sackgassen gesetzt
    pub end_heading: Option<Direction>,
}

impl PathOverlay {
    /// Gibt zurück, ob ein Pfad zum Zeichnen vorhanden ist.
    pub fn has_path(&self) -> bool {
        self.start.is_some()
    }
}
