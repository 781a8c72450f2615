//! Schnittstelle zum externen Maze-Layout (liefert die offenen Seiten je Zelle).

use super::{GridCoordinate, OpenSides};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Externe Quelle für die Konnektivität einzelner Zellen.
///
/// Der Kern berechnet Konnektivität nie aus Rohgeometrie, er fragt nur nach.
pub trait MazeLayout {
    /// Offene Seiten der Zelle, `None` wenn das Labyrinth die Zelle nicht kennt
    fn open_sides(&self, coordinate: GridCoordinate) -> Option<OpenSides>;
}

impl<L: MazeLayout + ?Sized> MazeLayout for &L {
    fn open_sides(&self, coordinate: GridCoordinate) -> Option<OpenSides> {
        (**self).open_sides(coordinate)
    }
}

/// Eine Zelle im serialisierbaren Layout-Format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCell {
    /// Spalte
    pub x: i32,
    /// Zeile
    pub y: i32,
    /// Offene Seiten
    pub open: OpenSides,
}

/// In-Memory-Layout für Hosts ohne eigenes Grid und für Tests
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    cells: HashMap<GridCoordinate, OpenSides>,
}

impl GridLayout {
    /// Erstellt ein leeres Layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt (oder ersetzt) die offenen Seiten einer Zelle
    pub fn insert(&mut self, coordinate: GridCoordinate, open_sides: OpenSides) {
        self.cells.insert(coordinate, open_sides);
    }

    /// Builder-Variante von `insert`
    pub fn with_cell(mut self, coordinate: GridCoordinate, open_sides: OpenSides) -> Self {
        self.insert(coordinate, open_sides);
        self
    }

    /// Anzahl bekannter Zellen
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Gibt zurück ob das Layout leer ist
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl MazeLayout for GridLayout {
    fn open_sides(&self, coordinate: GridCoordinate) -> Option<OpenSides> {
        self.cells.get(&coordinate).copied()
    }
}

impl FromIterator<LayoutCell> for GridLayout {
    fn from_iter<T: IntoIterator<Item = LayoutCell>>(iter: T) -> Self {
        let cells = iter
            .into_iter()
            .map(|cell| (GridCoordinate::new(cell.x, cell.y), cell.open))
            .collect();
        Self { cells }
    }
}
