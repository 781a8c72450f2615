//! Geordnete Pfad-Sequenz mit Formen- und Abbiege-Klassifikation je Element.
//!
//! Die Reihenfolge ist immer die Einfüge-Reihenfolge der Zellen und wird nie
//! nach Koordinaten sortiert. `IndexMap` liefert dafür geordnete Einträge plus
//! Hash-Index für O(1)-Duplikatprüfung.

use super::{
    classify, resolve_turn, GridCoordinate, MazeLayout, OpenSides, PathError, SegmentShape,
    TurnKind,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Regelt, ob Abbiegerichtungen nach strukturellen Änderungen neu berechnet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPolicy {
    /// Nachbarn einer entfernten Zelle neu auflösen
    pub recompute_on_remove: bool,
    /// Nach dem Umkehren alle Elemente neu auflösen (sonst bleiben die alten Werte stehen)
    pub recompute_on_invert: bool,
}

impl Default for TurnPolicy {
    fn default() -> Self {
        Self {
            recompute_on_remove: true,
            recompute_on_invert: false,
        }
    }
}

impl TurnPolicy {
    /// Verhalten des ursprünglichen Editors: nach Mutationen wird nichts neu berechnet
    pub const fn literal() -> Self {
        Self {
            recompute_on_remove: false,
            recompute_on_invert: false,
        }
    }

    /// Alle Abbiegerichtungen bleiben stets konsistent mit der Geometrie
    pub const fn eager() -> Self {
        Self {
            recompute_on_remove: true,
            recompute_on_invert: true,
        }
    }
}

/// Ein Element des Pfads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    /// Zelle im Grid
    pub coordinate: GridCoordinate,
    /// Offene Seiten der Zelle (vom Maze-Layout geliefert)
    pub open_sides: OpenSides,
    /// Form der Zelle, einmalig beim Anlegen bestimmt
    pub shape: SegmentShape,
    /// Abbiegerichtung an diesem Element (Start und Ende: Geradeaus)
    pub turn: TurnKind,
}

impl PathElement {
    /// Erstellt ein neues Element und klassifiziert seine Form
    pub fn new(coordinate: GridCoordinate, open_sides: OpenSides) -> Self {
        Self {
            coordinate,
            open_sides,
            shape: classify(open_sides),
            turn: TurnKind::Straight,
        }
    }
}

impl fmt::Display for PathElement {
    /// Format der Element-Liste: `"{x} {y} = {shape} turn {turn}"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} turn {}",
            self.coordinate.x, self.coordinate.y, self.shape, self.turn
        )
    }
}

/// Geordnete Sammlung der Pfad-Elemente, ohne doppelte Koordinaten
#[derive(Debug, Clone, Default)]
pub struct PathSequence {
    elements: IndexMap<GridCoordinate, PathElement>,
    policy: TurnPolicy,
}

impl PathSequence {
    /// Erstellt einen leeren Pfad mit Standard-Policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen leeren Pfad mit der angegebenen Policy
    pub fn with_policy(policy: TurnPolicy) -> Self {
        Self {
            elements: IndexMap::new(),
            policy,
        }
    }

    /// Baut einen Pfad aus einer gespeicherten Koordinatenliste wieder auf.
    ///
    /// Jede Zelle wird im Layout nachgeschlagen; fehlt eine, passt der Pfad nicht
    /// zum Labyrinth (`MissingExternalData`).
    pub fn from_coordinates<I, L>(
        coordinates: I,
        layout: &L,
        policy: TurnPolicy,
    ) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = GridCoordinate>,
        L: MazeLayout + ?Sized,
    {
        let mut sequence = Self::with_policy(policy);
        for coordinate in coordinates {
            let open_sides = layout
                .open_sides(coordinate)
                .ok_or(PathError::MissingExternalData(coordinate))?;
            sequence.append(coordinate, open_sides)?;
        }
        Ok(sequence)
    }

    /// Aktive Policy
    pub fn policy(&self) -> TurnPolicy {
        self.policy
    }

    /// Ersetzt die Policy (wirkt erst ab der nächsten Mutation)
    pub fn set_policy(&mut self, policy: TurnPolicy) {
        self.policy = policy;
    }

    /// Hängt eine Zelle als neues letztes Element an.
    ///
    /// Bei mindestens zwei Vorgängern wird die Abbiegerichtung am bisherigen
    /// letzten Element aufgelöst. Eine bereits enthaltene Zelle lässt den Pfad
    /// unverändert.
    pub fn append(
        &mut self,
        coordinate: GridCoordinate,
        open_sides: OpenSides,
    ) -> Result<(), PathError> {
        if self.elements.contains_key(&coordinate) {
            return Err(PathError::AlreadyPresent(coordinate));
        }

        let element = PathElement::new(coordinate, open_sides);
        log::debug!("Pfad-Element angehängt: {element}");
        self.elements.insert(coordinate, element);

        let len = self.elements.len();
        if len >= 3 {
            self.resolve_turn_at(len - 2);
        }
        Ok(())
    }

    /// Entfernt eine Zelle; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, coordinate: GridCoordinate) -> Result<(), PathError> {
        let Some((index, _, removed)) = self.elements.shift_remove_full(&coordinate) else {
            return Err(PathError::NotPresent(coordinate));
        };
        log::debug!("Pfad-Element entfernt: {removed}");

        if self.policy.recompute_on_remove {
            // Vorgänger hat einen neuen Nachfolger, Nachfolger einen neuen Vorgänger
            if index > 0 {
                self.resolve_turn_at(index - 1);
            }
            if index < self.elements.len() {
                self.resolve_turn_at(index);
            }
        }
        Ok(())
    }

    /// Kehrt die Reihenfolge in-place um.
    pub fn invert(&mut self) {
        self.elements.reverse();
        if self.policy.recompute_on_invert {
            self.recompute_turns();
        }
        log::debug!("Pfad umgekehrt ({} Elemente)", self.elements.len());
    }

    /// Löst die Abbiegerichtung aller Elemente neu auf
    pub fn recompute_turns(&mut self) {
        for index in 0..self.elements.len() {
            self.resolve_turn_at(index);
        }
    }

    /// Entfernt alle Elemente
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Read-only Sicht auf alle Elemente in Pfad-Reihenfolge
    pub fn elements(&self) -> indexmap::map::Values<'_, GridCoordinate, PathElement> {
        self.elements.values()
    }

    /// Koordinaten in Pfad-Reihenfolge (Format für die Persistenz)
    pub fn coordinates(&self) -> Vec<GridCoordinate> {
        self.elements.keys().copied().collect()
    }

    /// Element-Liste im Inspektor-Format, eine Zeile je Element
    pub fn listing(&self) -> Vec<String> {
        self.elements().map(ToString::to_string).collect()
    }

    /// Element zu einer Zelle
    pub fn get(&self, coordinate: GridCoordinate) -> Option<&PathElement> {
        self.elements.get(&coordinate)
    }

    /// Element an einer Position
    pub fn get_index(&self, index: usize) -> Option<&PathElement> {
        self.elements.get_index(index).map(|(_, element)| element)
    }

    /// Position einer Zelle im Pfad
    pub fn index_of(&self, coordinate: GridCoordinate) -> Option<usize> {
        self.elements.get_index_of(&coordinate)
    }

    /// Prüft ob die Zelle im Pfad liegt
    pub fn contains(&self, coordinate: GridCoordinate) -> bool {
        self.elements.contains_key(&coordinate)
    }

    /// Erstes Element (Start des Pfads)
    pub fn first(&self) -> Option<&PathElement> {
        self.elements.first().map(|(_, element)| element)
    }

    /// Letztes Element (Ende des Pfads)
    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last().map(|(_, element)| element)
    }

    /// Anzahl der Elemente
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt zurück ob der Pfad leer ist
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Setzt die Abbiegerichtung an `index` aus seinen beiden Nachbarn.
    /// Start- und End-Element sind per Konvention geradeaus.
    fn resolve_turn_at(&mut self, index: usize) {
        let len = self.elements.len();
        if index >= len {
            return;
        }

        let turn = if index == 0 || index + 1 == len {
            TurnKind::Straight
        } else {
            let coordinate_at = |i: usize| self.elements.get_index(i).map(|(c, _)| *c);
            match (
                coordinate_at(index - 1),
                coordinate_at(index),
                coordinate_at(index + 1),
            ) {
                (Some(two_back), Some(one_back), Some(current)) => {
                    resolve_turn(two_back, one_back, current)
                }
                _ => TurnKind::Straight,
            }
        };

        if let Some((_, element)) = self.elements.get_index_mut(index) {
            element.turn = turn;
        }
    }
}

impl<'a> IntoIterator for &'a PathSequence {
    type Item = &'a PathElement;
    type IntoIter = indexmap::map::Values<'a, GridCoordinate, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}
