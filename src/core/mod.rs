//! Core-Domänentypen: Grid, Segmentformen, Abbiegerichtungen und die Pfad-Sequenz.

pub mod error;
pub mod grid;
pub mod maze_layout;
/// Geordneter Pfad durch das Labyrinth
///
/// - PathSequence: Container aller Pfad-Elemente in Einfüge-Reihenfolge
/// - PathElement: Zelle mit Form und Abbiegerichtung
/// - TurnPolicy: Neuberechnung nach Entfernen/Umkehren
pub mod path_sequence;
pub mod topology;
pub mod turn;

pub use error::PathError;
pub use grid::{Direction, GridCoordinate, OpenSides};
pub use maze_layout::{GridLayout, LayoutCell, MazeLayout};
pub use path_sequence::{PathElement, PathSequence, TurnPolicy};
pub use topology::{classify, SegmentShape};
pub use turn::{resolve_turn, resolve_window, TurnKind};
