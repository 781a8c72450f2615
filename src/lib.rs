//! Maze Path Editor Library.
//! Pfad-Klassifikation (Segmentform, Abbiegerichtung) und Bearbeitungs-Session
//! als Library exportiert für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EventOutcome, PathAction, PathEditingSession,
    PathEvent, PickStep,
};
pub use crate::core::{
    classify, resolve_turn, Direction, GridCoordinate, GridLayout, LayoutCell, MazeLayout,
    OpenSides, PathElement, PathError, PathSequence, SegmentShape, TurnKind, TurnPolicy,
};
pub use shared::{EditorOptions, PathOverlay};
