use super::PathAction;
use crate::core::GridCoordinate;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pfad-Erstellungsmodus ein- oder ausschalten
    PathCreationToggled { enabled: bool },
    /// Zelle im Scene-View angeklickt oder überstrichen (Maustaste gedrückt)
    CellPicked {
        coordinate: GridCoordinate,
        action: PathAction,
    },
    /// "Reverse Path" im Inspektor
    InvertPathRequested,
    /// Gesamten Pfad verwerfen
    ClearPathRequested,
    /// Gespeicherten Pfad aus einer Koordinatenliste wiederherstellen
    LoadPathRequested { coordinates: Vec<GridCoordinate> },
    /// Geänderte Optionen übernehmen
    ApplyOptionsRequested { options: EditorOptions },
}
