//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, PathAction, PathEvent};
use crate::core::{MazeLayout, PathError};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zell-Klicks werden hier über das Maze-Layout aufgelöst; fehlen die
/// Layout-Daten, wird nichts ausgeführt und der Fehler propagiert.
pub fn map_intent_to_commands<L>(
    state: &AppState,
    layout: &L,
    intent: AppIntent,
) -> Result<Vec<AppCommand>, PathError>
where
    L: MazeLayout + ?Sized,
{
    let commands = match intent {
        AppIntent::PathCreationToggled { enabled } => vec![AppCommand::SetPathCreation { enabled }],
        AppIntent::CellPicked { coordinate, action } => {
            if !state.path_creation_enabled {
                log::debug!("Pfad-Erstellung inaktiv, Klick auf {coordinate} verworfen");
                return Ok(Vec::new());
            }

            let Some(open_sides) = layout.open_sides(coordinate) else {
                log::warn!("Kein Element hinzugefügt: Zelle {coordinate} fehlt im Layout");
                return Err(PathError::MissingExternalData(coordinate));
            };

            // Entfernen nur, solange der Pfad Elemente hat
            if action == PathAction::Deselect && state.session.sequence().is_empty() {
                return Ok(Vec::new());
            }

            vec![AppCommand::ApplyPathEvent {
                event: PathEvent {
                    coordinate,
                    open_sides,
                    action,
                },
            }]
        }
        AppIntent::InvertPathRequested => vec![AppCommand::InvertPath],
        AppIntent::ClearPathRequested => vec![AppCommand::ClearPath],
        AppIntent::LoadPathRequested { coordinates } => vec![AppCommand::LoadPath { coordinates }],
        AppIntent::ApplyOptionsRequested { options } => vec![AppCommand::ApplyOptions { options }],
    };

    Ok(commands)
}
