//! Handler für Pfad-Mutationen und den Erstellungsmodus.

use crate::app::{AppState, PathEvent};
use crate::core::{GridCoordinate, MazeLayout, PathSequence};
use anyhow::Context;

/// Schaltet den Pfad-Erstellungsmodus; der vorhandene Pfad bleibt erhalten.
pub fn set_path_creation(state: &mut AppState, enabled: bool) {
    if state.path_creation_enabled != enabled {
        log::info!(
            "Pfad-Erstellung {}",
            if enabled { "aktiviert" } else { "deaktiviert" }
        );
    }
    state.path_creation_enabled = enabled;
}

/// Gibt ein aufgelöstes Zell-Ereignis an die Session weiter.
pub fn apply_event(state: &mut AppState, event: PathEvent) {
    let outcome = state.session.handle_event(event);
    log::debug!(
        "{:?} {} -> {:?} ({} Elemente)",
        event.action,
        event.coordinate,
        outcome,
        state.path_len()
    );
}

/// Kehrt den Pfad um.
pub fn invert(state: &mut AppState) {
    state.session.invert();
    log::info!("Pfad umgekehrt");
}

/// Verwirft den gesamten Pfad.
pub fn clear(state: &mut AppState) {
    state.session.clear();
    log::info!("Pfad geleert");
}

/// Baut den Pfad aus einer gespeicherten Koordinatenliste neu auf.
///
/// Schlägt das fehl, bleibt der bisherige Pfad unverändert.
pub fn load<L>(
    state: &mut AppState,
    layout: &L,
    coordinates: Vec<GridCoordinate>,
) -> anyhow::Result<()>
where
    L: MazeLayout + ?Sized,
{
    let count = coordinates.len();
    let sequence =
        PathSequence::from_coordinates(coordinates, layout, state.options.turn_policy())
            .context("Gespeicherter Pfad passt nicht zum Labyrinth")?;
    state.session.replace(sequence);
    log::info!("Pfad mit {} Elementen geladen", count);
    Ok(())
}
