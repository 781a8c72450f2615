//! Headless-Replay: gespeicherte Zell-Klicks gegen ein JSON-Layout abspielen.
//!
//! Formate:
//! - Layout: `[{ "x": 0, "y": 0, "open": ["East", "West"] }, ...]`
//! - Klicks: `[{ "x": 0, "y": 0, "action": "Select" }, ...]`

use super::{AppController, AppIntent, AppState, PathAction};
use crate::core::{GridCoordinate, GridLayout, LayoutCell, MazeLayout};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Ein Klick aus der Ereignis-Datei
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickStep {
    /// Spalte
    pub x: i32,
    /// Zeile
    pub y: i32,
    /// Hinzufügen oder Entfernen
    pub action: PathAction,
}

impl PickStep {
    /// Angeklickte Zelle
    pub fn coordinate(&self) -> GridCoordinate {
        GridCoordinate::new(self.x, self.y)
    }
}

/// Liest ein Maze-Layout aus JSON.
pub fn parse_layout(json: &str) -> anyhow::Result<GridLayout> {
    let cells: Vec<LayoutCell> = serde_json::from_str(json).context("Layout-JSON fehlerhaft")?;
    Ok(cells.into_iter().collect())
}

/// Liest die Klick-Liste aus JSON.
pub fn parse_picks(json: &str) -> anyhow::Result<Vec<PickStep>> {
    serde_json::from_str(json).context("Ereignis-JSON fehlerhaft")
}

/// Aktiviert die Pfad-Erstellung und spielt alle Klicks der Reihe nach ab.
///
/// Bricht beim ersten fehlerhaften Klick ab; bis dahin angewendete Klicks
/// bleiben im Pfad.
pub fn replay<L>(
    controller: &mut AppController,
    state: &mut AppState,
    layout: &L,
    steps: &[PickStep],
) -> anyhow::Result<()>
where
    L: MazeLayout + ?Sized,
{
    controller.handle_intent(
        state,
        layout,
        AppIntent::PathCreationToggled { enabled: true },
    )?;

    for (index, step) in steps.iter().enumerate() {
        let coordinate = step.coordinate();
        controller
            .handle_intent(
                state,
                layout,
                AppIntent::CellPicked {
                    coordinate,
                    action: step.action,
                },
            )
            .with_context(|| {
                format!("Ereignis {} ({:?} auf {coordinate})", index + 1, step.action)
            })?;
    }

    log::info!("{} Ereignisse abgespielt, {} Elemente", steps.len(), state.path_len());
    Ok(())
}
