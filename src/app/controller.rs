//! Application Controller für zentrale Event-Verarbeitung.

use super::overlay;
use super::{AppCommand, AppIntent, AppState};
use crate::core::MazeLayout;
use crate::shared::PathOverlay;

/// Orchestriert Host-Events und Pfad-Mutationen auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<L>(
        &mut self,
        state: &mut AppState,
        layout: &L,
        intent: AppIntent,
    ) -> anyhow::Result<()>
    where
        L: MazeLayout + ?Sized,
    {
        let commands = super::intent_mapping::map_intent_to_commands(state, layout, intent)?;
        for command in commands {
            self.handle_command(state, layout, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<L>(
        &mut self,
        state: &mut AppState,
        layout: &L,
        command: AppCommand,
    ) -> anyhow::Result<()>
    where
        L: MazeLayout + ?Sized,
    {
        use super::handlers;
        let entry = command.clone();

        match command {
            // === Pfad ===
            AppCommand::SetPathCreation { enabled } => {
                handlers::path::set_path_creation(state, enabled)
            }
            AppCommand::ApplyPathEvent { event } => handlers::path::apply_event(state, event),
            AppCommand::InvertPath => handlers::path::invert(state),
            AppCommand::ClearPath => handlers::path::clear(state),
            AppCommand::LoadPath { coordinates } => {
                handlers::path::load(state, layout, coordinates)?
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)
            }
        }

        // Nur erfolgreich ausgeführte Commands landen im Verlauf
        state.command_log.record(entry);
        Ok(())
    }

    /// Baut das Pfad-Overlay aus dem aktuellen AppState.
    pub fn build_overlay(&self, state: &AppState) -> PathOverlay {
        overlay::build(state)
    }
}
