//! Maze Path Editor (headless).
//!
//! Spielt Zell-Klicks aus einer JSON-Datei gegen ein JSON-Maze-Layout ab und
//! gibt die Element-Liste sowie die Koordinaten-Reihenfolge des Pfads aus.

use anyhow::Context;
use maze_path_editor::app::replay;
use maze_path_editor::{AppController, AppState, EditorOptions};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Maze Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let (Some(layout_path), Some(events_path)) = (args.next(), args.next()) else {
        anyhow::bail!("Aufruf: maze-path-editor <layout.json> <events.json>");
    };

    ReplayRunner::new(PathBuf::from(layout_path), PathBuf::from(events_path)).run()
}

struct ReplayRunner {
    layout_path: PathBuf,
    events_path: PathBuf,
}

impl ReplayRunner {
    fn new(layout_path: PathBuf, events_path: PathBuf) -> Self {
        Self {
            layout_path,
            events_path,
        }
    }

    fn run(&self) -> anyhow::Result<()> {
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let layout = replay::parse_layout(&read_file(&self.layout_path)?)
            .with_context(|| self.layout_path.display().to_string())?;
        let steps = replay::parse_picks(&read_file(&self.events_path)?)
            .with_context(|| self.events_path.display().to_string())?;

        log::info!(
            "{} Zellen im Layout, {} Ereignisse",
            layout.len(),
            steps.len()
        );

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();
        replay::replay(&mut controller, &mut state, &layout, &steps)?;

        for line in state.session.sequence().listing() {
            println!("{line}");
        }
        println!(
            "{}",
            serde_json::to_string(&state.session.sequence().coordinates())?
        );

        Ok(())
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))
}
