//! Zentrale Konfiguration für den Maze-Path-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TurnPolicy;
use serde::{Deserialize, Serialize};

// ── Abbiegerichtungen ───────────────────────────────────────────────

/// Nachbarn einer entfernten Zelle neu auflösen.
pub const RECOMPUTE_TURNS_ON_REMOVE: bool = true;
/// Nach dem Umkehren des Pfads alle Abbiegerichtungen neu auflösen.
pub const RECOMPUTE_TURNS_ON_INVERT: bool = false;

// ── Editor ──────────────────────────────────────────────────────────

/// Pfad-Erstellung ist nach dem Start aktiv.
pub const PATH_CREATION_ON_START: bool = false;

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "maze_path_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `maze_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Abbiegerichtungen ───────────────────────────────────────
    /// Nach dem Entfernen einer Zelle die Nachbarn neu auflösen
    #[serde(default = "default_recompute_turns_on_remove")]
    pub recompute_turns_on_remove: bool,
    /// Nach dem Umkehren alle Elemente neu auflösen (sonst bleiben alte Werte stehen)
    #[serde(default)]
    pub recompute_turns_on_invert: bool,

    // ── Editor ──────────────────────────────────────────────────
    /// Pfad-Erstellung direkt beim Start aktivieren
    #[serde(default)]
    pub path_creation_on_start: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            recompute_turns_on_remove: RECOMPUTE_TURNS_ON_REMOVE,
            recompute_turns_on_invert: RECOMPUTE_TURNS_ON_INVERT,
            path_creation_on_start: PATH_CREATION_ON_START,
        }
    }
}

/// Serde-Default für `recompute_turns_on_remove` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_recompute_turns_on_remove() -> bool {
    RECOMPUTE_TURNS_ON_REMOVE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("maze_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Policy für die Neuberechnung von Abbiegerichtungen in der `PathSequence`.
    pub fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy {
            recompute_on_remove: self.recompute_turns_on_remove,
            recompute_on_invert: self.recompute_turns_on_invert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "maze_path_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_default_policy_loest_nur_beim_entfernen_neu_auf() {
        let policy = EditorOptions::default().turn_policy();
        assert!(policy.recompute_on_remove);
        assert!(!policy.recompute_on_invert);
        assert_eq!(policy, TurnPolicy::default());
    }

    #[test]
    fn test_fehlende_schluessel_verwenden_defaults() {
        let opts: EditorOptions =
            toml::from_str("recompute_turns_on_invert = true").expect("TOML gültig");
        assert!(opts.recompute_turns_on_remove);
        assert!(opts.recompute_turns_on_invert);
        assert!(!opts.path_creation_on_start);
    }

    #[test]
    fn test_speichern_und_laden() {
        let path = temp_file("roundtrip");
        let opts = EditorOptions {
            recompute_turns_on_remove: false,
            recompute_turns_on_invert: true,
            path_creation_on_start: true,
        };

        opts.save_to_file(&path).expect("Speichern erwartet");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_fehlerhafte_datei_liefert_defaults() {
        let path = temp_file("invalid");
        std::fs::write(&path, "recompute_turns_on_remove = \"vielleicht\"").expect("Schreiben");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_fehlende_datei_liefert_defaults() {
        let loaded = EditorOptions::load_from_file(&temp_file("missing"));
        assert_eq!(loaded, EditorOptions::default());
    }
}
