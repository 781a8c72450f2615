//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod path_overlay;

pub use options::EditorOptions;
pub use options::{RECOMPUTE_TURNS_ON_INVERT, RECOMPUTE_TURNS_ON_REMOVE};
pub use path_overlay::PathOverlay;
