//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen; die Turn-Policy gilt ab der nächsten Mutation.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.session.set_policy(options.turn_policy());
    state.options = options;
}
