//! Builder für das Pfad-Overlay aus dem AppState.

use crate::app::AppState;
use crate::shared::PathOverlay;

/// Baut ein PathOverlay aus dem aktuellen AppState.
pub fn build(state: &AppState) -> PathOverlay {
    let sequence = state.session.sequence();
    let coordinates = sequence.coordinates();

    let segments = coordinates
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    // Sackgasse am Ende: Markierung zeigt von der Öffnung weg
    let end_heading = sequence
        .last()
        .and_then(|element| element.open_sides.single())
        .map(|open| open.opposite());

    PathOverlay {
        active: state.path_creation_enabled,
        start: sequence.first().map(|e| e.coordinate),
        segments,
        end: sequence.last().map(|e| e.coordinate),
        end_heading,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{AppState, PathEvent};
    use crate::core::{Direction, GridCoordinate, OpenSides};

    #[test]
    fn build_leerer_pfad_hat_keine_markierungen() {
        let state = AppState::new();
        let overlay = build(&state);
        assert!(!overlay.has_path());
        assert!(overlay.segments.is_empty());
        assert_eq!(overlay.end_heading, None);
    }

    #[test]
    fn build_liefert_segmente_in_pfad_reihenfolge() {
        let mut state = AppState::new();
        let a = GridCoordinate::new(3, 0);
        let b = GridCoordinate::new(2, 0);
        let c = GridCoordinate::new(2, 1);
        state
            .session
            .handle_event(PathEvent::select(a, OpenSides::EAST | OpenSides::WEST));
        state
            .session
            .handle_event(PathEvent::select(b, OpenSides::EAST | OpenSides::NORTH));
        state
            .session
            .handle_event(PathEvent::select(c, OpenSides::SOUTH));

        let overlay = build(&state);

        assert_eq!(overlay.start, Some(a));
        assert_eq!(overlay.end, Some(c));
        assert_eq!(overlay.segments, vec![(a, b), (b, c)]);
        // Nur Süden offen → Markierung zeigt nach Norden
        assert_eq!(overlay.end_heading, Some(Direction::North));
    }

    #[test]
    fn build_ohne_sackgasse_keine_blickrichtung() {
        let mut state = AppState::new();
        state.path_creation_enabled = true;
        state.session.handle_event(PathEvent::select(
            GridCoordinate::new(0, 0),
            OpenSides::ALL,
        ));

        let overlay = build(&state);

        assert!(overlay.active);
        assert_eq!(overlay.start, overlay.end);
        assert_eq!(overlay.end_heading, None);
    }
}
