//! Abbiegerichtung an einem Pfad-Element aus drei aufeinanderfolgenden Zellen.
//!
//! Reine Ganzzahl-Arithmetik, keine Trigonometrie.

use super::GridCoordinate;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Abbiegerichtung eines Pfad-Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnKind {
    /// Geradeaus (auch Konvention für Start- und End-Element)
    #[default]
    Straight,
    /// Linkskurve
    Left,
    /// Rechtskurve
    Right,
}

impl TurnKind {
    /// Name wie in der Element-Liste des Inspektors
    pub const fn label(self) -> &'static str {
        match self {
            TurnKind::Straight => "STRAIGHT",
            TurnKind::Left => "LEFT",
            TurnKind::Right => "RIGHT",
        }
    }
}

impl fmt::Display for TurnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bestimmt die Abbiegerichtung an `one_back` für das Fenster
/// `two_back → one_back → current`.
///
/// Ablauf:
/// 1. Netto-Versatz über zwei Schritte: `d = two_back - current`
/// 2. `same_sign`: Versatz liegt auf der Hauptdiagonalen (`dx - dy == 0`)
/// 3. `y_changed_first`: der erste Schritt wechselte die Zeile
/// 4. Hauptdiagonale → Rechts wenn zuerst y, sonst Links; Nebendiagonale umgekehrt
/// 5. Zwei volle Zellen entlang einer Achse → Geradeaus (überschreibt 4)
pub fn resolve_turn(
    two_back: GridCoordinate,
    one_back: GridCoordinate,
    current: GridCoordinate,
) -> TurnKind {
    let delta: I64Vec2 = IVec2::from(two_back).as_i64vec2() - IVec2::from(current).as_i64vec2();
    let same_sign = delta.x - delta.y == 0;
    let y_changed_first = two_back.y != one_back.y;

    let bend = match (same_sign, y_changed_first) {
        (true, true) | (false, false) => TurnKind::Right,
        (true, false) | (false, true) => TurnKind::Left,
    };

    let abs = delta.abs();
    if abs.x == 2 || abs.y == 2 {
        TurnKind::Straight
    } else {
        bend
    }
}

/// Wendet `resolve_turn` auf die letzten drei Koordinaten eines Fensters an.
///
/// Mit weniger als zwei Vorgängern gibt es keine Geometrie: Geradeaus.
pub fn resolve_window(window: &[GridCoordinate]) -> TurnKind {
    match window {
        [.., two_back, one_back, current] => resolve_turn(*two_back, *one_back, *current),
        _ => TurnKind::Straight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn test_beispiel_ecke_ergibt_links() {
        // dx = -1, dy = -1 → same_sign; erster Schritt in x → Links
        assert_eq!(resolve_turn(c(0, 0), c(1, 0), c(1, 1)), TurnKind::Left);
    }

    #[test]
    fn test_alle_vier_quadranten() {
        // same_sign, zuerst y → Rechts
        assert_eq!(resolve_turn(c(0, 0), c(0, 1), c(1, 1)), TurnKind::Right);
        // different sign, zuerst x → Rechts
        assert_eq!(resolve_turn(c(0, 0), c(1, 0), c(1, -1)), TurnKind::Right);
        // different sign, zuerst y → Links
        assert_eq!(resolve_turn(c(0, 0), c(0, -1), c(1, -1)), TurnKind::Left);
    }

    #[test]
    fn test_kolineare_laeufe_sind_geradeaus() {
        let origin = c(3, -2);
        let steps = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];
        for step in steps {
            let one = origin.offset(step);
            let two = one.offset(step);
            assert_eq!(resolve_turn(origin, one, two), TurnKind::Straight, "{step}");
        }
    }

    #[test]
    fn test_translationsinvarianz() {
        let triples = [
            (c(0, 0), c(1, 0), c(1, 1)),
            (c(0, 0), c(0, 1), c(1, 1)),
            (c(0, 0), c(1, 0), c(1, -1)),
            (c(0, 0), c(0, -1), c(1, -1)),
            (c(2, 2), c(2, 1), c(1, 1)),
            (c(5, 5), c(4, 5), c(4, 6)),
        ];
        let offsets = [
            IVec2::new(7, 0),
            IVec2::new(0, -9),
            IVec2::new(-13, 21),
            IVec2::new(100, 100),
        ];
        for (a, b, cur) in triples {
            let base = resolve_turn(a, b, cur);
            for offset in offsets {
                assert_eq!(
                    resolve_turn(a.offset(offset), b.offset(offset), cur.offset(offset)),
                    base,
                    "Tripel {a} {b} {cur} mit Offset {offset}"
                );
            }
        }
    }

    #[test]
    fn test_extreme_koordinaten_ueberlaufen_nicht() {
        let (min, max) = (i32::MIN, i32::MAX);

        // dx = 2^32 - 1, dy = 0 → keine Hauptdiagonale, zuerst x → Rechts
        assert_eq!(resolve_turn(c(max, 0), c(0, 0), c(min, 0)), TurnKind::Right);
        // Spiegelung: dx = -(2^32 - 1)
        assert_eq!(resolve_turn(c(min, 0), c(0, 0), c(max, 0)), TurnKind::Right);
        // dx = dy = -(2^32 - 1) → Hauptdiagonale, zuerst y → Rechts
        assert_eq!(
            resolve_turn(c(min, min), c(min, max), c(max, max)),
            TurnKind::Right
        );
        // Zwei Schritte am Rand entlang bleiben geradeaus
        assert_eq!(
            resolve_turn(c(max, min), c(max, min + 1), c(max, min + 2)),
            TurnKind::Straight
        );
        assert_eq!(
            resolve_turn(c(max - 2, max), c(max - 1, max), c(max, max)),
            TurnKind::Straight
        );
    }

    #[test]
    fn test_resolve_window_kurze_fenster_sind_geradeaus() {
        assert_eq!(resolve_window(&[]), TurnKind::Straight);
        assert_eq!(resolve_window(&[c(0, 0)]), TurnKind::Straight);
        assert_eq!(resolve_window(&[c(0, 0), c(1, 0)]), TurnKind::Straight);
        assert_eq!(
            resolve_window(&[c(9, 9), c(0, 0), c(1, 0), c(1, 1)]),
            TurnKind::Left
        );
    }
}
