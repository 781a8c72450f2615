//! Klassifikation der Zell-Konnektivität (gerades Stück, Kurve, T, Kreuzung).

use super::OpenSides;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topologische Form einer Zelle, abgeleitet allein aus ihren offenen Seiten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentShape {
    /// Eine offene Seite oder zwei gegenüberliegende (N+S, E+W)
    Straight,
    /// Zwei benachbarte (nicht kolineare) Seiten
    Corner,
    /// Drei offene Seiten
    TJunction,
    /// Alle vier Seiten offen
    Crossing,
    /// Keine offene Seite
    #[default]
    Isolated,
}

impl SegmentShape {
    /// Kurzzeichen wie in der Element-Liste des Inspektors
    pub const fn symbol(self) -> &'static str {
        match self {
            SegmentShape::Straight => "I",
            SegmentShape::Corner => "L",
            SegmentShape::TJunction => "T",
            SegmentShape::Crossing => "X",
            SegmentShape::Isolated => "O",
        }
    }
}

impl fmt::Display for SegmentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

use SegmentShape::{Corner, Crossing, Isolated, Straight, TJunction};

/// Formen-Tabelle, indexiert über die Bitmaske (N=1, S=2, E=4, W=8)
const SHAPE_TABLE: [SegmentShape; 16] = [
    Isolated,  // ----
    Straight,  // N
    Straight,  // S
    Straight,  // N S
    Straight,  // E
    Corner,    // N E
    Corner,    // S E
    TJunction, // N S E
    Straight,  // W
    Corner,    // N W
    Corner,    // S W
    TJunction, // N S W
    Straight,  // E W
    TJunction, // N E W
    TJunction, // S E W
    Crossing,  // N S E W
];

/// Ordnet eine Menge offener Seiten ihrer Segmentform zu.
///
/// Total über alle 16 Masken, ohne Seiteneffekte.
pub fn classify(open_sides: OpenSides) -> SegmentShape {
    SHAPE_TABLE[usize::from(open_sides.bits())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    /// Referenz-Regeln, unabhängig von der Tabelle formuliert
    fn expected(sides: OpenSides) -> SegmentShape {
        let colinear = sides == (OpenSides::NORTH | OpenSides::SOUTH)
            || sides == (OpenSides::EAST | OpenSides::WEST);
        match sides.count() {
            0 => Isolated,
            1 => Straight,
            2 if colinear => Straight,
            2 => Corner,
            3 => TJunction,
            _ => Crossing,
        }
    }

    #[test]
    fn test_classify_alle_16_masken() {
        for bits in 0u8..16 {
            let sides = OpenSides::from_bits_truncate(bits);
            assert_eq!(classify(sides), expected(sides), "Maske {bits:04b}");
        }
    }

    #[test]
    fn test_classify_explizite_faelle() {
        assert_eq!(classify(OpenSides::NONE), Isolated);
        assert_eq!(classify(OpenSides::NORTH), Straight);
        assert_eq!(classify(OpenSides::WEST), Straight);
        assert_eq!(classify(OpenSides::NORTH | OpenSides::SOUTH), Straight);
        assert_eq!(classify(OpenSides::EAST | OpenSides::WEST), Straight);
        assert_eq!(classify(OpenSides::NORTH | OpenSides::EAST), Corner);
        assert_eq!(classify(OpenSides::NORTH | OpenSides::WEST), Corner);
        assert_eq!(classify(OpenSides::SOUTH | OpenSides::EAST), Corner);
        assert_eq!(classify(OpenSides::SOUTH | OpenSides::WEST), Corner);
        assert_eq!(
            classify(OpenSides::ALL.iter().filter(|d| *d != Direction::South).collect()),
            TJunction
        );
        assert_eq!(classify(OpenSides::ALL), Crossing);
    }

    #[test]
    fn test_classify_symmetrisch_unter_spiegelung() {
        // Spiegelung an der y-Achse tauscht East und West
        let mirror = |sides: OpenSides| -> OpenSides {
            sides
                .iter()
                .map(|d| match d {
                    Direction::East => Direction::West,
                    Direction::West => Direction::East,
                    other => other,
                })
                .collect()
        };
        for bits in 0u8..16 {
            let sides = OpenSides::from_bits_truncate(bits);
            assert_eq!(classify(sides), classify(mirror(sides)));
        }
    }
}
