//! Grid-Grundtypen: Zellkoordinaten, Himmelsrichtungen und offene Seiten.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ganzzahlige Koordinate einer Labyrinth-Zelle (stabiler, eindeutiger Schlüssel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoordinate {
    /// Spalte
    pub x: i32,
    /// Zeile
    pub y: i32,
}

impl GridCoordinate {
    /// Erstellt eine neue Koordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Verschiebt die Koordinate um einen Offset
    pub fn offset(self, delta: IVec2) -> Self {
        Self::from(IVec2::from(self) + delta)
    }

    /// Nachbarzelle in der angegebenen Richtung
    pub fn neighbor(self, direction: Direction) -> Self {
        self.offset(direction.delta())
    }
}

impl From<IVec2> for GridCoordinate {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<GridCoordinate> for IVec2 {
    fn from(c: GridCoordinate) -> Self {
        IVec2::new(c.x, c.y)
    }
}

impl From<(i32, i32)> for GridCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Himmelsrichtung einer Zellseite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +y
    North,
    /// -y
    South,
    /// +x
    East,
    /// -x
    West,
}

impl Direction {
    /// Alle vier Richtungen in Bit-Reihenfolge
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Bit dieser Richtung innerhalb von `OpenSides`
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }

    /// Gegenüberliegende Richtung
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Grid-Offset eines Schritts in diese Richtung
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::South => IVec2::NEG_Y,
            Direction::East => IVec2::X,
            Direction::West => IVec2::NEG_X,
        }
    }
}

/// Menge der begehbaren Nachbarrichtungen einer Zelle (4-Bit-Maske).
///
/// Bit-Layout: North = 1, South = 2, East = 4, West = 8.
/// Wird vom externen Maze-Layout geliefert, nie hier berechnet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct OpenSides(u8);

impl OpenSides {
    /// Keine Seite offen
    pub const NONE: OpenSides = OpenSides(0);
    /// Nur Norden
    pub const NORTH: OpenSides = OpenSides(Direction::North.bit());
    /// Nur Süden
    pub const SOUTH: OpenSides = OpenSides(Direction::South.bit());
    /// Nur Osten
    pub const EAST: OpenSides = OpenSides(Direction::East.bit());
    /// Nur Westen
    pub const WEST: OpenSides = OpenSides(Direction::West.bit());
    /// Alle vier Seiten offen
    pub const ALL: OpenSides = OpenSides(0b1111);

    /// Erstellt die Menge aus einer Bitmaske; Bits oberhalb der vier Richtungen werden verworfen.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Rohe Bitmaske (0..=15)
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Prüft ob die Richtung offen ist
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Öffnet zusätzlich eine Richtung
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Anzahl offener Seiten
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Prüft ob keine Seite offen ist
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterator über die offenen Richtungen in Bit-Reihenfolge
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Die einzige offene Richtung, falls genau eine Seite offen ist (Sackgasse)
    pub fn single(self) -> Option<Direction> {
        if self.count() == 1 {
            self.iter().next()
        } else {
            None
        }
    }
}

impl std::ops::BitOr for OpenSides {
    type Output = OpenSides;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for OpenSides {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<Direction> for OpenSides {
    fn from(direction: Direction) -> Self {
        Self(direction.bit())
    }
}

impl FromIterator<Direction> for OpenSides {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter().fold(OpenSides::NONE, OpenSides::with)
    }
}

impl From<Vec<Direction>> for OpenSides {
    fn from(directions: Vec<Direction>) -> Self {
        directions.into_iter().collect()
    }
}

impl From<OpenSides> for Vec<Direction> {
    fn from(sides: OpenSides) -> Self {
        sides.iter().collect()
    }
}

impl fmt::Debug for OpenSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
