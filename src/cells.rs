use std::convert::From;
use std::fmt;

/// A grid cell position.
///
/// Signed so that the cells just outside the grid (the exterior side of the entrance and
/// exit openings, or the out of bounds neighbours of a border cell) are representable.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: i32,
    pub y: i32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                 CompassPrimary::South,
                                                 CompassPrimary::East,
                                                 CompassPrimary::West];

impl Cartesian2DCoordinate {
    pub fn new(x: i32, y: i32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// North is towards y == 0, matching the row order of a rendered maze.
    ///
    /// Returns None if the coordinate is not representable.
    pub fn offset(&self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate { x, y }),
        }
    }

    pub fn manhattan_distance(&self, other: Cartesian2DCoordinate) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs() as u64;
        let dy = (i64::from(self.y) - i64::from(other.y)).abs() as u64;
        dx + dy
    }

    #[inline]
    pub fn is_adjacent(&self, other: Cartesian2DCoordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (i32, i32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
