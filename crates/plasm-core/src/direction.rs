//! Vector component directions.

use std::fmt;

/// One spatial component of a 3-component vector field.
///
/// Because of staggering, the components of a vector field are stored as
/// three separate distributed arrays. A `Direction` tags which component
/// a registry entry represents; scalar fields carry no direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The x component (index 0).
    X,
    /// The y component (index 1).
    Y,
    /// The z component (index 2).
    Z,
}

impl Direction {
    /// All three directions, in component-index order.
    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];

    /// The component index of this direction (0, 1, or 2).
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The direction for a component index, if it is in `0..=2`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
