//! Four-way direction algebra: absolute headings and relative turns.
//!
//! Two enums share the same modulo-4 arithmetic but are kept distinct so
//! that absolute headings ([`Dir4`]) and turns relative to a heading
//! ([`Rel4`]) cannot be mixed up: `Dir4 + Rel4` composes a turn onto a
//! heading, and `Dir4 - Dir4` recovers the turn between two headings.

use crate::coord::Coord;
use crate::error::DirectionError;
use std::ops::{Add, Sub};

/// An absolute heading on the grid.
///
/// Discriminants are assigned clockwise (`Up = 0`, `Right = 1`, `Down = 2`,
/// `Left = 3`) so that composing rotations is modulo-4 addition.
///
/// # Examples
///
/// ```
/// use whisker_core::{Coord, Dir4, Rel4};
///
/// assert_eq!(Dir4::Up + Rel4::Right, Dir4::Right);
/// assert_eq!(Dir4::Left - Dir4::Up, Rel4::Left);
/// assert_eq!(Dir4::from_vector(Coord::new(0, -1)), Ok(Dir4::Up));
/// assert!(Dir4::from_vector(Coord::new(1, 1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir4 {
    /// Toward decreasing `y`.
    Up = 0,
    /// Toward increasing `x`.
    Right = 1,
    /// Toward increasing `y`.
    Down = 2,
    /// Toward decreasing `x`.
    Left = 3,
}

impl Dir4 {
    /// All four headings in discriminant order.
    pub const ALL: [Dir4; 4] = [Dir4::Up, Dir4::Right, Dir4::Down, Dir4::Left];

    /// The unit vector for this heading.
    pub fn vector(self) -> Coord {
        match self {
            Dir4::Up => Coord::new(0, -1),
            Dir4::Right => Coord::new(1, 0),
            Dir4::Down => Coord::new(0, 1),
            Dir4::Left => Coord::new(-1, 0),
        }
    }

    /// The heading for a unit vector; partial inverse of [`vector`](Self::vector).
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::InvalidVector`] for anything that is not
    /// one of the four unit vectors — including the zero vector, diagonals,
    /// and longer vectors. Such input is a contract violation on the
    /// caller's side, not a runtime condition.
    pub fn from_vector(v: Coord) -> Result<Dir4, DirectionError> {
        match (v.x, v.y) {
            (0, -1) => Ok(Dir4::Up),
            (1, 0) => Ok(Dir4::Right),
            (0, 1) => Ok(Dir4::Down),
            (-1, 0) => Ok(Dir4::Left),
            (x, y) => Err(DirectionError::InvalidVector { x, y }),
        }
    }

    /// The reverse heading: `self + Rel4::Back`.
    pub fn opposite(self) -> Dir4 {
        self + Rel4::Back
    }

    fn from_index(index: u8) -> Dir4 {
        Dir4::ALL[(index % 4) as usize]
    }
}

/// Compose a relative turn onto an absolute heading, modulo 4.
impl Add<Rel4> for Dir4 {
    type Output = Dir4;

    fn add(self, rhs: Rel4) -> Dir4 {
        Dir4::from_index(self as u8 + rhs as u8)
    }
}

/// The relative turn that rotates from heading `rhs` to heading `self`:
/// `(self - rhs + 4) mod 4`. Non-commutative; right-inverse of the
/// `Dir4 + Rel4` composition.
impl Sub for Dir4 {
    type Output = Rel4;

    fn sub(self, rhs: Dir4) -> Rel4 {
        Rel4::from_index(self as u8 + 4 - rhs as u8)
    }
}

/// A direction relative to the current heading, equivalently a clockwise
/// rotation delta in quarter turns.
///
/// `Front` is the zero rotation, `Right` a quarter turn clockwise, `Back` a
/// half turn, `Left` a quarter turn counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rel4 {
    /// No rotation; straight ahead.
    Front = 0,
    /// Quarter turn clockwise.
    Right = 1,
    /// Half turn; directly behind.
    Back = 2,
    /// Quarter turn counterclockwise.
    Left = 3,
}

impl Rel4 {
    /// All four relative directions in discriminant order. This is also the
    /// exploration policy's fixed scan priority.
    pub const ALL: [Rel4; 4] = [Rel4::Front, Rel4::Right, Rel4::Back, Rel4::Left];

    /// The rotation that undoes this one: `(4 - self) mod 4`.
    pub fn inverse(self) -> Rel4 {
        Rel4::from_index(4 - self as u8)
    }

    fn from_index(index: u8) -> Rel4 {
        Rel4::ALL[(index % 4) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vector_table() {
        assert_eq!(Dir4::Up.vector(), Coord::new(0, -1));
        assert_eq!(Dir4::Right.vector(), Coord::new(1, 0));
        assert_eq!(Dir4::Down.vector(), Coord::new(0, 1));
        assert_eq!(Dir4::Left.vector(), Coord::new(-1, 0));
    }

    #[test]
    fn from_vector_rejects_non_unit_vectors() {
        for v in [
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(-1, 1),
            Coord::new(2, 0),
            Coord::new(0, -3),
        ] {
            assert_eq!(
                Dir4::from_vector(v),
                Err(DirectionError::InvalidVector { x: v.x, y: v.y })
            );
        }
    }

    #[test]
    fn composition() {
        assert_eq!(Dir4::Up + Rel4::Front, Dir4::Up);
        assert_eq!(Dir4::Up + Rel4::Right, Dir4::Right);
        assert_eq!(Dir4::Left + Rel4::Right, Dir4::Up);
        assert_eq!(Dir4::Down + Rel4::Back, Dir4::Up);
        assert_eq!(Dir4::Right + Rel4::Left, Dir4::Up);
    }

    #[test]
    fn subtraction_is_relative_turn() {
        assert_eq!(Dir4::Right - Dir4::Up, Rel4::Right);
        assert_eq!(Dir4::Up - Dir4::Right, Rel4::Left);
        assert_eq!(Dir4::Down - Dir4::Up, Rel4::Back);
        assert_eq!(Dir4::Left - Dir4::Left, Rel4::Front);
    }

    #[test]
    fn opposite_is_involution() {
        for d in Dir4::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn rel_inverse() {
        assert_eq!(Rel4::Front.inverse(), Rel4::Front);
        assert_eq!(Rel4::Right.inverse(), Rel4::Left);
        assert_eq!(Rel4::Back.inverse(), Rel4::Back);
        assert_eq!(Rel4::Left.inverse(), Rel4::Right);
    }

    fn arb_dir() -> impl Strategy<Value = Dir4> {
        prop_oneof![
            Just(Dir4::Up),
            Just(Dir4::Right),
            Just(Dir4::Down),
            Just(Dir4::Left),
        ]
    }

    fn arb_rel() -> impl Strategy<Value = Rel4> {
        prop_oneof![
            Just(Rel4::Front),
            Just(Rel4::Right),
            Just(Rel4::Back),
            Just(Rel4::Left),
        ]
    }

    proptest! {
        #[test]
        fn vector_round_trip(d in arb_dir()) {
            prop_assert_eq!(Dir4::from_vector(d.vector()), Ok(d));
        }

        #[test]
        fn subtraction_right_inverts_addition(d in arb_dir(), r in arb_rel()) {
            prop_assert_eq!((d + r) - d, r);
        }

        #[test]
        fn addition_undone_by_inverse(d in arb_dir(), r in arb_rel()) {
            prop_assert_eq!(d + r + r.inverse(), d);
        }
    }
}
