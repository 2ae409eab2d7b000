use std::ops::Neg;

use crate::game_state::Square;

/// A (row, column) step between squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.dr == 0) != (self.dc == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dr != 0 && self.dc != 0 && self.dr.abs() == self.dc.abs()
    }

    /// True if `other` runs along the same line, in either sense.
    #[inline]
    pub fn is_parallel(self, other: Direction) -> bool {
        self == other || self == -other
    }

    /// The square `distance` steps from `from`, if it is on the board.
    #[inline]
    pub fn step(self, from: Square, distance: i8) -> Option<Square> {
        from.offset(self.dr * distance, self.dc * distance)
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dr, -self.dc)
    }
}

pub const ORTHOGONAL: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];

pub const DIAGONAL: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

/// Orthogonal rays first, then diagonal ones.
pub const RAYS: [Direction; 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

pub const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(ORTHOGONAL.iter().all(|d| d.is_orthogonal() && !d.is_diagonal()));
        assert!(DIAGONAL.iter().all(|d| d.is_diagonal() && !d.is_orthogonal()));
        assert!(KNIGHT_JUMPS.iter().all(|d| !d.is_diagonal() && !d.is_orthogonal()));
    }

    #[test]
    fn test_parallel() {
        let up = Direction::new(-1, 0);
        assert!(up.is_parallel(Direction::new(1, 0)));
        assert!(up.is_parallel(up));
        assert!(!up.is_parallel(Direction::new(0, 1)));
        assert!(!up.is_parallel(Direction::new(-1, 1)));
    }

    #[test]
    fn test_step() {
        let d4: Square = "d4".parse().unwrap();
        let up_right = Direction::new(-1, 1);
        assert_eq!(up_right.step(d4, 1), "e5".parse::<Square>().ok());
        assert_eq!(up_right.step(d4, 4), "h8".parse::<Square>().ok());
        assert_eq!(up_right.step(d4, 5), None);
    }
}
