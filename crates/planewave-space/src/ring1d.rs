//! 1D ring lattice (always-wrap periodic boundary).

use crate::error::SpaceError;

/// Fold a signed index onto `0..len` periodically.
///
/// `wrap(-1, len)` is `len - 1` and `wrap(len, len)` is `0`. `len` must be
/// non-zero.
///
/// # Examples
///
/// ```
/// use planewave_space::wrap;
///
/// assert_eq!(wrap(-1, 11), 10);
/// assert_eq!(wrap(11, 11), 0);
/// assert_eq!(wrap(4, 11), 4);
/// ```
#[inline]
pub fn wrap(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// A one-dimensional ring of cells (periodic boundary).
///
/// Cell `i` has neighbours `wrap(i - 1)` and `wrap(i + 1)`, so cell `0`
/// and cell `len - 1` are adjacent.
///
/// # Examples
///
/// ```
/// use planewave_space::Ring1D;
///
/// let ring = Ring1D::new(10).unwrap();
/// assert_eq!(ring.len(), 10);
///
/// // Every cell has exactly 2 neighbours (periodic boundary).
/// assert_eq!(ring.neighbours(0), (9, 1));
/// assert_eq!(ring.neighbours(9), (8, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring1D {
    len: usize,
}

impl Ring1D {
    /// Maximum length: neighbour arithmetic is done in `isize`.
    pub const MAX_LEN: usize = isize::MAX as usize;

    /// Create a new ring with `len` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > isize::MAX`.
    pub fn new(len: usize) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::DimensionTooLarge {
                name: "len",
                value: len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { len })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(left, right)` neighbours of cell `i`.
    #[inline]
    pub fn neighbours(&self, i: usize) -> (usize, usize) {
        let i = i as isize;
        (wrap(i - 1, self.len), wrap(i + 1, self.len))
    }

    /// Neighbours of every cell in index order.
    ///
    /// Computed once per simulation so the update loop is a plain gather.
    pub fn neighbour_table(&self) -> Vec<(usize, usize)> {
        (0..self.len).map(|i| self.neighbours(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let s = Ring1D::new(5).unwrap();
        assert_eq!(s.neighbours(2), (1, 3));
    }

    #[test]
    fn neighbours_wrap_left() {
        let s = Ring1D::new(5).unwrap();
        assert_eq!(s.neighbours(0), (4, 1));
    }

    #[test]
    fn neighbours_wrap_right() {
        let s = Ring1D::new(5).unwrap();
        assert_eq!(s.neighbours(4), (3, 0));
    }

    #[test]
    fn neighbours_len_2() {
        let s = Ring1D::new(2).unwrap();
        assert_eq!(s.neighbours(0), (1, 1));
    }

    #[test]
    fn neighbours_len_1_is_self() {
        let s = Ring1D::new(1).unwrap();
        assert_eq!(s.neighbours(0), (0, 0));
    }

    #[test]
    fn neighbour_table_matches_neighbours() {
        let s = Ring1D::new(7).unwrap();
        let table = s.neighbour_table();
        assert_eq!(table.len(), 7);
        for (i, &pair) in table.iter().enumerate() {
            assert_eq!(pair, s.neighbours(i));
        }
    }

    // ── Wrap test ───────────────────────────────────────────────

    #[test]
    fn wrap_folds_both_directions() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(-6, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(12, 5), 2);
    }

    // ── Constructor test ────────────────────────────────────────

    #[test]
    fn new_zero_len_returns_error() {
        assert_eq!(Ring1D::new(0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn new_rejects_len_exceeding_isize_max() {
        assert!(matches!(
            Ring1D::new(isize::MAX as usize + 1),
            Err(SpaceError::DimensionTooLarge { .. })
        ));
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(len in 1usize..200, i in 0usize..200) {
            let i = i % len;
            let s = Ring1D::new(len).unwrap();
            let (left, right) = s.neighbours(i);
            prop_assert_eq!(s.neighbours(right).0, i);
            prop_assert_eq!(s.neighbours(left).1, i);
        }

        #[test]
        fn wrap_is_in_range(i in -10_000isize..10_000, len in 1usize..500) {
            let w = wrap(i, len);
            prop_assert!(w < len);
            prop_assert_eq!((w as isize - i).rem_euclid(len as isize), 0);
        }
    }
}
