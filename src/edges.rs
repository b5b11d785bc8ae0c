use std::fmt;

use crate::errors::*;

/// An unordered link between two distinct cells.
///
/// The cells are stored smallest first so `Edge::new(a, b)` and `Edge::new(b, a)` are the
/// same value, with the same hash.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Edge<N> {
    first: N,
    second: N,
}

impl<N: Ord + Copy> Edge<N> {
    /// Link two cells.
    ///
    /// Errors with `ErrorKind::SelfLink` if `a == b`.
    pub fn new(a: N, b: N) -> Result<Edge<N>> {
        if a < b {
            Ok(Edge { first: a, second: b })
        } else if b < a {
            Ok(Edge { first: b, second: a })
        } else {
            Err(ErrorKind::SelfLink.into())
        }
    }

    #[inline]
    pub fn first(&self) -> N {
        self.first
    }

    #[inline]
    pub fn second(&self) -> N {
        self.second
    }

    #[inline]
    pub fn cells(&self) -> (N, N) {
        (self.first, self.second)
    }

    #[inline]
    pub fn contains(&self, cell: N) -> bool {
        self.first == cell || self.second == cell
    }

    /// The cell at the opposite end of the edge to `cell`, None if `cell` is not on this edge.
    pub fn other(&self, cell: N) -> Option<N> {
        if cell == self.first {
            Some(self.second)
        } else if cell == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}
