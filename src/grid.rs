//! The rectangular, 4-connected grid topology mazes are carved from.

use std::fmt;
use std::i32;

use error_chain::bail;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, ALL_DIRECTIONS};
use crate::errors::*;
use crate::generators::Adjacency;
use crate::units::{EdgesCount, Height, NodesCount, Width};

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// A validated `width * height` rectangle of cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    width: Width,
    height: Height,
}

impl RectGridDimensions {
    /// Errors unless both sides are at least 1 and every cell, plus the one cell border
    /// around the grid, has an `i32` coordinate.
    pub fn new(width: Width, height: Height) -> Result<RectGridDimensions> {
        let max_side = i32::MAX as usize;
        if width.0 == 0 || height.0 == 0 || width.0 > max_side || height.0 > max_side {
            bail!(ErrorKind::InvalidDimensions(width.0, height.0));
        }
        Ok(RectGridDimensions { width, height })
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    /// Cell count and the number of links in any perfect maze over those cells.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (cells_count, EdgesCount(cells_count.0 - 1))
    }

    /// Is the coordinate within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 &&
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...size.
    /// Returns None if the grid coordinate is invalid.
    pub fn row_major_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn from_row_major_index(&self, index: usize) -> Cartesian2DCoordinate {
        let x = index % self.width.0;
        let y = index / self.width.0;
        Cartesian2DCoordinate::new(x as i32, y as i32)
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter {
            dimensions: *self,
            current_cell_number: 0,
            cells_count: self.size().0,
        }
    }
}

/// Every cell of a grid in row major order.
#[derive(Clone)]
pub struct RectGridCellIter {
    dimensions: RectGridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = self.dimensions.from_row_major_index(self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// All the cells `(x, y)` with `0 <= x < width` and `0 <= y < height`.
pub fn squares(width: Width, height: Height) -> Result<RectGridCellIter> {
    RectGridDimensions::new(width, height).map(|dimensions| dimensions.iter())
}

/// The cells to the North, South, East and West of `coord`.
///
/// No bounds checking against any grid, cells outside the grid are included. Only a
/// coordinate at the very limits of `i32` has fewer than 4.
pub fn neighbours4(coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
    ALL_DIRECTIONS.iter()
        .filter_map(|dir| coord.offset(*dir))
        .collect()
}

/// `neighbours4` as an `Adjacency` for the spanning tree builder.
#[derive(Debug, Copy, Clone, Default)]
pub struct FourConnected;

impl Adjacency<Cartesian2DCoordinate> for FourConnected {
    type Neighbours = CoordinateSmallVec;

    #[inline]
    fn adjacent(&self, cell: Cartesian2DCoordinate) -> CoordinateSmallVec {
        neighbours4(cell)
    }
}
