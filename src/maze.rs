use std::fmt;

use log::debug;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use rand::Rng;

use crate::cells::{Cartesian2DCoordinate, ALL_DIRECTIONS};
use crate::edges::Edge;
use crate::errors::*;
use crate::frontier::PopPolicy;
use crate::generators;
use crate::grid::{CoordinateSmallVec, FourConnected, RectGridDimensions};
use crate::units::{Height, Width};
use crate::utils::{self, FnvHashSet};

pub type MazeEdge = Edge<Cartesian2DCoordinate>;
pub type MazeGraph = Graph<Cartesian2DCoordinate, (), Undirected, u32>;

/// A finished perfect maze.
///
/// The links are the spanning tree's edges. Two openings through the outer wall are always
/// present on top of those: the entrance above the top left cell and the exit below the bottom
/// right cell. They join grid cells to exterior cells so are never part of the tree.
#[derive(Clone)]
pub struct Maze {
    dimensions: RectGridDimensions,
    tree: Vec<MazeEdge>,
    links: FnvHashSet<MazeEdge>,
}

/// Generate a `width * height` perfect maze, growing the passages as directed by `policy`.
pub fn random_maze<R>(width: Width, height: Height, policy: PopPolicy, rng: &mut R) -> Result<Maze>
    where R: Rng + ?Sized
{
    let dimensions = RectGridDimensions::new(width, height)?;
    let tree = generators::random_spanning_tree(dimensions.iter(), &FourConnected, policy, rng);
    debug!("carved {}x{} maze with {} passages", width.0, height.0, tree.len());
    Ok(Maze::new(dimensions, tree))
}

impl Maze {
    fn new(dimensions: RectGridDimensions, tree: Vec<MazeEdge>) -> Maze {
        let links = utils::fnv_hashset_from(tree.iter().cloned());
        Maze { dimensions, tree, links }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    /// The spanning tree links in the order they were carved.
    #[inline]
    pub fn edges(&self) -> &[MazeEdge] {
        &self.tree
    }

    /// Number of internal passages, always `width * height - 1`.
    #[inline]
    pub fn links_count(&self) -> usize {
        self.tree.len()
    }

    /// The opening from the exterior cell above `(0, 0)`.
    pub fn entrance(&self) -> MazeEdge {
        Edge::new(Cartesian2DCoordinate::new(0, -1), Cartesian2DCoordinate::new(0, 0))
            .expect("entrance cells differ")
    }

    /// The opening from the bottom right cell to the exterior cell below it.
    pub fn exit(&self) -> MazeEdge {
        let (x, y) = self.last_cell();
        Edge::new(Cartesian2DCoordinate::new(x, y), Cartesian2DCoordinate::new(x, y + 1))
            .expect("exit cells differ")
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    /// Is there a passage between two cells? The argument order does not matter.
    pub fn is_open(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        match Edge::new(a, b) {
            Ok(edge) => self.links.contains(&edge) || edge == self.entrance() || edge == self.exit(),
            Err(_) => false,
        }
    }

    /// Is there a wall between two 4-adjacent cells.
    #[inline]
    pub fn has_wall(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        !self.is_open(a, b)
    }

    /// Cells that are linked to a particular cell by a passage, the exterior included.
    ///
    /// None if `coord` is not a cell of this maze.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked = ALL_DIRECTIONS.iter()
            .filter_map(|dir| coord.offset(*dir))
            .filter(|&adjacent| self.is_open(coord, adjacent))
            .collect();
        Some(linked)
    }

    /// Every opening: the tree links in carving order then the entrance and exit.
    pub fn iter_links<'a>(&'a self) -> impl Iterator<Item = MazeEdge> + 'a {
        self.tree
            .iter()
            .cloned()
            .chain(Some(self.entrance()))
            .chain(Some(self.exit()))
    }

    /// The tree as a petgraph graph, one node per cell with node indices in row major order.
    /// The entrance and exit are not included as they lead off the grid.
    pub fn to_graph(&self) -> MazeGraph {
        let (nodes, edges) = self.dimensions.graph_size();
        let mut graph = MazeGraph::with_capacity(nodes.0, edges.0);
        for coord in self.dimensions.iter() {
            let _ = graph.add_node(coord);
        }
        for edge in &self.tree {
            let (a, b) = edge.cells();
            if let (Some(a_index), Some(b_index)) = (self.dimensions.row_major_index(a),
                                                     self.dimensions.row_major_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    fn last_cell(&self) -> (i32, i32) {
        // dimensions are validated to fit in i32
        (self.width().0 as i32 - 1, self.height().0 as i32 - 1)
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Maze :: width: {}, height: {}, links: {:?}",
               self.width().0, self.height().0, self.tree)
    }
}
