use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::edges::Edge;
use crate::frontier::{Frontier, PopPolicy};
use crate::utils;

/// The graph the spanning tree is grown over, as seen from one cell at a time.
///
/// `adjacent` must be pure. It may return cells that are not part of the node set being
/// spanned (e.g. off the edge of a grid); the builder ignores those.
pub trait Adjacency<N> {
    type Neighbours: IntoIterator<Item = N>;

    fn adjacent(&self, cell: N) -> Self::Neighbours;
}

// Any `Fn(N) -> impl IntoIterator<Item = N>` closure or fn item is an adjacency.
impl<N, F, I> Adjacency<N> for F
    where F: Fn(N) -> I,
          I: IntoIterator<Item = N>
{
    type Neighbours = I;

    #[inline]
    fn adjacent(&self, cell: N) -> I {
        self(cell)
    }
}

/// A fast, reproducible random source for generating mazes.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// Grow a random spanning tree over `nodes`.
///
/// One node is taken as the root (whichever the node set yields first) and pushed onto the
/// frontier. Then, until every node is in the tree, a frontier cell is popped per the
/// `policy` and linked to one of its neighbours that is not yet in the tree, chosen uniformly
/// at random. Both ends of the new edge go back onto the frontier. A popped cell with no
/// such neighbour is dead ended and dropped for good.
///
/// Returns the edges in the order they were added: exactly `nodes - 1` of them, every edge
/// joining a cell already in the tree to a newly attached one.
///
/// Panics if the frontier runs dry with nodes left over. That only happens when `adjacency`
/// does not connect the node set.
pub fn random_spanning_tree<N, I, A, R>(nodes: I,
                                        adjacency: &A,
                                        policy: PopPolicy,
                                        rng: &mut R)
                                        -> Vec<Edge<N>>
    where N: Copy + Ord + Hash + Debug,
          I: IntoIterator<Item = N>,
          A: Adjacency<N> + ?Sized,
          R: Rng + ?Sized
{
    let mut remaining = utils::fnv_hashset_from(nodes);
    let nodes_count = remaining.len();

    let root = match remaining.iter().next() {
        Some(&root) => root,
        None => return vec![],
    };
    remaining.remove(&root);

    debug!("spanning {} nodes from root {:?} with {} policy", nodes_count, root, policy);

    // A cell is pushed once when it joins the tree and once more each time it grows a branch,
    // but every growth also retires a pop, so the frontier never holds more than 2 * nodes.
    let mut frontier = Frontier::with_capacity(policy, 2 * nodes_count);
    frontier.push(root);
    let mut tree = Vec::with_capacity(nodes_count - 1);

    while !remaining.is_empty() {

        let node = frontier.pop(rng).unwrap_or_else(|| {
            panic!("Frontier exhausted with {} nodes not in the spanning tree, the adjacency \
                    does not connect them, e.g. {:?}",
                   remaining.len(),
                   remaining.iter().next())
        });

        let candidates = adjacency.adjacent(node)
            .into_iter()
            .filter(|cell| remaining.contains(cell))
            .collect::<SmallVec<[N; 4]>>();

        if let Some(&nbr) = candidates.choose(rng) {
            let edge = Edge::new(node, nbr)
                .expect("a frontier cell is never a remaining node so cannot self link");
            tree.push(edge);
            remaining.remove(&nbr);
            frontier.push(node);
            frontier.push(nbr);
        } else {
            trace!("{:?} is dead ended, retired from the frontier", node);
        }
    }

    debug!("spanning tree complete: {} edges, {} cells left on the frontier",
           tree.len(),
           frontier.len());

    tree
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::frontier::ALL_POLICIES;
    use crate::utils::FnvHashSet;

    // A ring 0 - 1 - ... - (n-1) - 0, cells outside 0..n included to exercise filtering.
    fn ring(n: u32) -> impl Fn(u32) -> Vec<u32> {
        move |cell| vec![(cell + 1) % n, (cell + n - 1) % n, cell + n]
    }

    // Check the edges grow a tree one new cell at a time from a single root.
    fn assert_grows_tree(nodes: &[u32], edges: &[Edge<u32>]) {
        assert_eq!(edges.len(), nodes.len() - 1);
        let mut in_tree: FnvHashSet<u32> = utils::fnv_hashset(nodes.len());

        for (i, edge) in edges.iter().enumerate() {
            let (a, b) = edge.cells();
            assert!(nodes.contains(&a) && nodes.contains(&b));
            if i == 0 {
                in_tree.insert(a);
                in_tree.insert(b);
            } else {
                let a_in = in_tree.contains(&a);
                let b_in = in_tree.contains(&b);
                assert!(a_in != b_in, "edge {:?} does not attach exactly one new cell", edge);
                in_tree.insert(a);
                in_tree.insert(b);
            }
        }
        if !edges.is_empty() {
            assert_eq!(in_tree.len(), nodes.len());
        }
    }

    #[test]
    fn spans_ring_for_every_policy() {
        let nodes = (0..12).collect::<Vec<u32>>();
        for policy in &ALL_POLICIES {
            for seed in 0..20 {
                let mut rng = seeded_rng(seed);
                let edges = random_spanning_tree(nodes.iter().cloned(), &ring(12), *policy, &mut rng);
                assert_grows_tree(&nodes, &edges);
            }
        }
    }

    #[test]
    fn single_node_has_no_edges() {
        let mut rng = seeded_rng(3);
        let edges = random_spanning_tree(vec![42u32], &|_: u32| vec![41u32, 43], PopPolicy::Queue, &mut rng);
        assert!(edges.is_empty());
    }

    #[test]
    fn no_nodes_no_edges() {
        let mut rng = seeded_rng(3);
        let edges = random_spanning_tree(Vec::<u32>::new(), &ring(4), PopPolicy::Stack, &mut rng);
        assert!(edges.is_empty());
    }

    #[test]
    fn duplicate_nodes_are_one_node() {
        let mut rng = seeded_rng(5);
        let edges = random_spanning_tree(vec![0u32, 1, 1, 0], &ring(2), PopPolicy::Random, &mut rng);
        assert_eq!(edges, vec![Edge::new(0, 1).unwrap()]);
    }

    fn complete(cell: u32) -> impl Iterator<Item = u32> {
        (0..8).filter(move |&other| other != cell)
    }

    #[test]
    fn complete_graph_under_stack_is_a_path() {
        // The newest cell always has unclaimed neighbours, so growth never backtracks.
        let nodes = (0..8).collect::<Vec<u32>>();
        let mut rng = seeded_rng(11);
        let edges = random_spanning_tree(nodes.iter().cloned(), &complete, PopPolicy::Stack, &mut rng);
        assert_grows_tree(&nodes, &edges);
        for pair in edges.windows(2) {
            assert!(pair[1].contains(pair[0].first()) || pair[1].contains(pair[0].second()));
        }
    }

    #[test]
    fn complete_graph_under_queue_returns_to_the_root() {
        // root grows a, then queues behind a; root is popped again before a grows.
        let nodes = (0..8).collect::<Vec<u32>>();
        let mut rng = seeded_rng(11);
        let edges = random_spanning_tree(nodes.iter().cloned(), &complete, PopPolicy::Queue, &mut rng);
        assert_grows_tree(&nodes, &edges);

        let root = if edges[1].contains(edges[0].first()) {
            edges[0].first()
        } else {
            edges[0].second()
        };
        assert!(edges[1].contains(root));
        let first_attached = edges[0].other(root).unwrap();
        assert!(edges[2].contains(first_attached));
        assert!(!edges[2].contains(root));
    }

    #[test]
    fn same_seed_same_tree() {
        let nodes = (0..50).collect::<Vec<u32>>();
        for policy in &ALL_POLICIES {
            let a = random_spanning_tree(nodes.iter().cloned(), &ring(50), *policy, &mut seeded_rng(7));
            let b = random_spanning_tree(nodes.iter().cloned(), &ring(50), *policy, &mut seeded_rng(7));
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic(expected = "Frontier exhausted")]
    fn disconnected_adjacency_is_fatal() {
        let mut rng = seeded_rng(1);
        let no_neighbours = |_: u32| Vec::<u32>::new();
        let _ = random_spanning_tree(vec![0u32, 1, 2], &no_neighbours, PopPolicy::Stack, &mut rng);
    }

    #[test]
    #[should_panic(expected = "Frontier exhausted")]
    fn two_islands_is_fatal() {
        let mut rng = seeded_rng(1);
        // {0, 1} and {2, 3} never meet
        let islands = |cell: u32| vec![cell ^ 1];
        let _ = random_spanning_tree(vec![0u32, 1, 2, 3], &islands, PopPolicy::Queue, &mut rng);
    }
}
