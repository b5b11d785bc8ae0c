use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// Which frontier cell the spanning tree builder grows from next.
///
/// The choice decides the character of the maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum PopPolicy {
    /// Most recently pushed cell first. Depth first growth: long twisty passages
    /// with few, long dead ends (the recursive backtracker look).
    Stack,
    /// Earliest pushed cell first. Breadth first growth radiating out from the root.
    Queue,
    /// A uniformly random cell. Somewhere between the other two.
    Random,
}

pub const ALL_POLICIES: [PopPolicy; 3] = [PopPolicy::Stack, PopPolicy::Queue, PopPolicy::Random];

impl fmt::Display for PopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            PopPolicy::Stack => "stack",
            PopPolicy::Queue => "queue",
            PopPolicy::Random => "random",
        };
        write!(f, "{}", name)
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ParsePopPolicyError(String);

impl fmt::Display for ParsePopPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown pop policy '{}', expected one of stack, queue or random", self.0)
    }
}

impl ::std::error::Error for ParsePopPolicyError {}

impl FromStr for PopPolicy {
    type Err = ParsePopPolicyError;

    fn from_str(s: &str) -> Result<PopPolicy, ParsePopPolicyError> {
        match s.to_lowercase().as_str() {
            "stack" | "lifo" | "dfs" => Ok(PopPolicy::Stack),
            "queue" | "fifo" | "bfs" => Ok(PopPolicy::Queue),
            "random" | "shuffle" => Ok(PopPolicy::Random),
            _ => Err(ParsePopPolicyError(s.to_string())),
        }
    }
}

/// The tree cells that may still have unclaimed neighbours.
///
/// One double ended buffer backs every policy, only `pop` looks at the policy.
#[derive(Clone)]
pub struct Frontier<N> {
    cells: VecDeque<N>,
    policy: PopPolicy,
}

impl<N> Frontier<N> {
    pub fn new(policy: PopPolicy) -> Frontier<N> {
        Frontier::with_capacity(policy, 0)
    }

    pub fn with_capacity(policy: PopPolicy, capacity: usize) -> Frontier<N> {
        Frontier {
            cells: VecDeque::with_capacity(capacity),
            policy,
        }
    }

    #[inline]
    pub fn policy(&self) -> PopPolicy {
        self.policy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cell: N) {
        self.cells.push_back(cell);
    }

    /// Remove one cell as directed by the policy. None when empty.
    ///
    /// The random policy swaps the chosen cell with the newest one before removing it.
    pub fn pop<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<N> {
        match self.policy {
            PopPolicy::Stack => self.cells.pop_back(),
            PopPolicy::Queue => self.cells.pop_front(),
            PopPolicy::Random => {
                if self.cells.is_empty() {
                    None
                } else {
                    let index = rng.gen_range(0..self.cells.len());
                    self.cells.swap_remove_back(index)
                }
            }
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Frontier<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Frontier :: policy: {}, cells: {:?}", self.policy, self.cells)
    }
}
