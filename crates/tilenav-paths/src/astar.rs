//! A* shortest-path search with a linear-scan frontier.
//!
//! The frontier is a plain `Vec` kept in insertion order. Each iteration
//! scans it for the smallest `f` using a strict `<`, so among equal-`f`
//! entries the one inserted first wins. Relaxation also uses a strict
//! comparison: a path of equal cost never replaces the parent found first.
//! Together these make the returned route a pure function of the grid and
//! the neighbor enumeration order.

use tilenav_core::{Point, Range};

use crate::nodes::{SearchNode, SearchNodes};
use crate::path::Path;
use crate::traits::AstarPather;

/// Lifecycle of an [`AstarSearch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Created, not run yet.
    Idle,
    /// Inside [`AstarSearch::run`].
    Running,
    /// The goal was selected from the frontier.
    Succeeded,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl SearchState {
    /// Whether the search has finished.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted)
    }
}

/// One A* run from `start` to `goal`.
///
/// Node state is allocated on construction and owned by the search, so
/// nothing is shared between two searches.
pub struct AstarSearch<'a, P: AstarPather> {
    pather: &'a P,
    start: Point,
    goal: Point,
    nodes: SearchNodes,
    frontier: Vec<usize>,
    in_frontier: Vec<bool>,
    settled: Vec<bool>,
    expanded: usize,
    state: SearchState,
}

impl<'a, P: AstarPather> AstarSearch<'a, P> {
    /// Prepare a search over `bounds`.
    ///
    /// Returns `None` if `start` or `goal` lies outside `bounds`. `bounds`
    /// only sizes the node arrays: cells the pather never yields as
    /// neighbors stay unreachable.
    pub fn new(pather: &'a P, bounds: Range, start: Point, goal: Point) -> Option<Self> {
        let nodes = SearchNodes::new(bounds);
        let start_idx = nodes.idx(start)?;
        nodes.idx(goal)?;

        let len = nodes.len();
        let mut search = Self {
            pather,
            start,
            goal,
            nodes,
            frontier: Vec::new(),
            in_frontier: vec![false; len],
            settled: vec![false; len],
            expanded: 0,
            state: SearchState::Idle,
        };

        let f = pather.estimate(start, goal);
        let node = search.nodes.at_mut(start_idx);
        node.g = 0;
        node.f = f;
        node.parent = None;
        search.frontier.push(start_idx);
        search.in_frontier[start_idx] = true;
        Some(search)
    }

    /// Run the search to completion and return the terminal state.
    ///
    /// Calling `run` on a finished search returns its state unchanged.
    pub fn run(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = SearchState::Running;

        let goal_idx = self.nodes.idx(self.goal);
        let mut nbuf = Vec::with_capacity(4);

        let outcome = 'search: loop {
            let Some(pos) = self.select() else {
                break 'search SearchState::Exhausted;
            };
            let ci = self.frontier[pos];

            if Some(ci) == goal_idx {
                break 'search SearchState::Succeeded;
            }

            self.frontier.remove(pos);
            self.in_frontier[ci] = false;
            self.settled[ci] = true;
            self.expanded += 1;

            let current = *self.nodes.at(ci);
            let current_point = self.nodes.point(ci);
            log::trace!(
                "astar: expand {current_point} g={} f={}",
                current.g,
                current.f
            );

            nbuf.clear();
            self.pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.nodes.idx(np) else {
                    continue;
                };
                if self.settled[ni] {
                    continue;
                }
                if !self.in_frontier[ni] {
                    self.frontier.push(ni);
                    self.in_frontier[ni] = true;
                }

                let candidate_g = current.g + 1;
                if candidate_g >= self.nodes.at(ni).g {
                    continue;
                }
                let f = candidate_g + self.pather.estimate(np, self.goal);
                let n = self.nodes.at_mut(ni);
                n.parent = Some(current_point);
                n.g = candidate_g;
                n.f = f;
            }
        };
        self.state = outcome;

        log::debug!(
            "astar: {} -> {} {:?} after {} expansions, path length {}",
            self.start,
            self.goal,
            self.state,
            self.expanded,
            self.path_len()
        );
        self.state
    }

    /// Cells on the found route, counted along the parent chain.
    fn path_len(&self) -> usize {
        if self.state != SearchState::Succeeded {
            return 0;
        }
        let mut len = 1;
        let mut cur = self.nodes.get(self.goal).and_then(|n| n.parent);
        while let Some(p) = cur {
            len += 1;
            cur = self.nodes.get(p).and_then(|n| n.parent);
        }
        len
    }

    /// Frontier position of the entry with the smallest `f`; the first one
    /// scanned wins ties.
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (pos, &idx) in self.frontier.iter().enumerate() {
            let f = self.nodes.at(idx).f;
            match best {
                Some((_, best_f)) if f >= best_f => {}
                _ => best = Some((pos, f)),
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of cells moved to the settled set.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Search state of cell `p`, or `None` if out of range.
    pub fn node(&self, p: Point) -> Option<&SearchNode> {
        self.nodes.get(p)
    }

    /// The route found, or an empty path unless the search succeeded.
    pub fn path(&self) -> Path {
        match self.state {
            SearchState::Succeeded => Path::from_parents(&self.nodes, self.goal),
            _ => Path::empty(),
        }
    }
}

/// Compute the shortest path from `from` to `to` using A*.
///
/// Returns the full path (including both endpoints), or an empty path if no
/// route exists or either endpoint lies outside `bounds`. For a [`NavGrid`]
/// pather, endpoints inside `bounds` but off the grid give an empty path.
///
/// [`NavGrid`]: tilenav_core::NavGrid
pub fn astar_path<P: AstarPather>(pather: &P, bounds: Range, from: Point, to: Point) -> Path {
    let Some(mut search) = AstarSearch::new(pather, bounds, from, to) else {
        return Path::empty();
    };
    search.run();
    search.path()
}
