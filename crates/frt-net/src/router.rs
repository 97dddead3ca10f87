//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `frt-dispatch` calls routing via the [`Router`] trait, so applications
//! can swap in custom implementations (A*, contraction hierarchies,
//! congestion models) without touching the executor.  The default
//! [`DijkstraRouter`] is sufficient for networks of any realistic size.
//!
//! # Search model
//!
//! A search is **exhaustive single-source**: it relaxes outward from one
//! origin until every reachable station is finalized, filling a
//! caller-owned [`SearchState`].  One search therefore answers route
//! queries for *every* target via [`SearchState::route_to`] — the executor
//! uses this to reconstruct both the pickup leg and the delivery leg of a
//! job from a single run.
//!
//! # Determinism
//!
//! The frontier is an explicit min-heap keyed by `(duration, NodeId)`.
//! The `NodeId` secondary key fixes tie-breaking to node insertion order,
//! so identical networks always produce identical routes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use frt_core::{Duration, EdgeId, NodeId};

use crate::graph::RailNetwork;
use crate::{NetError, NetResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A reconstructed shortest-time route: an ordered list of directed edges
/// and the total traversal duration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Origin station of the route.
    pub from: NodeId,
    /// Target station of the route.
    pub to: NodeId,
    /// Directed edges to traverse in order, origin to target.  Empty when
    /// `from == to`.
    pub edges: Vec<EdgeId>,
    /// Sum of edge durations along the route.
    pub total: Duration,
}

impl Route {
    /// `true` if origin and target are the same station.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of hops (edges traversed).
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    /// The full station sequence, origin first.
    pub fn node_sequence(&self, network: &RailNetwork) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(self.from);
        nodes.extend(self.edges.iter().map(|&e| network.edge_to(e)));
        nodes
    }
}

// ── SearchState ───────────────────────────────────────────────────────────────

/// Per-train search scratch: tentative distances, predecessor edges, and
/// the finalized-station order of the last run.
///
/// The state is owned by the caller (each train carries its own) so
/// concurrent searches over one shared network need no synchronization.
/// [`Router::search`] clears it before seeding — nothing persists from one
/// run into the next — and [`clear`](Self::clear) empties it entirely.
#[derive(Debug, Default)]
pub struct SearchState {
    origin:    NodeId,
    /// Best known duration (minutes) from `origin`; `u64::MAX` = unreached.
    dist:      Vec<u64>,
    /// Edge that reached each station; `EdgeId::INVALID` for unreached.
    prev_edge: Vec<EdgeId>,
    /// Stations in finalization order, origin first.
    finalized: Vec<NodeId>,
    heap:      BinaryHeap<Reverse<(u64, NodeId)>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipe all scratch and size the arrays for `node_count` stations.
    /// Called by [`Router::search`] before seeding.
    pub fn reset(&mut self, node_count: usize) {
        self.origin = NodeId::INVALID;
        self.dist.clear();
        self.dist.resize(node_count, u64::MAX);
        self.prev_edge.clear();
        self.prev_edge.resize(node_count, EdgeId::INVALID);
        self.finalized.clear();
        self.heap.clear();
    }

    /// Drop everything, including the arrays.  After `clear` the state is
    /// indistinguishable from a freshly constructed one.
    pub fn clear(&mut self) {
        self.origin = NodeId::INVALID;
        self.dist.clear();
        self.prev_edge.clear();
        self.finalized.clear();
        self.heap.clear();
    }

    /// `true` when no search result is held.
    pub fn is_cleared(&self) -> bool {
        self.origin == NodeId::INVALID && self.finalized.is_empty()
    }

    /// Origin of the last search, or `NodeId::INVALID` before any run.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Shortest duration from the origin to `node`, if reached.
    pub fn distance_to(&self, node: NodeId) -> Option<Duration> {
        match self.dist.get(node.index()).copied() {
            Some(d) if d != u64::MAX => Some(Duration(d)),
            _ => None,
        }
    }

    /// Stations finalized by the last search, in finalization order
    /// (origin first, then by ascending distance).
    pub fn visited(&self) -> &[NodeId] {
        &self.finalized
    }

    /// Reconstruct the route from the search origin to `target` by walking
    /// predecessor edges backwards.
    ///
    /// # Errors
    ///
    /// [`NetError::Unreachable`] if `target` was never reached (or no
    /// search has run).
    pub fn route_to(&self, network: &RailNetwork, target: NodeId) -> NetResult<Route> {
        let total = self
            .distance_to(target)
            .ok_or(NetError::Unreachable { from: self.origin, to: target })?;

        let mut edges = Vec::new();
        let mut cur = target;
        while cur != self.origin {
            let edge = self.prev_edge[cur.index()];
            edges.push(edge);
            cur = network.edge_from(edge);
        }
        edges.reverse();
        Ok(Route { from: self.origin, to: target, edges, total })
    }

    // ── Internal (crate) mutation used by DijkstraRouter ──────────────────

    fn seed(&mut self, origin: NodeId) {
        self.origin = origin;
        self.dist[origin.index()] = 0;
        self.heap.push(Reverse((0, origin)));
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router instance can serve
/// concurrent fleet jobs; all per-run mutation goes through the
/// caller-owned `SearchState`.
pub trait Router: Send + Sync {
    /// Run a full single-source search from `from`, filling `state`.
    ///
    /// The state is reset first; any previous result is discarded.
    ///
    /// # Errors
    ///
    /// - [`NetError::EmptyNetwork`] if the network has no stations.
    /// - [`NetError::UnknownNode`] if `from` is not in the network.
    fn search(
        &self,
        network: &RailNetwork,
        from: NodeId,
        state: &mut SearchState,
    ) -> NetResult<()>;

    /// Convenience: search from `from` and reconstruct the route to `to`
    /// using a throwaway state.
    fn route(&self, network: &RailNetwork, from: NodeId, to: NodeId) -> NetResult<Route> {
        let mut state = SearchState::new();
        self.search(network, from, &mut state)?;
        state.route_to(network, to)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the station graph.
///
/// Distances are relaxed properly: a neighbor's tentative duration is
/// `dist[frontier] + edge.duration` and is overwritten whenever a shorter
/// path through the current frontier is found, so reported durations are
/// true shortest-path durations, not first-discovery distances.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn search(
        &self,
        network: &RailNetwork,
        from: NodeId,
        state: &mut SearchState,
    ) -> NetResult<()> {
        if network.is_empty() {
            return Err(NetError::EmptyNetwork);
        }
        if from.index() >= network.node_count() {
            return Err(NetError::UnknownNode(from));
        }

        state.reset(network.node_count());
        state.seed(from);

        while let Some(Reverse((cost, node))) = state.heap.pop() {
            // Skip stale heap entries — the node was finalized at a lower cost.
            if cost > state.dist[node.index()] {
                continue;
            }
            state.finalized.push(node);

            for edge in network.out_edges(node) {
                let neighbor = network.edge_to(edge);
                let candidate = cost.saturating_add(network.edge_duration(edge).minutes());

                if candidate < state.dist[neighbor.index()] {
                    state.dist[neighbor.index()] = candidate;
                    state.prev_edge[neighbor.index()] = edge;
                    state.heap.push(Reverse((candidate, neighbor)));
                }
            }
        }

        Ok(())
    }
}
