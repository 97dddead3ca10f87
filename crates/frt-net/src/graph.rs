//! Rail network representation.
//!
//! # Data layout
//!
//! Nodes, directed edges, and undirected link records live in parallel
//! arrays owned by [`RailNetwork`] and are addressed by [`NodeId`],
//! [`EdgeId`], and [`LinkId`].  Endpoints are stored as indices, never as
//! owning references, so the node ↔ edge relationship is cycle-free while
//! lookups stay O(1).
//!
//! A successful [`link`](RailNetwork::link) call produces **two** directed
//! edges — one per endpoint, each pointing at the other — plus a single
//! link record.  The link records are the graph-level edge list: they back
//! the name-uniqueness check and reporting, and are never traversed.
//!
//! # Mutation discipline
//!
//! Topology is mutated only through `&mut self` during a setup phase; all
//! routing runs borrow the network immutably, so any number of trains can
//! search the same network concurrently once construction is done.

use rustc_hash::FxHashMap;

use frt_core::{Duration, EdgeId, LinkId, NodeId};

use crate::{NetError, NetResult};

/// Station graph: node arena, directed-edge arena, and link records.
///
/// Construct with [`RailNetwork::new`] and populate via
/// [`add_node`](Self::add_node) / [`link`](Self::link).  Failed operations
/// leave the network untouched.
#[derive(Default)]
pub struct RailNetwork {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    node_name: Vec<String>,
    node_out:  Vec<Vec<EdgeId>>,
    node_ix:   FxHashMap<String, NodeId>,

    // ── Directed edge data (indexed by EdgeId) ────────────────────────────
    edge_from:     Vec<NodeId>,
    edge_to:       Vec<NodeId>,
    edge_duration: Vec<Duration>,
    edge_link:     Vec<LinkId>,

    // ── Undirected link records (indexed by LinkId) ───────────────────────
    link_name:      Vec<String>,
    link_endpoints: Vec<(NodeId, NodeId)>,
    link_duration:  Vec<Duration>,
    link_ix:        FxHashMap<String, LinkId>,
}

impl RailNetwork {
    /// An empty network with no stations or links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of stations and links to reduce
    /// reallocations when bulk-loading a large topology.
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            node_name:      Vec::with_capacity(nodes),
            node_out:       Vec::with_capacity(nodes),
            node_ix:        FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_from:      Vec::with_capacity(links * 2),
            edge_to:        Vec::with_capacity(links * 2),
            edge_duration:  Vec::with_capacity(links * 2),
            edge_link:      Vec::with_capacity(links * 2),
            link_name:      Vec::with_capacity(links),
            link_endpoints: Vec::with_capacity(links),
            link_duration:  Vec::with_capacity(links),
            link_ix:        FxHashMap::with_capacity_and_hasher(links, Default::default()),
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a station and return its `NodeId` (sequential from 0).
    ///
    /// # Errors
    ///
    /// [`NetError::DuplicateNode`] if a station with this name exists; the
    /// node set is unchanged.
    pub fn add_node(&mut self, name: &str) -> NetResult<NodeId> {
        if self.node_ix.contains_key(name) {
            return Err(NetError::DuplicateNode(name.to_owned()));
        }
        let id = NodeId(self.node_name.len() as u32);
        self.node_name.push(name.to_owned());
        self.node_out.push(Vec::new());
        self.node_ix.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Connect stations `a` and `b` with an undirected link taking
    /// `minutes` to traverse in either direction.
    ///
    /// Inserts a directed edge into each endpoint's adjacency and appends
    /// one link record; returns the record's `LinkId`.
    ///
    /// # Errors
    ///
    /// - [`NetError::DuplicateEdge`] if a link with this name exists.
    /// - [`NetError::UnknownNode`] if either endpoint is not in the arena.
    /// - [`NetError::InvalidDuration`] if `minutes < 0` — shortest-path
    ///   correctness depends on non-negative costs.
    ///
    /// On any error no adjacency or record is touched.
    pub fn link(&mut self, name: &str, a: NodeId, b: NodeId, minutes: i64) -> NetResult<LinkId> {
        if self.link_ix.contains_key(name) {
            return Err(NetError::DuplicateEdge(name.to_owned()));
        }
        for node in [a, b] {
            if node.index() >= self.node_name.len() {
                return Err(NetError::UnknownNode(node));
            }
        }
        let duration = Duration::from_signed_minutes(minutes).ok_or(NetError::InvalidDuration {
            link:    name.to_owned(),
            minutes,
        })?;

        let link = LinkId(self.link_name.len() as u32);
        self.push_directed(a, b, duration, link);
        self.push_directed(b, a, duration, link);
        self.link_name.push(name.to_owned());
        self.link_endpoints.push((a, b));
        self.link_duration.push(duration);
        self.link_ix.insert(name.to_owned(), link);
        Ok(link)
    }

    fn push_directed(&mut self, from: NodeId, to: NodeId, duration: Duration, link: LinkId) {
        let edge = EdgeId(self.edge_from.len() as u32);
        self.edge_from.push(from);
        self.edge_to.push(to);
        self.edge_duration.push(duration);
        self.edge_link.push(link);
        self.node_out[from.index()].push(edge);
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    /// Number of **directed** adjacency entries (two per link).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Number of undirected link records.
    pub fn link_count(&self) -> usize {
        self.link_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_name.is_empty()
    }

    // ── Node lookups ──────────────────────────────────────────────────────

    /// Resolve a station name to its id.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.node_ix.get(name).copied()
    }

    /// Name of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range; ids handed out by this network are
    /// always valid.
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.node_out[node.index()].iter().copied()
    }

    /// Out-degree of `node` (number of outgoing directed edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.node_out[node.index()].len()
    }

    // ── Edge lookups ──────────────────────────────────────────────────────

    #[inline]
    pub fn edge_from(&self, edge: EdgeId) -> NodeId {
        self.edge_from[edge.index()]
    }

    #[inline]
    pub fn edge_to(&self, edge: EdgeId) -> NodeId {
        self.edge_to[edge.index()]
    }

    #[inline]
    pub fn edge_duration(&self, edge: EdgeId) -> Duration {
        self.edge_duration[edge.index()]
    }

    /// The undirected link record this directed edge belongs to.
    #[inline]
    pub fn edge_link(&self, edge: EdgeId) -> LinkId {
        self.edge_link[edge.index()]
    }

    // ── Link lookups ──────────────────────────────────────────────────────

    pub fn link_by_name(&self, name: &str) -> Option<LinkId> {
        self.link_ix.get(name).copied()
    }

    pub fn link_name(&self, link: LinkId) -> &str {
        &self.link_name[link.index()]
    }

    pub fn link_endpoints(&self, link: LinkId) -> (NodeId, NodeId) {
        self.link_endpoints[link.index()]
    }

    pub fn link_duration(&self, link: LinkId) -> Duration {
        self.link_duration[link.index()]
    }
}
