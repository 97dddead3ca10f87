//! Capacity-bounded transport agents and their delivery state machine.

use frt_core::NodeId;
use frt_net::{RailNetwork, Route, SearchState};

use crate::Payload;

/// Delivery state machine phase.
///
/// ```text
/// Idle ── execute ──▶ EnRoute ──▶ AtDestination ──▶ Delivered
///   ▲                                                   │
///   └────────────────── reset ──────────────────────────┘
/// ```
///
/// `reset` clears the per-run search scratch and returns the train to
/// `Idle` at its new station; there is no observable resting state between
/// `Delivered` and `Idle`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainPhase {
    /// Positioned at a station with no active job.
    #[default]
    Idle,
    /// Moving hop-by-hop along a computed route.
    EnRoute,
    /// Position equals the payload's destination.
    AtDestination,
    /// Payload handed off; awaiting [`Train::reset`].
    Delivered,
}

/// A capacity-bounded mobile agent.
///
/// The train owns its search scratch ([`SearchState`]), so any number of
/// trains can run against one shared network concurrently without
/// synchronization.  Capacity is fixed at construction; only the position,
/// phase, and scratch change over a train's life.
#[derive(Debug)]
pub struct Train {
    name:     String,
    capacity: u32,
    current:  NodeId,
    phase:    TrainPhase,
    search:   SearchState,
}

impl Train {
    /// An idle train of `capacity` tonnes positioned at `origin`.
    pub fn new(name: &str, capacity: u32, origin: NodeId) -> Self {
        Self {
            name: name.to_owned(),
            capacity,
            current: origin,
            phase: TrainPhase::Idle,
            search: SearchState::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Station the train is currently at.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn phase(&self) -> TrainPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TrainPhase::Idle
    }

    /// Strict capacity test: equal weight leaves no headroom and fails.
    pub fn can_carry(&self, payload: &Payload) -> bool {
        self.capacity > payload.weight()
    }

    /// Read-only view of the last run's search scratch.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Clear the per-run scratch and return to `Idle` at the current
    /// station.  Idempotent; safe to call in any phase.
    pub fn reset(&mut self) {
        self.search.clear();
        self.phase = TrainPhase::Idle;
    }

    // ── Crate-internal lifecycle driven by the executor ───────────────────

    pub(crate) fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    /// Drive the train hop-by-hop along `route`, updating `current` at
    /// every hop, and stop in `AtDestination`.
    pub(crate) fn advance_along(&mut self, network: &RailNetwork, route: &Route) {
        debug_assert_eq!(route.from, self.current);
        self.phase = TrainPhase::EnRoute;
        for &edge in &route.edges {
            self.current = network.edge_to(edge);
        }
        self.phase = TrainPhase::AtDestination;
    }

    /// Mark the hand-off complete.
    pub(crate) fn complete_delivery(&mut self) {
        debug_assert_eq!(self.phase, TrainPhase::AtDestination);
        self.phase = TrainPhase::Delivered;
    }
}
