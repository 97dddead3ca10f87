//! The result contract handed to the calling I/O shell.

use std::fmt;

use frt_core::Duration;
use frt_net::{RailNetwork, Route};

/// One leg of a job, resolved to station and link names for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Ordered station names, start first.
    pub stations: Vec<String>,
    /// Ordered link names traversed.
    pub links: Vec<String>,
    /// Sum of link durations along the leg.
    pub duration: Duration,
}

impl RouteLeg {
    pub(crate) fn from_route(network: &RailNetwork, route: &Route) -> Self {
        Self {
            stations: route
                .node_sequence(network)
                .into_iter()
                .map(|n| network.node_name(n).to_owned())
                .collect(),
            links: route
                .edges
                .iter()
                .map(|&e| network.link_name(network.edge_link(e)).to_owned())
                .collect(),
            duration: route.total,
        }
    }
}

impl fmt::Display for RouteLeg {
    /// Renders the station chain, e.g. `B-C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stations.join("-"))
    }
}

/// Everything the caller needs to report one completed delivery.
///
/// Every field is populated before the executor returns success.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryReport {
    /// Name of the train that ran the job.
    pub train: String,
    /// Payload origin station name.
    pub origin: String,
    /// Payload destination station name.
    pub destination: String,
    /// Leg from the train's starting station to the payload origin.
    pub pickup: RouteLeg,
    /// Leg from the train's starting station to the destination — the
    /// route actually driven.
    pub delivery: RouteLeg,
    /// Duration of the delivered route.
    pub total_duration: Duration,
    /// The train's residual capacity with the payload aboard
    /// (the payload's final `current_weight`).
    pub headroom: u32,
}

impl fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W={}, T={}, N1={}, P1={}, N2={}, P2={}",
            self.total_duration, self.train, self.origin, self.pickup, self.destination, self.delivery,
        )
    }
}
