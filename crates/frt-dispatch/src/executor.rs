//! The `Dispatcher` — runs one (train, payload) job end to end.

use frt_net::{DijkstraRouter, RailNetwork, Route, Router};

use crate::report::RouteLeg;
use crate::{DeliveryReport, DispatchError, DispatchResult, Payload, Train};

/// Orchestrates one train against one payload.
///
/// # Type parameter
///
/// `R` must implement [`Router`] (default: [`DijkstraRouter`]).  Swap it at
/// compile time for a different routing algorithm with no runtime overhead.
pub struct Dispatcher<R: Router = DijkstraRouter> {
    /// The routing algorithm shared by every job.
    pub router: R,
}

impl Dispatcher<DijkstraRouter> {
    pub fn new() -> Self {
        Self { router: DijkstraRouter }
    }
}

impl Default for Dispatcher<DijkstraRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> Dispatcher<R> {
    pub fn with_router(router: R) -> Self {
        Self { router }
    }

    /// Run the full job: validate, search, load, deliver, report.
    ///
    /// On success the payload is `Delivered`, the train sits at the
    /// destination in `TrainPhase::Delivered`, and the returned
    /// [`DeliveryReport`] is fully populated.  Call [`Train::reset`] to
    /// ready the train for its next payload.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::TrainBusy`] if the train is not idle.
    /// - [`DispatchError::CapacityExceeded`] if `capacity <= weight`.
    /// - [`DispatchError::Routing`] for an empty network or when the
    ///   payload's origin or destination is unreachable from the train.
    ///
    /// All errors abort before any payload or train state is mutated; a
    /// failed routing attempt leaves the train idle with cleared scratch.
    pub fn execute(
        &self,
        network: &RailNetwork,
        train: &mut Train,
        payload: &mut Payload,
    ) -> DispatchResult<DeliveryReport> {
        if !train.is_idle() {
            return Err(DispatchError::TrainBusy(train.name().to_owned()));
        }
        if !train.can_carry(payload) {
            return Err(DispatchError::CapacityExceeded {
                train:    train.name().to_owned(),
                capacity: train.capacity(),
                weight:   payload.weight(),
            });
        }

        // One exhaustive search from the train's station answers both legs.
        let (pickup_route, delivery_route) = {
            let from = train.current();
            let mut run = || -> DispatchResult<(Route, Route)> {
                self.router.search(network, from, train.search_mut())?;
                let pickup = train.search().route_to(network, payload.origin())?;
                let delivery = train.search().route_to(network, payload.destination())?;
                Ok((pickup, delivery))
            };
            match run() {
                Ok(routes) => routes,
                Err(e) => {
                    // Leave no half-built scratch behind.
                    train.reset();
                    return Err(e);
                }
            }
        };

        // Load: record the train's residual headroom on the payload.
        let headroom = train.capacity() - payload.weight();
        payload.load(headroom);

        // Deliver: drive the train hop-by-hop to the destination.
        train.advance_along(network, &delivery_route);
        payload.mark_delivered();
        train.complete_delivery();

        Ok(DeliveryReport {
            train:          train.name().to_owned(),
            origin:         network.node_name(payload.origin()).to_owned(),
            destination:    network.node_name(payload.destination()).to_owned(),
            pickup:         RouteLeg::from_route(network, &pickup_route),
            delivery:       RouteLeg::from_route(network, &delivery_route),
            total_duration: delivery_route.total,
            headroom,
        })
    }
}
