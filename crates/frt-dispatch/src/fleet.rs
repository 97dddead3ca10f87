//! Fleet execution: many independent jobs over one shared network.
//!
//! Each job owns its train (and therefore its search scratch), so jobs
//! share nothing but the read-only network and the router.  Topology
//! mutation needs `&mut RailNetwork` and thus cannot interleave with a
//! running fleet.
//!
//! With the `parallel` feature the jobs run on the Rayon thread pool;
//! without it they run sequentially in job order.  Results come back in
//! input order either way, and one job's failure never aborts the others.

use frt_net::{RailNetwork, Router};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{DeliveryReport, Dispatcher, DispatchResult, Payload, Train};

/// One unit of fleet work: a train paired with the payload it should move.
pub struct Job {
    pub train:   Train,
    pub payload: Payload,
}

impl Job {
    pub fn new(train: Train, payload: Payload) -> Self {
        Self { train, payload }
    }
}

impl<R: Router> Dispatcher<R> {
    /// Run every job to completion and return per-job results in input
    /// order.
    ///
    /// Jobs are independently schedulable: a started search runs to
    /// completion rather than being preempted, and a job that fails its
    /// pre-flight checks aborts with no side effects on its own train or
    /// payload — and never on anyone else's.
    pub fn execute_fleet(
        &self,
        network: &RailNetwork,
        jobs: &mut [Job],
    ) -> Vec<DispatchResult<DeliveryReport>> {
        #[cfg(feature = "parallel")]
        {
            jobs.par_iter_mut()
                .map(|job| self.execute(network, &mut job.train, &mut job.payload))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            jobs.iter_mut()
                .map(|job| self.execute(network, &mut job.train, &mut job.payload))
                .collect()
        }
    }
}
