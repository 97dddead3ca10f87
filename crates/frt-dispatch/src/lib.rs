//! `frt-dispatch` — trains, payloads, and the delivery executor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`payload`]  | `Payload`, `PayloadStatus`                               |
//! | [`train`]    | `Train`, `TrainPhase` delivery state machine             |
//! | [`executor`] | `Dispatcher<R>` — one (train, payload) job end to end    |
//! | [`fleet`]    | `execute_fleet` — independent jobs over one network      |
//! | [`report`]   | `DeliveryReport`, `RouteLeg` — the result contract       |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                     |
//!
//! # Delivery lifecycle
//!
//! A job runs one capacity-checked train against one payload:
//!
//! 1. `Dispatcher::execute` validates the train is idle and strictly has
//!    capacity for the payload's weight.
//! 2. One exhaustive shortest-time search runs from the train's current
//!    station; the pickup leg (to the payload's origin) and the delivery
//!    leg (to its destination) are both reconstructed from it.
//! 3. Loading records the train's residual headroom on the payload, the
//!    train advances hop-by-hop along the delivery leg, and the payload is
//!    marked delivered.
//! 4. The train is left in `Delivered` with its search scratch intact for
//!    inspection; [`Train::reset`] clears the scratch and returns it to
//!    `Idle`, ready for the next payload.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Fleet jobs run on the Rayon thread pool.            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod executor;
pub mod fleet;
pub mod payload;
pub mod report;
pub mod train;


pub use error::{DispatchError, DispatchResult};
pub use executor::Dispatcher;
pub use fleet::Job;
pub use payload::{Payload, PayloadStatus};
pub use report::{DeliveryReport, RouteLeg};
pub use train::{Train, TrainPhase};
