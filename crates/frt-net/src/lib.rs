//! `frt-net` — station/link network graph and shortest-time routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `RailNetwork` — node/edge arenas, name-unique construction |
//! | [`router`] | `Router` trait, `Route`, `SearchState`, `DijkstraRouter`  |
//! | [`error`]  | `NetError`, `NetResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod graph;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{NetError, NetResult};
pub use graph::RailNetwork;
pub use router::{DijkstraRouter, Route, Router, SearchState};
