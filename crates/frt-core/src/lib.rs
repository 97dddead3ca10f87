//! `frt-core` — foundational types for the `frt` freight routing crates.
//!
//! This crate is a dependency of every other `frt-*` crate.  It intentionally
//! has no `frt-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`, `LinkId`               |
//! | [`units`] | `Duration` (traversal time in minutes)     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EdgeId, LinkId, NodeId};
pub use units::Duration;
