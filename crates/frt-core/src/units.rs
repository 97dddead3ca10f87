//! Traversal time unit.
//!
//! All link durations and route totals are whole **minutes**.  Using an
//! integer as the canonical unit keeps shortest-path arithmetic exact (no
//! floating-point drift) and comparisons O(1).

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative traversal time in minutes.
///
/// Stored as `u64`: route totals are sums of per-link durations, so the
/// accumulator type is deliberately wider than any single link needs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration(pub u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    /// Construct from a signed minute count, rejecting negatives.
    ///
    /// The network's `link` operation takes `i64` so that a negative
    /// duration is an observable error rather than a silent wrap.
    #[inline]
    pub fn from_signed_minutes(minutes: i64) -> Option<Duration> {
        u64::try_from(minutes).ok().map(Duration)
    }

    /// Minute count as a plain integer.
    #[inline]
    pub fn minutes(self) -> u64 {
        self.0
    }

    /// Saturating addition — route totals never wrap.
    #[inline]
    pub fn saturating_add(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl Add for Duration {
    type Output = Duration;
    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
