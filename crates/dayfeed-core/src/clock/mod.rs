//! Live clock.
//!
//! A committed search publishes an immutable [`LocationSnapshot`] into a
//! [`SnapshotSlot`]. The [`LiveClock`] reads the slot once per tick and
//! derives the location's wall-clock time and sun visual from it.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running
//! ```
//!
//! There is no way back to `Idle`: a failed search leaves the last snapshot
//! in place and the clock keeps animating it.

mod live;
mod snapshot;

pub use live::{local_time_of_day, run_clock, ClockFrame, ClockState, LiveClock};
pub use snapshot::{LocationSnapshot, SnapshotSlot};
