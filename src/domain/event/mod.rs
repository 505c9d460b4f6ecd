//! Club events.

mod aggregate;

pub use aggregate::{Event, EventDetails, EventPatch};
