//! `HomeView` implementations used by the HTTP surface

mod events;
mod snapshot;

pub use events::{EventView, ViewEvent};
pub use snapshot::{HomeSnapshot, SnapshotView};
