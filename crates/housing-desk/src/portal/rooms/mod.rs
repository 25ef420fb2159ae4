//! Room inventory: bookable rooms and their live occupancy counters.

pub mod domain;
pub mod registry;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{Room, RoomDraft, RoomId, RoomSummary, RoomType};
pub use registry::RoomRegistry;
pub use router::room_router;
