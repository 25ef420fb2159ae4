//! Student housing portal core.
//!
//! Two collaborating components share one transactional store: the room
//! registry owns the inventory and the application ledger owns the
//! submissions, with room occupancy kept consistent with the set of approved
//! applications across every mutation.

pub mod applications;
pub mod error;
pub mod identity;
pub mod rooms;
pub mod store;

pub use applications::{
    application_router, Application, ApplicationId, ApplicationLedger, ApplicationStatus,
    ApplicationView, UserId,
};
pub use error::PortalError;
pub use identity::{Identity, IdentityError, Role};
pub use rooms::{room_router, Room, RoomDraft, RoomId, RoomRegistry, RoomSummary, RoomType};
pub use store::{HousingStore, MemoryStore, StoreError, StoreTx};
