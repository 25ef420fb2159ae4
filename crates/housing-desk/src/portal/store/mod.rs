//! Transactional persistence port shared by the registry and the ledger.
//!
//! Neither service touches storage directly: each operation opens a
//! transaction, reads and writes rooms and applications through [`StoreTx`],
//! and commits. A transaction dropped without committing discards every
//! write, which is what makes cross-entity updates (a status write plus an
//! occupancy adjustment) all-or-nothing.

mod memory;

pub use memory::MemoryStore;

use super::applications::domain::{Application, ApplicationId, UserId};
use super::rooms::domain::{Room, RoomId};

/// Failures raised by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction so the registry and ledger can be exercised without a
/// real database.
pub trait HousingStore: Send + Sync {
    /// Open a transaction over a consistent view of rooms and applications.
    ///
    /// Implementations must serialize conflicting transactions: a capacity
    /// predicate evaluated inside a transaction holds until that transaction
    /// commits or is discarded.
    fn begin(&self) -> Result<Box<dyn StoreTx + '_>, StoreError>;
}

/// One unit of work against the store. Writes become visible to other
/// transactions only after [`StoreTx::commit`].
pub trait StoreTx {
    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError>;
    fn room_by_name(&self, name: &str) -> Result<Option<Room>, StoreError>;
    fn rooms(&self) -> Result<Vec<Room>, StoreError>;
    fn put_room(&mut self, room: Room) -> Result<(), StoreError>;
    fn remove_room(&mut self, id: &RoomId) -> Result<bool, StoreError>;

    fn application(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError>;
    fn application_for_user(&self, user: &UserId) -> Result<Option<Application>, StoreError>;
    fn applications(&self) -> Result<Vec<Application>, StoreError>;
    fn applications_for_room(&self, room: &RoomId) -> Result<Vec<Application>, StoreError>;
    fn put_application(&mut self, application: Application) -> Result<(), StoreError>;
    fn remove_application(&mut self, id: &ApplicationId) -> Result<bool, StoreError>;

    /// Publish every write in this transaction atomically.
    fn commit(self: Box<Self>) -> Result<(), StoreError>;
}
