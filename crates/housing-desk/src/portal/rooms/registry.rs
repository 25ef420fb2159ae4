use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{Room, RoomDraft, RoomId};
use crate::portal::applications::domain::ApplicationStatus;
use crate::portal::error::PortalError;
use crate::portal::store::HousingStore;

/// Service owning the room inventory and its occupancy counters.
pub struct RoomRegistry<S> {
    store: Arc<S>,
}

static ROOM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_room_id() -> RoomId {
    let id = ROOM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RoomId(format!("room-{id:04}"))
}

impl<S> RoomRegistry<S>
where
    S: HousingStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every room with its live occupancy, ordered by room id.
    pub fn list(&self) -> Result<Vec<Room>, PortalError> {
        let tx = self.store.begin()?;
        Ok(tx.rooms()?)
    }

    /// Register a new room. Names are unique after trimming; capacity starts
    /// fully vacant.
    pub fn create(&self, draft: RoomDraft) -> Result<Room, PortalError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(PortalError::Validation(
                "room name must not be blank".to_string(),
            ));
        }
        if draft.capacity == 0 {
            return Err(PortalError::Validation(
                "room capacity must be at least 1".to_string(),
            ));
        }

        let mut tx = self.store.begin()?;
        if tx.room_by_name(&name)?.is_some() {
            return Err(PortalError::Validation(format!(
                "a room named '{name}' already exists"
            )));
        }

        let room = Room {
            id: next_room_id(),
            name,
            description: draft.description,
            image_url: draft.image_url,
            room_type: draft.room_type,
            capacity: draft.capacity,
            occupancy: 0,
        };
        tx.put_room(room.clone())?;
        tx.commit()?;

        info!(room = %room.id.0, %room.name, "room registered");
        Ok(room)
    }

    /// Remove a room and cascade its non-approved applications.
    ///
    /// A room with an approved application still holds a resident, so the
    /// deletion is refused until those applications are resolved.
    pub fn delete(&self, id: &RoomId) -> Result<(), PortalError> {
        let mut tx = self.store.begin()?;
        if tx.room(id)?.is_none() {
            return Err(PortalError::NotFound("room"));
        }

        let linked = tx.applications_for_room(id)?;
        if linked
            .iter()
            .any(|application| application.status == ApplicationStatus::Approved)
        {
            return Err(PortalError::Conflict(
                "cannot delete a room with approved applications".to_string(),
            ));
        }

        for application in &linked {
            tx.remove_application(&application.id)?;
        }
        tx.remove_room(id)?;
        tx.commit()?;

        info!(room = %id.0, cascaded = linked.len(), "room removed");
        Ok(())
    }
}
