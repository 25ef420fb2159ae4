use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::{HousingStore, StoreError, StoreTx};
use crate::portal::applications::domain::{Application, ApplicationId, UserId};
use crate::portal::rooms::domain::{Room, RoomId};

/// Process-lifetime store backing the service shell, the CLI demo, and tests.
///
/// A single mutex serializes transactions: `begin` clones the committed state
/// and `commit` swaps the working copy back in, so a capacity check and the
/// occupancy write it guards always observe the same committed snapshot.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

#[derive(Debug, Default, Clone)]
struct State {
    rooms: BTreeMap<RoomId, Room>,
    applications: BTreeMap<ApplicationId, Application>,
}

impl HousingStore for MemoryStore {
    fn begin(&self) -> Result<Box<dyn StoreTx + '_>, StoreError> {
        let committed = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        let working = committed.clone();
        Ok(Box::new(MemoryTx { committed, working }))
    }
}

struct MemoryTx<'a> {
    committed: MutexGuard<'a, State>,
    working: State,
}

impl StoreTx for MemoryTx<'_> {
    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.working.rooms.get(id).cloned())
    }

    fn room_by_name(&self, name: &str) -> Result<Option<Room>, StoreError> {
        Ok(self
            .working
            .rooms
            .values()
            .find(|room| room.name == name)
            .cloned())
    }

    fn rooms(&self) -> Result<Vec<Room>, StoreError> {
        Ok(self.working.rooms.values().cloned().collect())
    }

    fn put_room(&mut self, room: Room) -> Result<(), StoreError> {
        self.working.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    fn remove_room(&mut self, id: &RoomId) -> Result<bool, StoreError> {
        Ok(self.working.rooms.remove(id).is_some())
    }

    fn application(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError> {
        Ok(self.working.applications.get(id).cloned())
    }

    fn application_for_user(&self, user: &UserId) -> Result<Option<Application>, StoreError> {
        Ok(self
            .working
            .applications
            .values()
            .find(|application| application.user_id == *user)
            .cloned())
    }

    fn applications(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self.working.applications.values().cloned().collect())
    }

    fn applications_for_room(&self, room: &RoomId) -> Result<Vec<Application>, StoreError> {
        Ok(self
            .working
            .applications
            .values()
            .filter(|application| application.room_id == *room)
            .cloned()
            .collect())
    }

    fn put_application(&mut self, application: Application) -> Result<(), StoreError> {
        self.working
            .applications
            .insert(application.id.clone(), application);
        Ok(())
    }

    fn remove_application(&mut self, id: &ApplicationId) -> Result<bool, StoreError> {
        Ok(self.working.applications.remove(id).is_some())
    }

    fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let MemoryTx {
            mut committed,
            working,
        } = *self;
        *committed = working;
        Ok(())
    }
}
