use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::portal::applications::domain::{ApplicationStatus, UserId};
use crate::portal::applications::ledger::ApplicationLedger;
use crate::portal::rooms::domain::{Room, RoomDraft, RoomId, RoomType};
use crate::portal::rooms::registry::RoomRegistry;
use crate::portal::store::{HousingStore, MemoryStore, StoreError, StoreTx};

pub(super) fn build_portal() -> (
    ApplicationLedger<MemoryStore>,
    RoomRegistry<MemoryStore>,
    Arc<MemoryStore>,
) {
    let store = Arc::new(MemoryStore::default());
    (
        ApplicationLedger::new(store.clone()),
        RoomRegistry::new(store.clone()),
        store,
    )
}

pub(super) fn user(suffix: &str) -> UserId {
    UserId(format!("stu-{suffix}"))
}

pub(super) fn add_room(
    registry: &RoomRegistry<MemoryStore>,
    name: &str,
    room_type: RoomType,
    capacity: u32,
) -> Room {
    registry
        .create(RoomDraft {
            name: name.to_string(),
            description: format!("{name} residence hall"),
            image_url: String::new(),
            room_type,
            capacity,
        })
        .expect("room registered")
}

pub(super) fn occupancy_of(store: &Arc<MemoryStore>, id: &RoomId) -> u32 {
    let tx = store.begin().expect("begin");
    tx.room(id)
        .expect("room read")
        .expect("room present")
        .occupancy
}

/// Audit predicate: every room's occupancy equals its count of approved
/// applications.
pub(super) fn occupancy_matches_approvals(store: &Arc<MemoryStore>) -> bool {
    let tx = store.begin().expect("begin");
    let applications = tx.applications().expect("applications");
    tx.rooms().expect("rooms").into_iter().all(|room| {
        let approved = applications
            .iter()
            .filter(|application| {
                application.room_id == room.id
                    && application.status == ApplicationStatus::Approved
            })
            .count() as u32;
        room.occupancy == approved
    })
}

pub(super) struct UnavailableStore;

impl HousingStore for UnavailableStore {
    fn begin(&self) -> Result<Box<dyn StoreTx + '_>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
