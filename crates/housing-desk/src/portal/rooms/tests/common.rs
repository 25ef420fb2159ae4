use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::portal::applications::ledger::ApplicationLedger;
use crate::portal::rooms::domain::{RoomDraft, RoomType};
use crate::portal::rooms::registry::RoomRegistry;
use crate::portal::store::{HousingStore, MemoryStore, StoreError, StoreTx};

pub(super) fn draft(name: &str, room_type: RoomType, capacity: u32) -> RoomDraft {
    RoomDraft {
        name: name.to_string(),
        description: format!("{name} residence hall"),
        image_url: format!("https://rooms.example/{}.jpg", name.to_ascii_lowercase()),
        room_type,
        capacity,
    }
}

pub(super) fn build_registry() -> (RoomRegistry<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (RoomRegistry::new(store.clone()), store)
}

pub(super) fn ledger_over(store: &Arc<MemoryStore>) -> ApplicationLedger<MemoryStore> {
    ApplicationLedger::new(store.clone())
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
