use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RoomDraft, RoomId, RoomType};
use super::registry::RoomRegistry;
use crate::portal::identity::{require_role, Role};
use crate::portal::store::HousingStore;

/// Router builder exposing the room inventory endpoints.
pub fn room_router<S>(registry: Arc<RoomRegistry<S>>) -> Router
where
    S: HousingStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/rooms",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route("/api/v1/rooms/:room_id", delete(delete_handler::<S>))
        .with_state(registry)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateRoomRequest {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    #[serde(rename = "type")]
    room_type: String,
    capacity: u32,
}

pub(crate) async fn list_handler<S>(State(registry): State<Arc<RoomRegistry<S>>>) -> Response
where
    S: HousingStore + 'static,
{
    match registry.list() {
        Ok(rooms) => (StatusCode::OK, axum::Json(rooms)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn create_handler<S>(
    State(registry): State<Arc<RoomRegistry<S>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<CreateRoomRequest>,
) -> Response
where
    S: HousingStore + 'static,
{
    if let Err(err) = require_role(&headers, Role::Admin) {
        return err.into_response();
    }

    let room_type = match RoomType::parse(&request.room_type) {
        Ok(room_type) => room_type,
        Err(err) => return err.into_response(),
    };
    let draft = RoomDraft {
        name: request.name,
        description: request.description,
        image_url: request.image_url,
        room_type,
        capacity: request.capacity,
    };

    match registry.create(draft) {
        Ok(room) => (StatusCode::CREATED, axum::Json(room)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_handler<S>(
    State(registry): State<Arc<RoomRegistry<S>>>,
    headers: HeaderMap,
    Path(room_id): Path<String>,
) -> Response
where
    S: HousingStore + 'static,
{
    if let Err(err) = require_role(&headers, Role::Admin) {
        return err.into_response();
    }

    match registry.delete(&RoomId(room_id)) {
        Ok(()) => {
            let payload = json!({
                "message": "room deleted",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
