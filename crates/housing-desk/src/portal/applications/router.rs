use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ApplicationId;
use super::ledger::ApplicationLedger;
use crate::portal::identity::{require_role, Role};
use crate::portal::rooms::domain::RoomId;
use crate::portal::store::HousingStore;

/// Router builder exposing the application intake and review endpoints.
pub fn application_router<S>(ledger: Arc<ApplicationLedger<S>>) -> Router
where
    S: HousingStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/applications",
            post(submit_handler::<S>).get(list_handler::<S>),
        )
        .route("/api/v1/applications/me", get(own_handler::<S>))
        .route(
            "/api/v1/applications/:application_id",
            put(update_handler::<S>).delete(delete_handler::<S>),
        )
        .with_state(ledger)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    room_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateStatusRequest {
    status: String,
    #[serde(default)]
    room_number: Option<String>,
}

pub(crate) async fn submit_handler<S>(
    State(ledger): State<Arc<ApplicationLedger<S>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    S: HousingStore + 'static,
{
    let identity = match require_role(&headers, Role::Student) {
        Ok(identity) => identity,
        Err(err) => return err.into_response(),
    };

    match ledger.submit(identity.user_id, RoomId(request.room_id)) {
        Ok(application) => (StatusCode::CREATED, axum::Json(application)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn own_handler<S>(
    State(ledger): State<Arc<ApplicationLedger<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: HousingStore + 'static,
{
    let identity = match require_role(&headers, Role::Student) {
        Ok(identity) => identity,
        Err(err) => return err.into_response(),
    };

    match ledger.for_user(&identity.user_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn list_handler<S>(
    State(ledger): State<Arc<ApplicationLedger<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: HousingStore + 'static,
{
    if let Err(err) = require_role(&headers, Role::Admin) {
        return err.into_response();
    }

    match ledger.list() {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_handler<S>(
    State(ledger): State<Arc<ApplicationLedger<S>>>,
    headers: HeaderMap,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<UpdateStatusRequest>,
) -> Response
where
    S: HousingStore + 'static,
{
    if let Err(err) = require_role(&headers, Role::Admin) {
        return err.into_response();
    }

    let id = ApplicationId(application_id);
    match ledger.update_status(&id, &request.status, request.room_number) {
        Ok(application) => (StatusCode::OK, axum::Json(application)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_handler<S>(
    State(ledger): State<Arc<ApplicationLedger<S>>>,
    headers: HeaderMap,
    Path(application_id): Path<String>,
) -> Response
where
    S: HousingStore + 'static,
{
    if let Err(err) = require_role(&headers, Role::Admin) {
        return err.into_response();
    }

    let id = ApplicationId(application_id);
    match ledger.delete(&id) {
        Ok(()) => {
            let payload = json!({
                "message": "application deleted",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
