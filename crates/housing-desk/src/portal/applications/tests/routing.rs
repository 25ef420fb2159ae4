use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::portal::applications::router::application_router;
use crate::portal::error::PortalError;
use crate::portal::rooms::domain::RoomType;

#[tokio::test]
async fn submit_route_enforces_student_identity() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Aspen Suite", RoomType::Double, 2);
    let router = application_router(Arc::new(ledger));
    let payload = json!({ "room_id": room.id.0 });

    let anonymous = router
        .clone()
        .oneshot(
            Request::post("/api/v1/applications")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let admin = router
        .oneshot(
            Request::post("/api/v1/applications")
                .header("content-type", "application/json")
                .header("x-user-id", "ops-1")
                .header("x-user-role", "admin")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(admin.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn submit_route_records_applications() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Aspen Suite", RoomType::Double, 2);
    let router = application_router(Arc::new(ledger));
    let payload = json!({ "room_id": room.id.0 });

    let response = router
        .oneshot(
            Request::post("/api/v1/applications")
                .header("content-type", "application/json")
                .header("x-user-id", "stu-401")
                .header("x-user-role", "student")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("id")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .starts_with("app-"));
    assert_eq!(
        payload.get("user_id").and_then(serde_json::Value::as_str),
        Some("stu-401")
    );
    assert_eq!(
        payload.get("status").and_then(serde_json::Value::as_str),
        Some("pending")
    );
    assert!(payload.get("room_number").is_none());
}

#[tokio::test]
async fn submit_route_reports_full_rooms() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Birch Hall", RoomType::Single, 1);
    let seated = ledger
        .submit(user("401"), room.id.clone())
        .expect("submitted");
    ledger
        .update_status(&seated.id, "approved", None)
        .expect("approved");
    let router = application_router(Arc::new(ledger));
    let payload = json!({ "room_id": room.id.0 });

    let response = router
        .oneshot(
            Request::post("/api/v1/applications")
                .header("content-type", "application/json")
                .header("x-user-id", "stu-402")
                .header("x-user-role", "student")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("full"));
}

#[tokio::test]
async fn own_route_returns_the_callers_application() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Aspen Suite", RoomType::Double, 2);
    ledger
        .submit(user("401"), room.id.clone())
        .expect("submitted");
    let router = application_router(Arc::new(ledger));

    let response = router
        .oneshot(
            Request::get("/api/v1/applications/me")
                .header("x-user-id", "stu-401")
                .header("x-user-role", "student")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("status").and_then(serde_json::Value::as_str),
        Some("pending")
    );
    assert_eq!(
        payload
            .get("room")
            .and_then(|room| room.get("name"))
            .and_then(serde_json::Value::as_str),
        Some("Aspen Suite")
    );
}

#[tokio::test]
async fn own_route_without_a_submission_is_not_found() {
    let (ledger, _registry, _store) = build_portal();
    let router = application_router(Arc::new(ledger));

    let response = router
        .oneshot(
            Request::get("/api/v1/applications/me")
                .header("x-user-id", "stu-401")
                .header("x-user-role", "student")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_routes_require_an_admin_caller() {
    let (ledger, _registry, _store) = build_portal();
    let router = application_router(Arc::new(ledger));

    let listing = router
        .clone()
        .oneshot(
            Request::get("/api/v1/applications")
                .header("x-user-id", "stu-401")
                .header("x-user-role", "student")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(listing.status(), StatusCode::FORBIDDEN);

    let update = router
        .oneshot(
            Request::put("/api/v1/applications/app-000001")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "status": "approved" })).expect("encode"),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(update.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_route_returns_joined_views() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Cedar Court", RoomType::Quad, 4);
    ledger
        .submit(user("401"), room.id.clone())
        .expect("submitted");
    ledger
        .submit(user("402"), room.id.clone())
        .expect("submitted");
    let router = application_router(Arc::new(ledger));

    let response = router
        .oneshot(
            Request::get("/api/v1/applications")
                .header("x-user-id", "ops-1")
                .header("x-user-role", "admin")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let views = payload.as_array().expect("array payload");
    assert_eq!(views.len(), 2);
    assert_eq!(
        views[0]
            .get("room")
            .and_then(|room| room.get("name"))
            .and_then(serde_json::Value::as_str),
        Some("Cedar Court")
    );
}

#[tokio::test]
async fn update_route_approves_applications() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Aspen Suite", RoomType::Double, 2);
    let application = ledger
        .submit(user("401"), room.id.clone())
        .expect("submitted");
    let router = application_router(Arc::new(ledger));
    let payload = json!({ "status": "approved", "room_number": "12A" });

    let response = router
        .oneshot(
            Request::put(format!("/api/v1/applications/{}", application.id.0))
                .header("content-type", "application/json")
                .header("x-user-id", "ops-1")
                .header("x-user-role", "admin")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("status").and_then(serde_json::Value::as_str),
        Some("approved")
    );
    assert_eq!(
        payload
            .get("room_number")
            .and_then(serde_json::Value::as_str),
        Some("12A")
    );
}

#[tokio::test]
async fn update_route_rejects_unknown_status_tokens() {
    let (ledger, registry, _store) = build_portal();
    let room = add_room(&registry, "Aspen Suite", RoomType::Double, 2);
    let application = ledger
        .submit(user("401"), room.id.clone())
        .expect("submitted");
    let router = application_router(Arc::new(ledger));
    let payload = json!({ "status": "waitlisted" });

    let response = router
        .oneshot(
            Request::put(format!("/api/v1/applications/{}", application.id.0))
                .header("content-type", "application/json")
                .header("x-user-id", "ops-1")
                .header("x-user-role", "admin")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_route_withdraws_applications() {
    let (ledger, registry, store) = build_portal();
    let room = add_room(&registry, "Birch Hall", RoomType::Single, 1);
    let application = ledger
        .submit(user("401"), room.id.clone())
        .expect("submitted");
    ledger
        .update_status(&application.id, "approved", None)
        .expect("approved");
    let ledger = Arc::new(ledger);
    let router = application_router(ledger.clone());

    let response = router
        .oneshot(
            Request::delete(format!("/api/v1/applications/{}", application.id.0))
                .header("x-user-id", "ops-1")
                .header("x-user-role", "admin")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(matches!(
        ledger.for_user(&user("401")),
        Err(PortalError::NotFound("application"))
    ));
    assert_eq!(occupancy_of(&store, &room.id), 0);
}
