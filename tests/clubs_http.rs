//! Club creation, moderation and the admin overview.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn created_club_is_pending_and_owned_by_the_caller() {
    let app = TestApp::new().await;
    let response = app
        .post(
            "/clubs",
            Some(MANAGER),
            json!({
                "clubName": "Chess Circle",
                "description": "Weekly blitz",
                "location": "Library",
                "membershipFee": 12.5,
                "managerEmail": "someone-else@clubhub.test",
                "status": "approved",
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["insertedId"].as_str().unwrap();

    let club = app.get(&format!("/clubs/{}", id), None).await;
    assert_eq!(club.status, StatusCode::OK);
    assert_eq!(club.body["clubName"], "Chess Circle");
    assert_eq!(club.body["description"], "Weekly blitz");
    assert_eq!(club.body["membershipFee"], 12.5);
    assert_eq!(club.body["status"], "pending");
    assert_eq!(club.body["managerEmail"], MANAGER_EMAIL);
    assert!(club.body["createdAt"].is_string());
}

#[tokio::test]
async fn club_lookup_validates_ids() {
    let app = TestApp::new().await;

    let response = app.get("/clubs/not-an-id", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid id");

    let response = app.get(&format!("/clubs/{}", uuid::Uuid::now_v7()), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeating_a_status_change_reports_no_modification() {
    let app = TestApp::new().await;
    let id = app.create_club(MANAGER, "Go Club", 0.0).await;
    let uri = format!("/admin/clubs/{}", id);

    let first = app.patch(&uri, Some(ADMIN), json!({ "status": "approved" })).await;
    assert_eq!(first.body, json!({ "matchedCount": 1, "modifiedCount": 1 }));

    let second = app.patch(&uri, Some(ADMIN), json!({ "status": "approved" })).await;
    assert_eq!(second.body, json!({ "matchedCount": 1, "modifiedCount": 0 }));

    let missing = app
        .patch(
            &format!("/admin/clubs/{}", uuid::Uuid::now_v7()),
            Some(ADMIN),
            json!({ "status": "approved" }),
        )
        .await;
    assert_eq!(missing.body, json!({ "matchedCount": 0, "modifiedCount": 0 }));
}

#[tokio::test]
async fn public_listing_filters_and_featured_shows_approved_only() {
    let app = TestApp::new().await;
    let pending = app.create_club(MANAGER, "Pending Club", 0.0).await;
    let approved = app.create_club(MANAGER, "Approved Club", 0.0).await;
    app.approve_club(&approved).await;

    let all = app.get("/clubs", None).await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let only_approved = app.get("/clubs?status=approved", None).await;
    let ids: Vec<_> = only_approved.body.as_array().unwrap().iter().map(|c| c["id"].clone()).collect();
    assert_eq!(ids, vec![json!(approved)]);

    let featured = app.get("/featured-clubs", None).await;
    assert_eq!(featured.body.as_array().unwrap().len(), 1);
    assert_ne!(featured.body[0]["id"], json!(pending));

    let searched = app.get("/clubs?search=pending", None).await;
    assert_eq!(searched.body[0]["id"], json!(pending));
}

#[tokio::test]
async fn only_the_owner_may_update_a_club() {
    let app = TestApp::new().await;
    let id = app.create_club(MANAGER, "Rowing", 0.0).await;
    let uri = format!("/clubs/{}", id);

    let response = app.put(&uri, Some(OTHER_MANAGER), json!({ "clubName": "Hijacked" })).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.put(&uri, Some(MANAGER), json!({ "location": "River" })).await;
    assert_eq!(response.body, json!({ "matchedCount": 1, "modifiedCount": 1 }));

    let club = app.get(&uri, None).await;
    assert_eq!(club.body["clubName"], "Rowing");
    assert_eq!(club.body["location"], "River");
}

#[tokio::test]
async fn admin_overview_counts_clubs_by_status() {
    let app = TestApp::new().await;
    app.create_club(MANAGER, "One", 0.0).await;
    let two = app.create_club(MANAGER, "Two", 0.0).await;
    let three = app.create_club(OTHER_MANAGER, "Three", 0.0).await;
    app.approve_club(&two).await;
    app.approve_club(&three).await;

    let response = app.get("/admin/overview", Some(ADMIN)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "totalUsers": SEEDED_USERS,
            "clubs": { "pending": 1, "approved": 2, "rejected": 0 },
            "totalEvents": 0,
            "totalMemberships": 0,
            "totalPaymentAmount": 0.0,
        })
    );

    let clubs = app.get("/admin/clubs", Some(ADMIN)).await;
    assert_eq!(clubs.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn admin_can_return_an_approved_club_to_pending() {
    let app = TestApp::new().await;
    let id = app.create_club(MANAGER, "Fencing", 0.0).await;
    app.approve_club(&id).await;
    let uri = format!("/admin/clubs/{}", id);

    let response = app.patch(&uri, Some(ADMIN), json!({ "status": "pending" })).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "matchedCount": 1, "modifiedCount": 1 }));

    let club = app.get(&format!("/clubs/{}", id), None).await;
    assert_eq!(club.body["status"], "pending");
    assert_eq!(app.get("/featured-clubs", None).await.body, json!([]));
}
