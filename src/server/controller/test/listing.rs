use axum::http::StatusCode;
use test_utils::factory::{
    helpers::create_station_with_admin, product::ProductFactory, user::UserFactory,
};

use super::{body_json, error_code, TestApp};
use crate::server::error::AppError;

#[tokio::test]
async fn pages_are_one_based_for_clients() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let token = app.login_as("Employee", None).await?;
    for _ in 0..25 {
        ProductFactory::new(app.db()).build().await?;
    }

    let response = app
        .get("/api/v1/products?page=2&pageSize=10", &token)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["paginator"]["page"], 2);
    assert_eq!(json["paginator"]["pageSize"], 10);
    assert_eq!(json["paginator"]["remainingDocuments"], 5);
    assert_eq!(json["paginator"]["totalDocuments"], 25);

    Ok(())
}

#[tokio::test]
async fn filter_narrows_list_and_total() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let token = app.login_as("Employee", None).await?;
    for price in [10.0, 20.0, 30.0] {
        ProductFactory::new(app.db()).price(price).build().await?;
    }

    let response = app
        .get("/api/v1/products?filter=Price%3E%3D20&sort=Price", &token)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let prices: Vec<f64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![20.0, 30.0]);
    assert_eq!(json["paginator"]["totalDocuments"], 2);

    Ok(())
}

#[tokio::test]
async fn filter_mistakes_are_bad_requests() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let token = app.login_as("Employee", None).await?;

    let cases = [
        ("filter=Price", "MalformedFilter"),
        ("filter=Colour%3Dred", "UnknownField"),
        ("filter=Price%3Dcheap", "InvalidFilterValue"),
        ("relation=stations", "UnknownRelation"),
    ];

    for (query, code) in cases {
        let response = app.get(&format!("/api/v1/products?{}", query), &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", query);
        assert_eq!(error_code(response).await, code, "{}", query);
    }

    Ok(())
}

#[tokio::test]
async fn station_users_are_scoped_to_caller() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (north, _) = create_station_with_admin(app.db()).await?;
    let (south, _) = create_station_with_admin(app.db()).await?;
    UserFactory::new(app.db()).station_id(&south.id).build().await?;
    let token = app.login_as("StationAdmin", Some(&north.id)).await?;

    let response = app.get("/api/v1/users/station", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["data"].as_array().unwrap();
    // The factory admin plus the caller.
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user["stationId"] == north.id.as_str()));

    Ok(())
}

#[tokio::test]
async fn relation_hint_embeds_related_documents() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (station, _) = create_station_with_admin(app.db()).await?;
    let token = app.login_as("SuperAdmin", None).await?;

    let response = app.get("/api/v1/users?relation=stations", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["data"].as_array().unwrap();
    // The station-less super admin is dropped from the page but still counted.
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["StationsEmbedded"]["id"], station.id.as_str());
    assert_eq!(json["paginator"]["totalDocuments"], 2);

    Ok(())
}
