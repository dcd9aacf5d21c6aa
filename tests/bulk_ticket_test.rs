//! Integration tests for bulk endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use ticket_registry_server::config::Limits;

#[tokio::test]
async fn test_bulk_sell_appends_after_seed_tickets() {
    let app = common::build_seeded_app();
    let (_, seeded) = common::get_json(&app, "/").await;

    let (status, bought) = common::post_json(
        &app,
        "/b/sell",
        json!({"username": "Alice", "price": 5, "quantity": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let bought_tickets = bought.as_array().unwrap();
    assert_eq!(bought_tickets.len(), 3);
    assert!(bought_tickets
        .iter()
        .all(|t| t["username"] == "Alice" && t["price"] == 5.0));

    let (_, all) = common::get_json(&app, "/").await;
    let mut expected = common::ids(&seeded);
    expected.extend(common::ids(&bought));
    assert_eq!(common::ids(&all), expected);

    let (status, alice) = common::get_json(&app, "/b/Alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alice, bought);
}

#[tokio::test]
async fn test_bulk_sell_zero_quantity_is_empty() {
    let app = common::build_test_app();

    let (status, bought) = common::post_json(
        &app,
        "/b/sell",
        json!({"username": "alice", "price": 5, "quantity": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bought, json!([]));
}

#[tokio::test]
async fn test_bulk_sell_rejects_bad_quantity() {
    let app = common::build_test_app_with_limits(Limits {
        max_bulk_quantity: 5,
        ..Limits::default()
    });

    for quantity in [json!(-1), json!(2.5), json!("lots"), json!(6), json!(null)] {
        let (status, json) = common::post_json(
            &app,
            "/b/sell",
            json!({"username": "alice", "price": 5, "quantity": quantity}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    let (_, all) = common::get_json(&app, "/").await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_list_by_unknown_username_is_empty() {
    let app = common::build_seeded_app();

    let (status, tickets) = common::get_json(&app, "/b/nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(tickets, json!([]));
}

#[tokio::test]
async fn test_bulk_transfer_returns_full_registry() {
    let app = common::build_seeded_app();
    common::post_json(
        &app,
        "/b/sell",
        json!({"username": "alice", "price": 5, "quantity": 2}),
    )
    .await;

    let (status, all) = common::patch_json(
        &app,
        "/b/alice",
        json!({"oldUserName": "alice", "newUserName": "zoe"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 12);

    let (_, zoe) = common::get_json(&app, "/b/zoe").await;
    assert_eq!(zoe.as_array().unwrap().len(), 3);
    let (_, alice) = common::get_json(&app, "/b/alice").await;
    assert_eq!(alice, json!([]));
}

#[tokio::test]
async fn test_bulk_transfer_defaults_old_username_to_path() {
    let app = common::build_seeded_app();

    let (status, _) = common::patch_json(&app, "/b/bob", json!({"newUserName": "rob"})).await;

    assert_eq!(status, StatusCode::OK);
    let (_, rob) = common::get_json(&app, "/b/rob").await;
    assert_eq!(common::ids(&rob), vec!["f6G7h8I9j0".to_string()]);
}

#[tokio::test]
async fn test_bulk_transfer_without_new_username_is_bad_request() {
    let app = common::build_seeded_app();

    let (status, json) =
        common::patch_json(&app, "/b/bob", json!({"oldUserName": "bob"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid input");
}

#[tokio::test]
async fn test_bulk_delete_returns_remaining() {
    let app = common::build_seeded_app();
    common::post_json(
        &app,
        "/b/sell",
        json!({"username": "carol", "price": 5, "quantity": 2}),
    )
    .await;

    let (status, remaining) = common::delete(&app, "/b/carol").await;

    assert_eq!(status, StatusCode::OK);
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 9);
    assert!(remaining.iter().all(|t| t["username"] != "carol"));

    let (status, again) = common::delete(&app, "/b/carol").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_owner_named_sell_reaches_bulk_endpoints() {
    let app = common::build_test_app();
    let (status, bought) = common::post_json(
        &app,
        "/b/sell",
        json!({"username": "sell", "price": 5, "quantity": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = common::get_json(&app, "/b/sell").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, bought);

    let (status, all) = common::patch_json(
        &app,
        "/b/sell",
        json!({"oldUserName": "sell", "newUserName": "seller"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(all
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["username"] == "seller"));

    let (_, seller) = common::get_json(&app, "/b/seller").await;
    assert_eq!(common::ids(&seller), common::ids(&bought));

    common::patch_json(
        &app,
        "/b/seller",
        json!({"oldUserName": "seller", "newUserName": "sell"}),
    )
    .await;
    let (status, remaining) = common::delete(&app, "/b/sell").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(remaining, json!([]));
}
