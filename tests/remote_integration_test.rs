use anyhow::Result;
use httpmock::prelude::*;
use quicklink_catalog::adapters::remote::SINGLE_OBJECT_MEDIA_TYPE;
use quicklink_catalog::core::dashboard::load_dashboard;
use quicklink_catalog::domain::rows::AnalyticsRow;
use quicklink_catalog::utils::error::ErrorCategory;
use quicklink_catalog::{
    CatalogEngine, CatalogError, FilterState, RemoteClient, RemoteSource, RemoteTable,
};

const API_KEY: &str = "anon-test-key";

fn products_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1, "title": "Wireless Earbuds", "category": "electronics", "price": 3200,
            "description": "Noise cancelling", "image_url": null, "seller_id": 7, "stock": 12,
            "created_at": "2025-05-01T09:00:00+00:00", "updated_at": null
        },
        {
            "id": 2, "title": "Cookbook", "category": "books", "price": 1100,
            "description": null, "image_url": null, "seller_id": null, "stock": 3,
            "created_at": null, "updated_at": null
        },
        {
            "id": 3, "title": "Bluetooth Speaker", "category": "electronics", "price": 5400,
            "description": null, "image_url": null, "seller_id": 7, "stock": 0,
            "created_at": null, "updated_at": null
        }
    ])
}

#[tokio::test]
async fn test_remote_products_are_fetched_and_filtered_client_side() -> Result<()> {
    let server = MockServer::start();

    let products_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/products")
            .query_param("select", "*")
            .query_param("limit", "6")
            .header("apikey", API_KEY)
            .header("authorization", format!("Bearer {}", API_KEY));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(products_body());
    });

    let client = RemoteClient::new(&server.base_url(), API_KEY)?;
    let engine = CatalogEngine::new(RemoteSource::new(client, RemoteTable::Products, 6));

    let store = engine.try_load().await?;
    products_mock.assert();
    assert_eq!(store.len(), 3);

    // 篩選只在客戶端進行
    let view = store.project(&FilterState::new().with_category("electronics"));
    assert_eq!(view.ids(), vec![1, 3]);

    let view = store.project(&FilterState::new().with_search("SELLER #7"));
    assert_eq!(view.ids(), vec![1, 3]);

    Ok(())
}

#[tokio::test]
async fn test_single_row_fetch_sends_object_accept_header() -> Result<()> {
    let server = MockServer::start();

    let analytics_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/analytics")
            .query_param("select", "*")
            .query_param("order", "timestamp.desc")
            .query_param("limit", "1")
            .header("accept", SINGLE_OBJECT_MEDIA_TYPE);
        then.status(200).json_body(serde_json::json!({
            "id": 42,
            "revenue": 1250000.0,
            "orders_count": 310,
            "rides_count": 95,
            "users_count": 1200,
            "timestamp": "2025-06-30T23:00:00+00:00"
        }));
    });

    let client = RemoteClient::new(&server.base_url(), API_KEY)?;
    let row: AnalyticsRow = client
        .table("analytics")
        .order_desc("timestamp")
        .limit(1)
        .single()
        .await?;

    analytics_mock.assert();
    assert_eq!(row.id, 42);
    assert_eq!(row.orders_count, Some(310));
    assert!(row.recorded_at().is_some());

    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported_with_table_name() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/services");
        then.status(401)
            .json_body(serde_json::json!({"message": "Invalid API key"}));
    });

    let client = RemoteClient::new(&server.base_url(), "wrong-key").unwrap();
    let result = client
        .table("services")
        .fetch::<serde_json::Value>()
        .await;

    mock.assert();
    match result {
        Err(CatalogError::RemoteStatus {
            table,
            status,
            body,
        }) => {
            assert_eq!(table, "services");
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected RemoteStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_row_shape_is_a_data_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/products");
        then.status(200)
            .json_body(serde_json::json!([{"id": "not-a-number"}]));
    });

    let client = RemoteClient::new(&server.base_url(), API_KEY).unwrap();
    let engine = CatalogEngine::new(RemoteSource::new(client, RemoteTable::Products, 6));

    let err = engine.try_load().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Data);

    // 失敗時頁面仍可顯示，只是目錄為空
    let store = engine.load().await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_dashboard_keeps_successful_slots_when_others_fail() {
    let server = MockServer::start();

    // 沒有資料時，單筆查詢回傳 406
    let analytics_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/analytics");
        then.status(406).json_body(serde_json::json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned"
        }));
    });
    let products_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/products")
            .query_param("limit", "6");
        then.status(200).json_body(products_body());
    });
    let services_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/services");
        then.status(500);
    });

    let client = RemoteClient::new(&server.base_url(), API_KEY).unwrap();
    let snapshot = load_dashboard(&client, 6).await;

    analytics_mock.assert();
    products_mock.assert();
    services_mock.assert();

    assert!(snapshot.analytics.is_none());
    assert_eq!(snapshot.products.len(), 3);
    assert!(snapshot.services.is_empty());
    assert!(!snapshot.is_empty());
}

#[tokio::test]
async fn test_dashboard_full_snapshot() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/analytics");
        then.status(200).json_body(serde_json::json!({
            "id": 1, "revenue": null, "orders_count": 5, "rides_count": 2,
            "users_count": 9, "timestamp": "2025-07-01T08:00:00"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/products");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/services")
            .query_param("limit", "2");
        then.status(200).json_body(serde_json::json!([
            {
                "id": 8, "title": "Home Cleaning", "category": "cleaning", "price": 2000,
                "description": null, "image_url": null, "seller_id": 3,
                "created_at": null, "updated_at": null
            }
        ]));
    });

    let client = tokio_test::assert_ok!(RemoteClient::new(&server.base_url(), API_KEY));
    let snapshot = load_dashboard(&client, 2).await;

    let analytics = snapshot.analytics.expect("analytics row");
    assert_eq!(analytics.users_count, Some(9));
    assert_eq!(analytics.revenue, None);
    assert!(snapshot.products.is_empty());
    assert_eq!(snapshot.services.len(), 1);
    assert_eq!(snapshot.services[0].category_label(), "cleaning");
}

#[tokio::test]
async fn test_unreachable_remote_is_a_network_error() {
    // 保留的埠號，沒有服務在聽
    let client = RemoteClient::new("http://127.0.0.1:9", API_KEY).unwrap();

    let err = client
        .table("products")
        .fetch::<serde_json::Value>()
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Network);
}
