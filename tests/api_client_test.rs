mod support;

use std::time::Duration;

use axum::extract::{Path, RawQuery};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::support::tracing_init;
use mymanga_admin::api::{decode_data, AdminApiClient, ApiError, CollectionSource, ReportStats};
use mymanga_admin::config::Config;
use mymanga_admin::filter::{ListingQuery, Sort, SortDirection};
use mymanga_admin::sections::Section;

async fn list_manga(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "data": [
            {"id": 21, "name": "Naruto", "author_name": "Masashi Kishimoto", "status": "completed", "views": 1200, "is_active": true, "updated_at": "2024-03-01T10:00:00Z"},
            {"id": 22, "name": "Naruto Gaiden", "is_active": false}
        ],
        "total": 41,
        "page": 2,
        "limit": 20,
        "echo": query.unwrap_or_default(),
    }))
}

async fn get_manga(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id == "21" {
        Ok(Json(json!({"data": {"id": 21, "name": "Naruto", "author_name": null}})))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn delete_manga(Path(id): Path<String>) -> StatusCode {
    if id == "21" {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn rate_limited() -> StatusCode {
    StatusCode::TOO_MANY_REQUESTS
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable")
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

async fn report_stats() -> Json<Value> {
    Json(json!({"data": {"total": 10, "pending": 3, "resolved": 7}}))
}

/// Serve a fake admin API on an ephemeral port and return a client for it
async fn start_server() -> AdminApiClient {
    tracing_init();

    let app = Router::new()
        .route("/api/admin/manga", get(list_manga))
        .route("/api/admin/manga/:id", get(get_manga).delete(delete_manga))
        .route("/api/admin/authors", get(rate_limited))
        .route("/api/admin/genres", get(server_error))
        .route("/api/admin/groups", get(not_json))
        .route("/api/admin/chapter-reports/stats", get(report_stats));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config {
        api_base_url: format!("http://{}/api/admin", addr),
        page_size: 20,
        request_timeout: Duration::from_secs(5),
    };
    AdminApiClient::new(&config).unwrap()
}

fn naruto_query() -> ListingQuery {
    let filters = Section::Manga
        .default_filters()
        .with("name", "Naruto Shippuden")
        .unwrap();
    ListingQuery::new(&filters, 20)
        .with_page(2)
        .with_sort(Some(Sort {
            field: "views".to_string(),
            direction: SortDirection::Descending,
        }))
}

#[tokio::test]
async fn test_list_sends_filters_paging_and_sort() {
    let client = start_server().await;

    let body = client.list("manga", &naruto_query()).await.unwrap();
    assert_eq!(
        body["echo"],
        "name=Naruto+Shippuden&page=2&limit=20&sort=views&order=desc"
    );
}

#[tokio::test]
async fn test_fetch_rows_decodes_page() {
    let client = start_server().await;

    let page = Section::Manga
        .fetch_rows(&client, &naruto_query())
        .await
        .unwrap();

    assert_eq!(page.total, 41);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "21");
    assert_eq!(
        page.items[0].cells,
        vec!["Naruto", "Masashi Kishimoto", "completed", "1200", "Active", "2024-03-01 10:00"]
    );
    assert_eq!(page.items[1].cells[1], "-");
}

#[tokio::test]
async fn test_get_and_delete_record() {
    let client = start_server().await;

    let record = client.get("manga", "21").await.unwrap();
    assert_eq!(record["data"]["name"], "Naruto");

    assert!(matches!(
        client.get("manga", "99").await,
        Err(ApiError::NotFound)
    ));

    client.delete("manga", "21").await.unwrap();
    assert!(matches!(
        client.delete("manga", "99").await,
        Err(ApiError::NotFound)
    ));
}

#[tokio::test]
async fn test_error_statuses() {
    let client = start_server().await;
    let query = ListingQuery::new(&Section::Authors.default_filters(), 20);

    assert!(matches!(
        client.list("authors", &query).await,
        Err(ApiError::RateLimited)
    ));

    match client.list("genres", &query).await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected status error, got {:?}", other),
    }

    assert!(matches!(
        client.list("groups", &query).await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_report_stats() {
    let client = start_server().await;

    let value = client.get("chapter-reports", "stats").await.unwrap();
    let stats: ReportStats = decode_data(value).unwrap();
    assert_eq!(
        stats,
        ReportStats {
            total: 10,
            pending: 3,
            resolved: 7
        }
    );
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    tracing_init();

    let config = Config {
        api_base_url: "http://127.0.0.1:9/api/admin".to_string(),
        page_size: 20,
        request_timeout: Duration::from_secs(2),
    };
    let client = AdminApiClient::new(&config).unwrap();
    let query = ListingQuery::new(&Section::Pets.default_filters(), 20);

    assert!(matches!(
        client.list("pets", &query).await,
        Err(ApiError::Request(_))
    ));
}
