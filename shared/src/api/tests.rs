use super::*;
use crate::AdditionalFilter;
use crate::request::{HttpMethod, MockHttpClient};
use serde_json::json;

const BASE: &str = "https://api.test";

// =========================================================
// 辅助函数
// =========================================================

fn guest(client: &MockHttpClient) -> MaestroApi<&MockHttpClient> {
    MaestroApi::new(ApiConfig::new(BASE), client)
}

fn authorized(client: &MockHttpClient) -> MaestroApi<&MockHttpClient> {
    guest(client).with_token("tok-123")
}

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

// =========================================================
// sign_in 测试
// =========================================================

#[tokio::test]
async fn test_sign_in_success_populates_session() {
    let client = MockHttpClient::new();
    client.mock_response(
        &url("/Auth/Login"),
        200,
        json!({"data": {"accessToken": "abc", "refreshToken": "def", "expiresIn": 3600}}),
    );

    let session = guest(&client)
        .sign_in("user@shop.com", "secret", Timestamp::new(5))
        .await
        .unwrap();

    assert_eq!(session.access_token, "abc");
    assert_eq!(session.refresh_token.as_deref(), Some("def"));
    assert_eq!(session.expires_in, Some(3600));
    assert_eq!(session.user, "user@shop.com");
    assert_eq!(session.issued_at, Timestamp::new(5));

    // 验证请求体与方法
    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert!(req.header("Authorization").is_none());
    assert_eq!(
        client.last_body_json().unwrap(),
        json!({"username": "user@shop.com", "password": "secret"})
    );
}

#[tokio::test]
async fn test_sign_in_missing_token_is_rejected() {
    let client = MockHttpClient::new();
    client.mock_response(&url("/Auth/Login"), 200, json!({"data": {"message": "nope"}}));

    let result = guest(&client).sign_in("u", "p", Timestamp::new(0)).await;
    assert!(matches!(result, Err(ApiError::MissingToken)));
}

#[tokio::test]
async fn test_sign_in_failures_are_errors() {
    // 401
    let client = MockHttpClient::new();
    client.mock_response(&url("/Auth/Login"), 401, json!({}));
    assert!(guest(&client).sign_in("u", "p", Timestamp::new(0)).await.is_err());

    // 网络故障
    let client = MockHttpClient::new();
    client.mock_network_error(&url("/Auth/Login"));
    let result = guest(&client).sign_in("u", "p", Timestamp::new(0)).await;
    assert!(matches!(result, Err(ApiError::Network(_))));

    // 无法解析的响应
    let client = MockHttpClient::new();
    client.mock_raw(&url("/Auth/Login"), 200, "<html>");
    let result = guest(&client).sign_in("u", "p", Timestamp::new(0)).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =========================================================
// list_collections 测试
// =========================================================

#[tokio::test]
async fn test_list_collections_sends_bearer_and_maps() {
    let client = MockHttpClient::new();
    client.mock_response(
        &url("/Collection/GetAll"),
        200,
        json!({"data": [
            {"id": 1, "info": {"name": "Kış"}, "filters": {"filters": []}, "salesChannelId": 1},
            {"id": 2, "salesChannelId": 4}
        ]}),
    );

    let collections = authorized(&client).list_collections().await.unwrap();

    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].name, "Kış");
    assert_eq!(collections[1].name, "Koleksiyon #2");

    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.header("Authorization"), Some("Bearer tok-123"));
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_list_collections_http_error() {
    let client = MockHttpClient::new();
    client.mock_response(&url("/Collection/GetAll"), 500, json!({}));

    let result = authorized(&client).list_collections().await;
    assert!(matches!(result, Err(ApiError::Status(500))));
}

#[tokio::test]
async fn test_list_collections_missing_data_is_empty() {
    let client = MockHttpClient::new();
    client.mock_response(&url("/Collection/GetAll"), 200, json!({}));

    let collections = authorized(&client).list_collections().await.unwrap();
    assert!(collections.is_empty());
}

// =========================================================
// 编辑器端点测试
// =========================================================

#[tokio::test]
async fn test_filters_for_constants() {
    let client = MockHttpClient::new();
    client.mock_response(
        &url("/Collection/9/GetFiltersForConstants"),
        200,
        json!({"status": 200, "data": [
            {"id": "warehouse", "title": "Depo", "values": [{"value": "W1", "valueName": "Merkez"}]}
        ]}),
    );

    let options = authorized(&client).filters_for_constants(9).await.unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].values[0].label(), "Merkez");
}

#[tokio::test]
async fn test_filters_for_constants_body_status_failure() {
    let client = MockHttpClient::new();
    client.mock_response(
        &url("/Collection/9/GetFiltersForConstants"),
        200,
        json!({"status": 401, "message": "expired"}),
    );

    let result = authorized(&client).filters_for_constants(9).await;
    assert!(matches!(result, Err(ApiError::Rejected { status: 401, .. })));
}

#[tokio::test]
async fn test_products_for_constants_posts_query() {
    let client = MockHttpClient::new();
    client.mock_response(
        &url("/Collection/9/GetProductsForConstants"),
        200,
        json!({"status": 200, "data": {"data": [
            {"productCode": "A1", "name": "Elbise", "imageUrl": "https://img/a1.jpg"},
            {"productCode": "B2", "name": null, "imageUrl": null}
        ]}}),
    );

    let query = ProductQuery::new(vec![AdditionalFilter::equals("warehouse", "W1")]);
    let products = authorized(&client)
        .products_for_constants(9, &query)
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Elbise");
    assert_eq!(products[1].name, "Ürün B2");

    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(
        client.last_body_json().unwrap()["additionalFilters"],
        json!([{"id": "warehouse", "value": "W1", "comparisonType": 0}])
    );
}

#[tokio::test]
async fn test_products_without_code_are_skipped() {
    let client = MockHttpClient::new();
    client.mock_response(
        &url("/Collection/9/GetProductsForConstants"),
        200,
        json!({"status": 200, "data": {"data": [
            {"productCode": "A1", "name": "Elbise"},
            {"productCode": null, "name": "Kodsuz"},
            {"productCode": 55, "name": "Gömlek"}
        ]}}),
    );

    let products = authorized(&client)
        .products_for_constants(9, &ProductQuery::unfiltered())
        .await
        .unwrap();

    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "55"]);
}
