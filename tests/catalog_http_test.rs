use fcl_checker::{FclChecker, FixedWidth, HttpPortSource, PortCatalog, RuleSet};
use httpmock::prelude::*;
use std::time::Duration;

fn checker_for(url: String) -> FclChecker<FixedWidth> {
    let source = HttpPortSource::new(url, Duration::from_secs(5));
    FclChecker::new(PortCatalog::new(Box::new(source)), RuleSet::default(), FixedWidth(4.0))
}

#[tokio::test]
async fn test_http_catalog_is_fetched_once() {
    let server = MockServer::start_async().await;
    let ports = serde_json::json!([
        {"name": "東京港", "code": "JPTYO", "lat": 35.6175, "lng": 139.7794},
        {"name": "横浜港", "code": "JPYOK", "lat": 35.4437, "lng": 139.638}
    ]);

    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/ports.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(ports);
        })
        .await;

    let mut checker = checker_for(server.url("/data/ports.json"));

    let first = checker.check("中央区銀座4-6").await.unwrap();
    let second = checker.check("Yokohama Minato Mirai").await.unwrap();

    assert_eq!(first.nearest_port.unwrap().code, "JPTYO");
    assert_eq!(second.nearest_port.unwrap().code, "JPYOK");
    // 第二次檢查沿用快取
    api_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_catalog() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/ports.json");
            then.status(500);
        })
        .await;

    let mut checker = checker_for(server.url("/ports.json"));
    let report = checker.check("祇園").await.unwrap();

    api_mock.assert_async().await;
    assert!(report.nearest_port.is_none());
    assert!(!report.accessibility.can_reach);
    assert!(!checker.catalog().is_loaded());
}

#[tokio::test]
async fn test_malformed_catalog_degrades_and_retries() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/ports.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"ports": "not a list"}"#);
        })
        .await;

    let mut checker = checker_for(server.url("/ports.json"));
    assert!(checker.check("大黒ふ頭").await.unwrap().nearest_port.is_none());
    assert!(checker.check("大黒ふ頭").await.unwrap().nearest_port.is_none());

    // 失敗不快取，每次檢查都重新抓取
    api_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_batch_fetches_failing_catalog_once() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/ports.json");
            then.status(500);
        })
        .await;

    let mut checker = checker_for(server.url("/ports.json"));
    let reports = checker
        .check_batch(&["大黒ふ頭", "祇園", " ", "埼玉県川口市", "大阪府大阪市北区"])
        .await
        .unwrap();

    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.nearest_port.is_none()));
    // 整批只抓一次，失敗也一樣
    api_mock.assert_hits_async(1).await;

    // 下一批重新嘗試
    checker.check_batch(&["谷中"]).await.unwrap();
    api_mock.assert_hits_async(2).await;
}
