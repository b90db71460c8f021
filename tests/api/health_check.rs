use crate::helpers::spawn_app;

#[tokio::test]
async fn the_liveness_probe_names_the_service() {
    let app = spawn_app().await;

    let response = reqwest::get(&format!("{}/", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "quote-api");
}

#[tokio::test]
async fn the_health_check_reports_healthy_with_a_timestamp() {
    let app = spawn_app().await;

    let response = reqwest::get(&format!("{}/health", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("timestamp is not RFC 3339");
}
