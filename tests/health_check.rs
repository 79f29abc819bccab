mod common;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app_without_database(common::test_configuration()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn status_reports_unconfigured_ai_as_degraded() {
    let app = common::spawn_app_without_database(common::test_configuration()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check/status", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // database unreachable here
    assert_eq!(response.status().as_u16(), 503);
    let report: serde_json::Value = response.json().await.unwrap();
    assert_eq!(report["status"], "unhealthy");
    assert_eq!(report["components"]["ai"]["status"], "degraded");
    assert_eq!(report["components"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn status_is_ok_with_a_database() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check/status", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let report: serde_json::Value = response.json().await.unwrap();
    assert_eq!(report["status"], "degraded");
    assert_eq!(report["components"]["database"]["status"], "healthy");
}
