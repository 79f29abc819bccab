mod common;

use serde_json::json;

const SUMMARY: &str = "Had a tough meeting but a good walk after";

#[tokio::test]
async fn more_answers_than_questions_is_rejected() {
    let app = common::spawn_app_without_database(common::test_configuration()).await;

    let response = app
        .post("/journal")
        .json(&json!({
            "daily_summary": SUMMARY,
            "ai_questions": ["How was the walk?"],
            "user_answers": ["Calming", "Long"]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn entry_is_stored_with_fallback_summary() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .post("/journal")
        .json(&json!({
            "daily_summary": SUMMARY,
            "ai_questions": ["How was the walk?", "What made the meeting tough?"],
            "user_answers": ["Calming", "Too many opinions"],
            "mode": "detailed"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let entry = &body["item"];
    assert_eq!(entry["user_id"], common::USER_ID);
    assert_eq!(entry["mode"], "detailed");
    assert_eq!(entry["tokens_used"], 0);
    assert_eq!(entry["answers"], json!(["Calming", "Too many opinions"]));
    assert!(entry["journal_content"]
        .as_str()
        .unwrap()
        .starts_with("Your detailed summary about Had a tough meeting but a good..."));

    let id = body["id"].as_i64().unwrap();
    let row: (serde_json::Value, i32) =
        sqlx::query_as("SELECT answers, tokens_used FROM journal_entry WHERE id = $1")
            .bind(id as i32)
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to fetch saved entry.");
    assert_eq!(row.0, json!(["Calming", "Too many opinions"]));
    assert_eq!(row.1, 0);
}

#[tokio::test]
async fn supplied_summary_is_kept_and_costs_nothing() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .post("/journal")
        .json(&json!({ "daily_summary": SUMMARY, "ai_summary": "A day of two halves." }))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["journal_content"], "A day of two halves.");
    assert_eq!(body["item"]["tokens_used"], 0);
    assert_eq!(body["item"]["mode"], "quick");
}

#[tokio::test]
async fn entries_are_private_to_their_owner() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let body: serde_json::Value = app
        .post("/journal")
        .json(&json!({ "daily_summary": SUMMARY, "ai_summary": "Mine." }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let id = body["id"].as_i64().unwrap();

    let response = app
        .get(&format!("/journal/{id}"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .api_client
        .get(format!("{}/journal/{id}", app.address))
        .bearer_auth(common::OTHER_USER_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);

    let response = app
        .get("/journal/999999")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn list_filters_by_search_and_mode() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    for (summary, mode) in [
        ("Walked the dog at dawn", "quick"),
        ("Finished the 100% tax report", "detailed"),
        ("Long walk after work", "detailed"),
    ] {
        let response = app
            .post("/journal")
            .json(&json!({ "daily_summary": summary, "ai_summary": "ok", "mode": mode }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 200);
    }

    let body: serde_json::Value = app
        .get("/journal?search=WALK")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 2);

    let body: serde_json::Value = app
        .get("/journal?search=walk&mode=detailed")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["daily_summary"], "Long walk after work");

    let body: serde_json::Value = app
        .get("/journal?search=100%25")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 1);

    let response = app.get("/journal?limit=0").send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn analytics_count_modes_and_tokens() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    // dated exactly a week back: still recent; eight days back: not
    sqlx::query(
        r#"
        INSERT INTO journal_entry (user_id, entry_date, daily_summary, journal_content, mode)
        VALUES
            ($1, CURRENT_DATE - 7, 'week ago', 'ok', 'quick'),
            ($1, CURRENT_DATE - 8, 'too old', 'ok', 'quick')
        "#,
    )
    .bind(common::USER_ID)
    .execute(&app.db_pool)
    .await
    .expect("Failed to seed journal entries.");

    for mode in ["quick", "quick", "detailed"] {
        app.post("/journal")
            .json(&json!({ "daily_summary": SUMMARY, "mode": mode }))
            .send()
            .await
            .expect("Failed to execute request.");
    }

    let body: serde_json::Value = app
        .get("/journal/analytics")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let stats = &body["item"];
    assert_eq!(stats["total_entries"], 5);
    assert_eq!(stats["quick_entries"], 4);
    assert_eq!(stats["detailed_entries"], 1);
    assert_eq!(stats["recent_entries"], 4);
    assert_eq!(stats["total_tokens"], 0);
}
