#![allow(dead_code)]

use smart_journal::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_TOKEN: &str = "user-token";
pub const OTHER_USER_TOKEN: &str = "other-user-token";
pub const USER_ID: &str = "test_user_id";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub api_client: reqwest::Client,
    // keeps the identity endpoint alive for the lifetime of the app
    pub auth_server: MockServer,
}

impl TestApp {
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client
            .get(format!("{}{}", self.address, path))
            .bearer_auth(USER_TOKEN)
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client
            .post(format!("{}{}", self.address, path))
            .bearer_auth(USER_TOKEN)
    }
}

/// Settings for tests: AI unconfigured, so every operation serves fallbacks.
pub fn test_configuration() -> Settings {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.ai.api_key = None;
    configuration
}

/// Spawns the app against a fresh database; `None` when PostgreSQL is unreachable.
pub async fn spawn_app() -> Option<TestApp> {
    spawn_app_with_configuration(test_configuration()).await
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    Some(start(configuration, connection_pool).await)
}

/// Spawns the app with a pool that never connects. Enough for routes that
/// do not touch the database.
pub async fn spawn_app_without_database(mut configuration: Settings) -> TestApp {
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    let connection_pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy(&configuration.database.connection_string())
        .expect("Failed to build lazy pool");

    start(configuration, connection_pool).await
}

async fn start(mut configuration: Settings, connection_pool: PgPool) -> TestApp {
    let auth_server = mock_auth_server().await;
    configuration.auth_url = format!("{}/me", auth_server.uri());

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = smart_journal::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        db_pool: connection_pool,
        api_client: reqwest::Client::new(),
        auth_server,
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

fn identity(id: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "user": {
            "_id": id,
            "email": email,
            "first_name": "Test",
            "last_name": "User",
            "role": "user",
            "email_confirmed": true
        }
    })
}

/// Identity endpoint knowing two tokens; any other token gets a 401.
async fn mock_auth_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", format!("Bearer {USER_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity(USER_ID, "test@example.com")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", format!("Bearer {OTHER_USER_TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(identity("other_user_id", "other@example.com")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    server
}
