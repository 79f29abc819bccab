use crate::configuration::Settings;
use crate::health::HealthChecker;
use crate::helpers;
use crate::middleware;
use crate::routes;
use crate::services::AiService;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// How long a resolved bearer token is trusted without asking the identity server again.
const AUTH_CACHE_TTL: Duration = Duration::from_secs(60);

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let ai_service = Arc::new(AiService::new(&settings.ai));
    let health_checker = Arc::new(HealthChecker::new(
        Arc::new(pg_pool.clone()),
        ai_service.clone(),
    ));
    let health_checker = web::Data::new(health_checker);
    let ai_service = web::Data::from(ai_service);

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let oauth_http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let oauth_http_client = web::Data::new(oauth_http_client);

    let oauth_cache = web::Data::new(middleware::authentication::OAuthCache::new(AUTH_CACHE_TTL));

    let json_config = web::JsonConfig::default().error_handler(helpers::json_error_handler);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::authentication::Manager::new())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(health_checker.clone())
            .app_data(oauth_http_client.clone())
            .app_data(oauth_cache.clone())
            .service(
                web::scope("/health_check")
                    .service(routes::health_check)
                    .service(routes::health_status),
            )
            .service(
                web::scope("/api")
                    .service(routes::assistant::questions_handler)
                    .service(routes::assistant::insights_handler)
                    .service(routes::assistant::response_handler)
                    .service(routes::assistant::conversational_questions_handler)
                    .service(routes::assistant::conversational_summary_handler)
                    .service(routes::assistant::compose_handler)
                    .service(
                        web::scope("/mood")
                            .service(routes::mood::analytics_handler)
                            .service(routes::mood::upsert_handler),
                    ),
            )
            .service(
                web::scope("/journal")
                    .service(routes::journal::analytics_handler)
                    .service(routes::journal::item)
                    .service(routes::journal::list)
                    .service(routes::journal::add_handler),
            )
            .service(routes::dashboard::dashboard_handler)
            .service(routes::profile::login_handler)
            .service(routes::profile::profile_handler)
            .service(routes::quote::quote_handler)
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(ai_service.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
