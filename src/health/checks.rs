use super::models::{ComponentHealth, HealthCheckResponse};
use crate::services::AiService;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    pg_pool: Arc<PgPool>,
    ai: Arc<AiService>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(pg_pool: Arc<PgPool>, ai: Arc<AiService>) -> Self {
        Self {
            pg_pool,
            ai,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(env!("CARGO_PKG_VERSION"), uptime);

        let database = timeout(CHECK_TIMEOUT, self.check_database())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout"));

        response.add_component("database", database);
        response.add_component("ai", self.check_ai());

        response
    }

    #[tracing::instrument(name = "Check database health", skip(self))]
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        if let Err(err) = sqlx::query("SELECT 1").execute(self.pg_pool.as_ref()).await {
            tracing::error!("Database health check failed: {:?}", err);
            return ComponentHealth::unhealthy(format!("Database error: {}", err));
        }

        let elapsed = start.elapsed().as_millis() as u64;
        let health = if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
            ComponentHealth::degraded("Database responding slowly")
        } else {
            ComponentHealth::healthy()
        };

        health
            .timed(elapsed)
            .detail("pool_size", self.pg_pool.size())
            .detail("idle_connections", self.pg_pool.num_idle())
    }

    /// Reports configuration only; probing the provider would spend tokens.
    fn check_ai(&self) -> ComponentHealth {
        match self.ai.model() {
            Some(model) => ComponentHealth::healthy().detail("model", model),
            None => ComponentHealth::degraded("AI provider not configured, serving fallback content"),
        }
    }
}
