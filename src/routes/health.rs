/// Body served by `GET /health`.
pub const HEALTH_BODY: &str = "OK";

#[tracing::instrument(name = "Health check")]
pub async fn health() -> &'static str {
    HEALTH_BODY
}
