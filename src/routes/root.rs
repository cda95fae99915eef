/// Body served by `GET /`.
pub const ROOT_BODY: &str = "what it is";

// Runs inside the request span, which already carries the `x-request-id`.
#[tracing::instrument(name = "Root")]
pub async fn root() -> &'static str {
    ROOT_BODY
}
