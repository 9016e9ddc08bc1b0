use serde::Serialize;

/// Body of `GET /api/health`.
///
/// Built fresh for every request. `mongo_url_configured` reports only whether
/// the connection string is present; the value itself is never carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub mongo_url_configured: bool,
}

impl HealthStatus {
    pub fn ok(mongo_url_configured: bool) -> Self {
        Self {
            status: "ok",
            mongo_url_configured,
        }
    }
}
