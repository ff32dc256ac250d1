use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub database: &'static str,
}

impl Health {
    pub fn up() -> Self {
        Self { status: "ok", database: "up" }
    }

    /// Process is serving but the store did not answer the ping.
    pub fn degraded() -> Self {
        Self { status: "ok", database: "down" }
    }
}
