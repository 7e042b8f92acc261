use serde::{Deserialize, Serialize};

/// Body of `POST /api/uspto/trademark`.
#[derive(Debug, Deserialize)]
pub struct TrademarkCheckRequest {
    /// Browser data URL, e.g. `data:image/png;base64,...`.
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
