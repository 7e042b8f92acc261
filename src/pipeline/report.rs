use serde::Serialize;

use crate::domain::DesignCode;
use crate::registry::RegistryRecord;
use crate::vision::LogoDetection;

/// Aggregated answer returned to the client for one uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkReport {
    pub logo_detection: Vec<LogoDetection>,
    pub features: Vec<String>,
    pub design_codes: Vec<DesignCode>,
    pub trademark_results: Vec<RegistryRecord>,
}
