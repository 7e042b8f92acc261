pub mod uspto;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::DesignCode;
use crate::error::RegistryError;

pub use uspto::UsptoRegistryClient;

/// Trademark registry search by design code.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// `Ok(None)` when the registry has nothing for the code.
    async fn lookup(&self, code: DesignCode) -> Result<Option<RegistryRecord>, RegistryError>;
}

/// Raw registry answer for one code; the body is passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryRecord {
    pub code: DesignCode,
    pub result: String,
}

impl RegistryRecord {
    pub fn new(code: DesignCode, result: impl Into<String>) -> Self {
        Self {
            code,
            result: result.into(),
        }
    }
}
