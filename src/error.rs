use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Upload Error: {0}")]
    Upload(#[from] UploadError),
    #[error("Vision Error: {0}")]
    Vision(#[from] VisionError),
    #[error("Registry Error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Pipeline Error: {0}")]
    Pipeline(String),
    #[error("Server Error: {0}")]
    Server(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// Upload Error Type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("The image is not a data URL (missing ',' separator)")]
    NotADataUrl,
    #[error("The image payload is empty")]
    EmptyPayload,
}

// Vision Error Type
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Failed to build the vision HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Vision request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Vision API returned status {0}")]
    Status(u16),
    #[error("Vision API reported error {code}: {message}")]
    Api { code: i32, message: String },
    #[error("Vision analysis timed out")]
    Timeout,
    #[error("Vision analysis failed: {0}")]
    Other(String),
}

// Registry Error Type
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to build the registry HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Registry request for {code} failed: {source}")]
    Transport {
        code: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
