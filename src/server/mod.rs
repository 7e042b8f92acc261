pub mod models;
pub mod routes;

use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer};

use crate::config::ServerConfig;
use crate::error::{AppError, ErrorBody};
use crate::pipeline::TrademarkPipeline;

/// JSON extractor settings: body limit plus `{ "error": .. }` rejections.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = ErrorBody {
                error: err.to_string(),
            };
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

pub async fn run(config: &ServerConfig, pipeline: TrademarkPipeline) -> Result<(), AppError> {
    let max_body_bytes = config.max_body_bytes;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pipeline.clone()))
            .app_data(json_config(max_body_bytes))
            .configure(routes::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    tracing::info!(host = %config.host, port = config.port, "Starting trademark service");
    server.bind((config.host.as_str(), config.port))?.run().await?;
    tracing::info!("Trademark service stopped");
    Ok(())
}
