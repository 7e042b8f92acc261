use trademark_scout::config::Configuration;
use trademark_scout::error::AppError;
use trademark_scout::pipeline::TrademarkPipeline;
use trademark_scout::server;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    let configuration = Configuration::load()?;
    init_logging(&configuration.logging.level);

    let pipeline = TrademarkPipeline::from_configuration(&configuration)?;
    server::run(&configuration.server, pipeline).await
}
