pub mod context;
pub mod report;
pub mod service;
pub mod trademark_pipeline;

pub use context::{CheckMetrics, TrademarkContext};
pub use report::TrademarkReport;
pub use trademark_pipeline::{TrademarkPipeline, TrademarkPipelineBuilder};
