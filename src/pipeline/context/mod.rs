pub mod metrics;
pub mod state;
pub mod trademark_context;

pub use metrics::CheckMetrics;
pub use state::{AnalyzedState, ClassifiedState, ProcessingState, ResolvedState, UploadedState};
pub use trademark_context::TrademarkContext;
