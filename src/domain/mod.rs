// Domain types and value objects
mod daily_record;
mod metric;

// Re-export commonly used types to the world
pub use daily_record::DailyRecord;
pub use metric::{Metric, MetricPair};
