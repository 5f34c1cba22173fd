pub mod pipeline;

pub use pipeline::{ComfortPipeline, DashboardReport};
