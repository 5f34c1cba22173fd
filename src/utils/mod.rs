pub mod constants;
pub mod progress;
pub mod rounding;

pub use progress::ProgressReporter;
pub use rounding::round_dp;
