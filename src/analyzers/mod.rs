pub mod classifier;
pub mod monthly;
pub mod summary;
pub mod yearly;

pub use classifier::band_subset;
pub use monthly::{monthly_comfort, top_month_per_year};
pub use summary::{join_summary, map_marker};
pub use yearly::yearly_summary;
