pub mod aggregates;
pub mod band;
pub mod daily;
pub mod location;

pub use aggregates::{
    ComfortMatrix, MapMarker, MonthlyComfort, SummaryRow, TopComfortMonth, YearlySummary,
};
pub use band::Band;
pub use daily::DailyRecord;
pub use location::Location;
