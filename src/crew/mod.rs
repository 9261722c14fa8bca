mod flags;
mod monitor;

pub use flags::{country_display, country_flag};
pub use monitor::{CrewMonitor, CrewSource, CrewStatus};
