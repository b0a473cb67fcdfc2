pub mod activity;
pub mod dashboard;
pub mod group;
pub mod reset;
pub mod session;
pub mod word;

pub use activity::ActivityCommands;
pub use dashboard::DashboardCommands;
pub use group::GroupCommands;
pub use reset::ResetCommands;
pub use session::{ReviewResult, SessionCommands};
pub use word::WordCommands;
