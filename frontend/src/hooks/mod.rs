pub mod use_dashboard;
pub mod use_status_updates;

pub use use_dashboard::use_dashboard;
pub use use_status_updates::use_status_updates;
