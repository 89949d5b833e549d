//! Types and pure logic shared by the campsite dashboard frontend.
//!
//! Nothing in here touches the DOM or the network directly: the loader and
//! status updater talk to the backend through the [`ReservationSource`] and
//! [`StatusTransport`] seams so they can be driven natively in tests.

pub mod config;
pub mod error;
pub mod loader;
pub mod map;
pub mod navigator;
pub mod reservation;
pub mod state;
pub mod status;
pub mod week;

pub use config::{DashboardConfig, DisplayLocale};
pub use error::ApiError;
pub use loader::{load_reservations, partition, ReservationSource, WeekPartition};
pub use map::{LatLng, MapConfig, MapMarker};
pub use navigator::{week_label, Direction};
pub use reservation::{
    Lodging, LodgingId, Reservation, ReservationCollection, ReservationId, ReservationStatus,
    Tenant,
};
pub use state::{DashboardState, LoadRequest};
pub use status::{
    plan_status_update, submit_status, StatusBoard, StatusOutcome, StatusSelection,
    StatusTransport, StatusUpdate, StatusUpdateError, StatusUpdatePlan, MERGE_PATCH_CONTENT_TYPE,
};
pub use week::{
    current_week_number, is_in_week, week_end, week_start, DateRange, WeekCalendar, WeekNumber,
};
