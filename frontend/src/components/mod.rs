pub mod header;
pub mod map_panel;
pub mod reservation_table;
pub mod week_navigator;

pub use header::Header;
pub use map_panel::MapPanel;
pub use reservation_table::{ReservationTable, TableKind};
pub use week_navigator::WeekNavigator;
