pub mod assignment;
pub mod territory;
pub mod views;

pub use assignment::{Assignment, AssignmentId};
pub use territory::{Territory, TerritoryId};
pub use views::{build_territory_views, TerritoryStatus, TerritoryView};
