pub mod csv;
pub mod history;

pub use csv::{render_history_csv, CsvOptions};
pub use history::{build_history, DateRangeFilter, TerritoryHistory};
