pub mod active;
pub mod assign;
pub mod dashboard;
pub mod history;
pub mod territories;
