pub mod domain;
pub mod reports;
pub mod share;
pub mod shared;
