pub mod board;
pub mod dashboard;
