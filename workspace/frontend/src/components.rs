pub mod dashboard;
pub mod explanation;
pub mod upload;
pub mod visualization;
