pub mod explanation;
pub mod health;
pub mod upload;
