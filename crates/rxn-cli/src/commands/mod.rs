pub mod cache;
pub mod complete;
