pub mod dispatch;
pub mod engine;

pub use crate::domain::ports::Storage;
