pub mod calculator;
pub mod engine;

pub use crate::domain::model::{Evaluation, Operation};
pub use crate::utils::error::Result;
