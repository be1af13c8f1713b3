pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CalcCommand, CliConfig};

pub use config::batch_config::BatchConfig;
pub use core::{calculator, engine::CalcEngine};
pub use domain::model::{Evaluation, Operation};
pub use utils::error::{CalcError, Result};
