pub mod batch_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use crate::domain::model::Operation;

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small calculator for rectangle geometry and data analysis")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: CalcCommand,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum CalcCommand {
    /// Rectangle area from width and height
    Area { width: i64, height: i64 },
    /// Box volume from width, height and depth
    Volume { width: i64, height: i64, depth: i64 },
    /// Rectangle perimeter from two side lengths
    Perimeter { length_a: i64, length_b: i64 },
    /// Product of count and data, halved above 100
    Analyze { count: i64, data: i64 },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn operation(&self) -> Operation {
        match self.command {
            CalcCommand::Area { width, height } => Operation::Area { width, height },
            CalcCommand::Volume {
                width,
                height,
                depth,
            } => Operation::Volume {
                width,
                height,
                depth,
            },
            CalcCommand::Perimeter { length_a, length_b } => {
                Operation::Perimeter { length_a, length_b }
            }
            CalcCommand::Analyze { count, data } => Operation::Analyze { count, data },
        }
    }
}
