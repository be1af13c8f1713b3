use serde::{Deserialize, Serialize};

/// A single calculator request, decoupled from the surface it came from
/// (CLI arguments or a batch file entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Area { width: i64, height: i64 },
    Volume { width: i64, height: i64, depth: i64 },
    Perimeter { length_a: i64, length_b: i64 },
    Analyze { count: i64, data: i64 },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Area { .. } => "area",
            Operation::Volume { .. } => "volume",
            Operation::Perimeter { .. } => "perimeter",
            Operation::Analyze { .. } => "analyze",
        }
    }

    pub fn operands(&self) -> Vec<i64> {
        match *self {
            Operation::Area { width, height } => vec![width, height],
            Operation::Volume {
                width,
                height,
                depth,
            } => vec![width, height, depth],
            Operation::Perimeter { length_a, length_b } => vec![length_a, length_b],
            Operation::Analyze { count, data } => vec![count, data],
        }
    }
}

/// Outcome of one evaluated operation. `valid` records whether every operand
/// was positive; invalid requests still carry their sentinel `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub op: String,
    pub operands: Vec<i64>,
    pub value: i64,
    pub valid: bool,
}
