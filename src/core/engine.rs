use std::path::Path;
use std::time::Instant;

use crate::core::calculator;
use crate::domain::model::{Evaluation, Operation};
use crate::utils::error::Result;

pub struct CalcEngine {
    report_path: Option<String>,
}

impl CalcEngine {
    pub fn new() -> Self {
        Self { report_path: None }
    }

    pub fn new_with_report(report_path: String) -> Self {
        Self {
            report_path: Some(report_path),
        }
    }

    pub fn run(&self, operations: &[Operation]) -> Result<Vec<Evaluation>> {
        println!("Starting calculation run...");
        let started = Instant::now();

        println!("Evaluating {} operations...", operations.len());
        let evaluations: Vec<Evaluation> = operations.iter().map(Self::evaluate).collect();

        let invalid = evaluations.iter().filter(|e| !e.valid).count();
        if invalid > 0 {
            tracing::warn!(
                "{} of {} operations had non-positive operands",
                invalid,
                evaluations.len()
            );
        }

        if let Some(path) = &self.report_path {
            self.write_report(path, &evaluations)?;
            println!("Report saved to: {}", path);
        }

        println!(
            "Finished {} operations in {:?}",
            evaluations.len(),
            started.elapsed()
        );

        Ok(evaluations)
    }

    fn evaluate(operation: &Operation) -> Evaluation {
        let value = match *operation {
            Operation::Area { width, height } => calculator::area(width, height),
            Operation::Volume {
                width,
                height,
                depth,
            } => calculator::volume(width, height, depth),
            Operation::Perimeter { length_a, length_b } => {
                calculator::perimeter(length_a, length_b)
            }
            Operation::Analyze { count, data } => calculator::analyze_data(count, data),
        };

        let operands = operation.operands();
        Evaluation {
            op: operation.name().to_string(),
            valid: operands.iter().all(|v| *v > 0),
            operands,
            value,
        }
    }

    fn write_report(&self, path: &str, evaluations: &[Evaluation]) -> Result<()> {
        let json = serde_json::to_string_pretty(evaluations)?;

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self::new()
    }
}
