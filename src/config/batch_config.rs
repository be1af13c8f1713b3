use crate::domain::model::Operation;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const VALID_OPERATIONS: [&str; 4] = ["area", "volume", "perimeter", "analyze"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    pub operations: Vec<OperationSpec>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSpec {
    pub op: String,
    pub operands: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl BatchConfig {
    /// 從 TOML 檔案載入批次定義
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析批次定義
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("batch.name", &self.batch.name)?;

        if self.operations.is_empty() {
            return Err(CalcError::InvalidConfigValueError {
                field: "operations".to_string(),
                value: "0".to_string(),
                reason: "At least one operation is required".to_string(),
            });
        }

        for (index, spec) in self.operations.iter().enumerate() {
            spec.to_operation(&format!("operations[{}]", index))?;
        }

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
        }

        Ok(())
    }

    /// 轉換為領域操作序列
    pub fn to_operations(&self) -> Result<Vec<Operation>> {
        self.operations
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.to_operation(&format!("operations[{}]", index)))
            .collect()
    }

    pub fn report_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }
}

impl OperationSpec {
    fn to_operation(&self, field: &str) -> Result<Operation> {
        match self.op.as_str() {
            "area" => {
                validation::validate_operand_count(field, &self.operands, 2)?;
                Ok(Operation::Area {
                    width: self.operands[0],
                    height: self.operands[1],
                })
            }
            "volume" => {
                validation::validate_operand_count(field, &self.operands, 3)?;
                Ok(Operation::Volume {
                    width: self.operands[0],
                    height: self.operands[1],
                    depth: self.operands[2],
                })
            }
            "perimeter" => {
                validation::validate_operand_count(field, &self.operands, 2)?;
                Ok(Operation::Perimeter {
                    length_a: self.operands[0],
                    length_b: self.operands[1],
                })
            }
            "analyze" => {
                validation::validate_operand_count(field, &self.operands, 2)?;
                Ok(Operation::Analyze {
                    count: self.operands[0],
                    data: self.operands[1],
                })
            }
            other => Err(CalcError::InvalidConfigValueError {
                field: field.to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported operation. Valid operations: {}",
                    VALID_OPERATIONS.join(", ")
                ),
            }),
        }
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_batch_config() {
        let toml_content = r#"
[batch]
name = "smoke"
description = "Basic smoke batch"

[[operations]]
op = "area"
operands = [4, 5]

[[operations]]
op = "analyze"
operands = [10, 30]

[output]
path = "./reports/smoke.json"
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.batch.name, "smoke");
        assert_eq!(config.operations.len(), 2);
        assert_eq!(config.report_path(), Some("./reports/smoke.json"));
        assert!(config.validate().is_ok());

        let operations = config.to_operations().unwrap();
        assert_eq!(
            operations[0],
            Operation::Area {
                width: 4,
                height: 5
            }
        );
        assert_eq!(operations[1], Operation::Analyze { count: 10, data: 30 });
    }

    #[test]
    fn test_output_section_is_optional() {
        let toml_content = r#"
[batch]
name = "no-output"

[[operations]]
op = "perimeter"
operands = [3, 7]
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.report_path(), None);
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let toml_content = r#"
[batch]
name = "bad"

[[operations]]
op = "hypotenuse"
operands = [3, 4]
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("operations[0]"));
        assert!(err.to_string().contains("Unsupported operation"));
    }

    #[test]
    fn test_wrong_operand_count_is_rejected() {
        let toml_content = r#"
[batch]
name = "bad-arity"

[[operations]]
op = "volume"
operands = [2, 3]
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_operations_are_rejected() {
        let toml_content = r#"
operations = []

[batch]
name = "empty"
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_maps_to_config_error() {
        let err = BatchConfig::from_toml_str("not valid toml [").unwrap_err();
        assert!(matches!(err, CalcError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_CALC_TEST_REPORT_DIR", "/tmp/calc-reports");

        let toml_content = r#"
[batch]
name = "env"

[[operations]]
op = "area"
operands = [4, 5]

[output]
path = "${SMALL_CALC_TEST_REPORT_DIR}/env.json"
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report_path(), Some("/tmp/calc-reports/env.json"));

        std::env::remove_var("SMALL_CALC_TEST_REPORT_DIR");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[batch]
name = "from-file"

[[operations]]
op = "volume"
operands = [2, 3, 4]
"#
        )
        .unwrap();

        let config = BatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.batch.name, "from-file");
        assert_eq!(config.operations.len(), 1);
    }
}
