use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_operand_count(field_name: &str, operands: &[i64], expected: usize) -> Result<()> {
    if operands.len() != expected {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: operands.len().to_string(),
            reason: format!("Expected {} operands, got {}", expected, operands.len()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("batch.name", "nightly").is_ok());
        assert!(validate_non_empty_string("batch.name", "").is_err());
        assert!(validate_non_empty_string("batch.name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./reports/out.json").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_operand_count() {
        assert!(validate_operand_count("operations[0]", &[4, 5], 2).is_ok());
        assert!(validate_operand_count("operations[0]", &[4], 2).is_err());
        assert!(validate_operand_count("operations[0]", &[4, 5, 6], 2).is_err());
    }
}
