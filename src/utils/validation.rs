use crate::utils::error::{PuzzleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PuzzleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PuzzleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_scale(field_name: &str, value: u64) -> Result<()> {
    // A scale below 2 would mean empty lines shrink or stay put, which the
    // expansion model never describes.
    if value < 2 {
        return Err(PuzzleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Scale factor must be at least 2".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "./input").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_scale() {
        assert!(validate_scale("scale", 2).is_ok());
        assert!(validate_scale("scale", 1_000_000).is_ok());
        assert!(validate_scale("scale", 1).is_err());
        assert!(validate_scale("scale", 0).is_err());
    }
}
