//! Result type alias for Vitalis
//!
//! This module provides a convenient Result type alias that uses VitalisError
//! as the error type.

use super::errors::VitalisError;

/// Result type alias for Vitalis operations
///
/// This is a convenience type alias that uses `VitalisError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use vitalis::domain::result::Result;
/// use vitalis::domain::errors::VitalisError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VitalisError::NotFound("Patient not found".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VitalisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::VitalisError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(VitalisError::NotFound("missing".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
