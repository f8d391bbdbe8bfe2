//! Result type alias for MyClinic

use super::errors::ClinicError;

/// Result type alias for MyClinic operations
///
/// # Examples
///
/// ```
/// use myclinic::domain::result::Result;
/// use myclinic::domain::errors::ClinicError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ClinicError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClinicError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ClinicError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ClinicError::Validation("test error".to_string()));
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
