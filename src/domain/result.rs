//! Result type alias for waktusolat

use super::errors::WaktuError;

/// Result type alias for waktusolat operations
///
/// # Examples
///
/// ```
/// use waktusolat::domain::result::Result;
/// use waktusolat::domain::errors::WaktuError;
///
/// fn example_function() -> Result<String> {
///     Ok("SGR01".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(WaktuError::Input("missing --start".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, WaktuError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::WaktuError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(WaktuError::Input("test error".to_string()));
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
