//! Pagination for the email history

use super::ValidationErrors;

/// Page size used when none is given
pub const DEFAULT_LIMIT: i64 = 50;

/// Offset used when none is given
pub const DEFAULT_OFFSET: i64 = 0;

/// A validated page request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    /// Validate raw pagination input, applying defaults for missing values.
    ///
    /// `limit` must be greater than zero and `offset` must not be negative.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, ValidationErrors> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let offset = offset.unwrap_or(DEFAULT_OFFSET);

        let mut errors = ValidationErrors::new();

        if limit <= 0 {
            errors.add("limit", "Limit must be a positive integer");
        }

        if offset < 0 {
            errors.add("offset", "Offset must be a non-negative integer");
        }

        errors.into_result(Self { limit, offset })
    }

    /// Maximum number of rows to return
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of rows to skip
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_defaults() -> TestResult {
        let pagination = Pagination::new(None, None)?;

        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.limit(), 50);
        assert_eq!(pagination.offset(), 0);

        Ok(())
    }

    #[test]
    fn test_explicit_values() -> TestResult {
        let pagination = Pagination::new(Some(3), Some(2))?;

        assert_eq!(pagination.limit(), 3);
        assert_eq!(pagination.offset(), 2);

        Ok(())
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let errors = Pagination::new(Some(0), None).unwrap_err();

        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].field, "limit");
    }

    #[test]
    fn test_both_fields_are_reported() {
        let errors = Pagination::new(Some(-1), Some(-1)).unwrap_err();

        let fields = errors
            .errors()
            .iter()
            .map(|error| error.field.as_str())
            .collect::<Vec<_>>();

        assert_eq!(fields, vec!["limit", "offset"]);
    }
}
