use std::sync::Arc;

use platform_db::DbError;
use thiserror::Error;
use uuid::Uuid;

/// Shared result type for screen operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("resource not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("internal error")]
    Internal(Arc<anyhow::Error>),
}

/// Failures reported straight back to the user who triggered them. None of
/// these change any state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please select an employee")]
    EmployeeNotSelected,
    #[error("employee {0} does not exist")]
    UnknownEmployee(Uuid),
    #[error("job posting {0} does not exist")]
    UnknownJob(Uuid),
    #[error("employee has already checked in today")]
    AlreadyCheckedIn,
    #[error("employee has no open check-in for today")]
    NoOpenCheckIn,
    #[error("check-out time is earlier than check-in time")]
    CheckOutBeforeCheckIn,
    #[error("end date is before start date")]
    InvalidDateRange,
    #[error("minimum salary must be below maximum salary")]
    InvalidSalaryRange,
    #[error("rating must be between 1.0 and 5.0")]
    RatingOutOfRange,
    #[error("{0} needs at least one entry")]
    EmptyList(&'static str),
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
    #[error("position `{position}` does not belong to department `{department}`")]
    PositionNotInDepartment {
        department: String,
        position: String,
    },
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("import failed: {0}")]
    MalformedImport(String),
    #[error("new passwords don't match")]
    PasswordMismatch,
    #[error("invalid email or password")]
    InvalidCredentials,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Validation(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self::Internal(Arc::new(err))
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ApiError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value)
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::NotFound(_) => ApiError::NotFound,
            other => Self::internal(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_are_masked() {
        let err = ApiError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "internal error");
        assert_eq!(err.code(), "INTERNAL");
    }

    #[test]
    fn validation_messages_pass_through() {
        let err = ApiError::from(ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "new passwords don't match");
        assert_eq!(err.code(), "INVALID_INPUT");
        assert_eq!(err.validation(), Some(&ValidationError::PasswordMismatch));
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let err = ApiError::from(DbError::NotFound(Uuid::nil()));
        assert!(matches!(err, ApiError::NotFound));
        let err = ApiError::from(DbError::DuplicateId(Uuid::nil()));
        assert_eq!(err.code(), "INTERNAL");
    }
}
