use thiserror::Error;

/// Classification of a failed store operation, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    Unknown,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            DomainError::Database(_) => ErrorKind::Unknown,
        }
    }

    /// Map an insert failure, turning a unique-constraint violation into
    /// `AlreadyExists` for the given entity description.
    pub(crate) fn from_insert(err: sqlx::Error, what: impl FnOnce() -> String) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::AlreadyExists(what())
            }
            _ => DomainError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_failures_are_unknown() {
        let err = DomainError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn non_constraint_insert_failure_stays_unknown() {
        let err = DomainError::from_insert(sqlx::Error::PoolClosed, || "category x".to_string());
        assert!(matches!(err, DomainError::Database(sqlx::Error::PoolClosed)));
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            DomainError::NotFound("category 1".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DomainError::AlreadyExists("category a".into()).kind(),
            ErrorKind::AlreadyExists
        );
    }
}
