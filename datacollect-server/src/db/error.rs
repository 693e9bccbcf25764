//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{field} not found: '{value}'")]
    NotFound { field: &'static str, value: String },

    #[error("{field} already exists: '{value}'")]
    Conflict { field: &'static str, value: String },

    /// Stored value no longer decodes into the model
    #[error("corrupt {table} record: {reason}")]
    Corrupt { table: &'static str, reason: String },
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    pub(crate) fn not_found(field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            field,
            value: value.to_string(),
        }
    }

    /// Map an insert failure, turning unique-constraint violations into `Conflict`.
    pub(crate) fn on_insert(err: sqlx::Error, field: &'static str, value: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                field,
                value: value.to_owned(),
            },
            _ => Self::Sqlx(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("user_id", 7);
        assert_eq!(err.to_string(), "user_id not found: '7'");
    }

    #[test]
    fn non_constraint_insert_errors_pass_through() {
        let err = DbError::on_insert(sqlx::Error::RowNotFound, "name", "x");
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }
}
