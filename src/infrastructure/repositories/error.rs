use crate::domain::errors::DomainError;

const CNT_RECORD_KEY: &str = "record_keys_value_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return match db_err.constraint() {
                    Some(CNT_RECORD_KEY) | None => {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                    Some(other) => DomainError::Conflict(format!("{other} violated")),
                };
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Like [`map_sqlx`], but names the offending field when a unique key insert fails.
pub fn map_key_insert(err: sqlx::Error, field: &str, value: &str) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::unique_violation(field, value)
        }
        _ => map_sqlx(err),
    }
}

pub fn map_json(err: serde_json::Error) -> DomainError {
    DomainError::Persistence(format!("invalid record fields: {err}"))
}
