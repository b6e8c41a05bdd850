use crate::database::error::DatabaseError::{MalformedValue, NotFound, UnderlyingDatabase, UniqueViolation};
use diesel::result::DatabaseErrorKind;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("The requested element doesn't exist.")]
    NotFound,
    #[error("This element already exists.")]
    UniqueViolation(String),
    #[error("A stored value can't be read [value: {0}]")]
    MalformedValue(String),
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                UniqueViolation(info.message().to_owned())
            }
            error => UnderlyingDatabase(error.to_string()),
        }
    }
}

impl From<chrono::ParseError> for DatabaseError {
    fn from(value: chrono::ParseError) -> Self {
        MalformedValue(value.to_string())
    }
}
