use crate::database::error::DatabaseError;
use crate::gala::import_invites::ImportError;
use crate::gala::tombola::DrawError;
use crate::notification::error::EmailError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Draw(#[from] DrawError),
    #[error("The document can't be generated.")]
    Template(#[from] tera::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("You are not allowed to do this.")]
    Forbidden,
    #[error("Wrong email or password.")]
    WrongCredentials,
    #[error("The password can't be hashed.")]
    PasswordHashing,
    #[error("Sessions can't be accessed.")]
    SessionStorage,
}

impl ApplicationError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApplicationError::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApplicationError::BadRequest(message.into())
    }
}

/// Required to use [ApplicationError] as the error type of a Diesel transaction.
impl From<diesel::result::Error> for ApplicationError {
    fn from(value: diesel::result::Error) -> Self {
        ApplicationError::Database(DatabaseError::from(value))
    }
}
