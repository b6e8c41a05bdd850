use crate::database::error::DatabaseError;
use crate::error::ApplicationError;
use dto::envelope::Envelope;
use log::{debug, error};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;

const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

impl ApplicationError {
    pub fn status(&self) -> Status {
        match self {
            ApplicationError::NotFound(_) | ApplicationError::Database(DatabaseError::NotFound) => {
                Status::NotFound
            }
            ApplicationError::BadRequest(_)
            | ApplicationError::Database(DatabaseError::UniqueViolation(_))
            | ApplicationError::Import(_)
            | ApplicationError::Draw(_) => Status::BadRequest,
            ApplicationError::Email(error) if error.is_caller_error() => Status::BadRequest,
            ApplicationError::Forbidden => Status::Forbidden,
            ApplicationError::WrongCredentials => Status::Unauthorized,
            _ => Status::InternalServerError,
        }
    }

    fn message(&self) -> String {
        match self {
            ApplicationError::Database(_)
            | ApplicationError::Template(_)
            | ApplicationError::PasswordHashing
                if self.status() == Status::InternalServerError =>
            {
                UNEXPECTED_ERROR_MESSAGE.to_owned()
            }
            _ => self.to_string(),
        }
    }
}

/// Every failure answers with the JSON envelope and the status matching the error.
impl<'r> Responder<'r, 'static> for ApplicationError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("{} {} failed\n{self:#?}", request.method(), request.uri());
        } else {
            debug!("{} {} refused [status: {status}, reason: {self}]", request.method(), request.uri());
        }

        (status, Json(Envelope::<()>::failure(self.message()))).respond_to(request)
    }
}

/// Errors raised by Rocket itself (unknown route, unreadable body, missing token...) use the same envelope.
#[catch(default)]
pub fn default_catcher(status: Status, _: &Request) -> (Status, Json<Envelope<()>>) {
    let message = match status.code {
        400 => "The request is malformed.",
        401 => "You must be logged in.",
        403 => "You are not allowed to do this.",
        404 => "The requested element doesn't exist.",
        422 => "The request body can't be read.",
        500 => UNEXPECTED_ERROR_MESSAGE,
        _ => status.reason().unwrap_or(UNEXPECTED_ERROR_MESSAGE),
    };
    (status, Json(Envelope::failure(message.to_owned())))
}
