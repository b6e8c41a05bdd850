use crate::tools::log_error_and_return;
use crate::web::session_storage::SessionStorage;
use derive_getters::Getters;
use rocket::State;
use rocket::http::Status;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
const BEARER_PREFIX: &str = "Bearer ";

/// The caller of an endpoint, as identified by their bearer token.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct Session {
    token: String,
    user_id: i32,
}

impl Session {
    pub fn new(token: String, user_id: i32) -> Self {
        Self { token, user_id }
    }
}

/// If an endpoint requires the caller to be logged in,
/// then its implementation should require a [Session] parameter.
/// Rocket will summon this guard to ensure the token of the `Authorization` header is known.
/// If it isn't, then the caller receives an Unauthorized status.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(token) = get_bearer_token(req) else {
            return Outcome::Forward(Status::Unauthorized);
        };

        let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
        match session_storage.lock() {
            Ok(mut session_storage) => match session_storage.get(token) {
                None => Outcome::Forward(Status::Unauthorized),
                Some(user_id) => Outcome::Success(Session::new(token.to_owned(), user_id)),
            },
            Err(error) => log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error),
        }
    }
}

fn get_bearer_token<'a>(req: &'a Request) -> Option<&'a str> {
    req.headers()
        .get_one(AUTHORIZATION_HEADER)
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Header;
    use rocket::local::asynchronous::Client;

    #[async_test]
    async fn should_request_succeed() {
        let mut session_storage = SessionStorage::default();
        let token = session_storage.open(7);

        let rocket = rocket::build().manage(Mutex::new(session_storage));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client
            .get("http://localhost")
            .header(Header::new(AUTHORIZATION_HEADER, format!("Bearer {token}")));

        let outcome = Session::from_request(&request).await;
        assert_eq!(7, *outcome.succeeded().unwrap().user_id());
    }

    #[async_test]
    async fn should_request_fail_when_unknown_token() {
        let rocket = rocket::build().manage(Mutex::new(SessionStorage::default()));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client.get("http://localhost").header(Header::new(
            AUTHORIZATION_HEADER,
            "Bearer 0ea9a5fb-0f46-4057-902a-2552ed956bde",
        ));

        let outcome = Session::from_request(&request).await;
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }

    #[async_test]
    async fn should_request_fail_when_not_bearer() {
        let mut session_storage = SessionStorage::default();
        let token = session_storage.open(7);

        let rocket = rocket::build().manage(Mutex::new(session_storage));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client
            .get("http://localhost")
            .header(Header::new(AUTHORIZATION_HEADER, format!("Basic {token}")));

        let outcome = Session::from_request(&request).await;
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }

    #[async_test]
    async fn should_request_fail_when_no_header() {
        let rocket = rocket::build().manage(Mutex::new(SessionStorage::default()));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client.get("http://localhost");

        let outcome = Session::from_request(&request).await;
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }
}
