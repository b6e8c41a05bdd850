use crate::error::Result;
use dto::envelope::Envelope;
use rocket::http::Status;
use rocket::serde::json::Json;

pub mod auth_controller;
pub mod budget_controller;
pub mod club_controller;
pub mod comite_controller;
pub mod commission_controller;
pub mod cotisation_controller;
pub mod email_cotisation_controller;
pub mod gala_controller;
pub mod gala_invites_controller;
pub mod gala_table_controller;
pub mod gala_tombola_controller;
pub mod invite_reunion_controller;
pub mod liste_presence_controller;
pub mod mandat_controller;
pub mod membres_commission_controller;
pub mod reunion_controller;
pub mod rubrique_budget_controller;
pub mod rubrique_budget_realise_controller;
pub mod server;
pub mod transitions_controller;

/// Successful answers carry their data inside the JSON envelope, failures go through [crate::error::ApplicationError].
pub type ApiResponse<T> = Result<(Status, Json<Envelope<T>>)>;

fn respond<T>(status: Status, message: Option<String>, data: Option<T>) -> ApiResponse<T> {
    Ok((status, Json(Envelope::succeeded(message, data))))
}

pub fn ok<T>(data: T) -> ApiResponse<T> {
    respond(Status::Ok, None, Some(data))
}

pub fn created<T>(data: T) -> ApiResponse<T> {
    respond(Status::Created, None, Some(data))
}

pub fn done(message: &str) -> ApiResponse<()> {
    respond(Status::Ok, Some(message.to_owned()), None)
}

#[cfg(test)]
pub mod tests {
    use crate::database::{DbConnection, TempDatabase, connect};
    use crate::notification::bulk::BulkEmailConfig;
    use crate::notification::service::tests::RecordingEmailService;
    use crate::templates::renderer;
    use crate::web::api::server::ApiServer;
    use crate::web::authentication::AUTHORIZATION_HEADER;
    use crate::web::server::Server;
    use crate::web::session_storage::SessionStorage;
    use dto::envelope::Envelope;
    use rocket::http::Header;
    use rocket::local::asynchronous::{Client, LocalResponse};
    use serde::de::DeserializeOwned;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// The whole API, served on top of a temporary database and an email service keeping what it sends.
    pub struct TestApi {
        pub client: Client,
        pub emails: Arc<RecordingEmailService>,
        database: TempDatabase,
    }

    impl TestApi {
        pub async fn new() -> Self {
            Self::with_email_service(RecordingEmailService::default()).await
        }

        pub async fn with_email_service(email_service: RecordingEmailService) -> Self {
            let database = TempDatabase::new();
            let emails = Arc::new(email_service);
            let api_server = ApiServer::new(
                database.pool(),
                emails.clone(),
                BulkEmailConfig::new(Duration::ZERO),
                renderer().unwrap(),
            );
            let client = Client::tracked(api_server.configure(rocket::build()))
                .await
                .unwrap();
            Self {
                client,
                emails,
                database,
            }
        }

        pub fn connection(&self) -> DbConnection {
            connect(&self.database.pool()).unwrap()
        }

        /// Open a session for the user, as a login would.
        pub fn authorization(&self, user_id: i32) -> Header<'static> {
            let token = self
                .client
                .rocket()
                .state::<Mutex<SessionStorage>>()
                .unwrap()
                .lock()
                .unwrap()
                .open(user_id);
            Header::new(AUTHORIZATION_HEADER, format!("Bearer {token}"))
        }
    }

    pub async fn read_data<T: DeserializeOwned + Send + 'static>(response: LocalResponse<'_>) -> T {
        response
            .into_json::<Envelope<T>>()
            .await
            .unwrap()
            .into_data()
            .unwrap()
    }

    pub async fn read_message(response: LocalResponse<'_>) -> String {
        response
            .into_json::<Envelope<()>>()
            .await
            .unwrap()
            .message()
            .clone()
            .unwrap()
    }
}
