use crate::web::api::server::ApiServer;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub mod api;
pub mod authentication;
pub mod authorization;
pub mod error;
pub mod server;
pub mod session_storage;

pub fn start_servers(api_server: ApiServer) -> Rocket<Build> {
    build_server(vec![Box::new(api_server)])
}
