mod budget;
mod club;
mod cotisation;
mod database;
mod error;
mod gala;
mod mandat;
mod notification;
mod reunion;
mod templates;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::database::init_db;
use crate::notification::bulk::BulkEmailConfig;
use crate::notification::service::SmtpEmailService;
use crate::templates::renderer;
use crate::web::api::server::ApiServer;
use crate::web::start_servers;
use std::sync::Arc;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let pool = match init_db() {
        Ok(pool) => pool,
        Err(e) => {
            error!("Can't initialize the database, aborting...\n{e:#?}");
            panic!();
        }
    };
    let renderer = match renderer() {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Can't load templates, aborting...\n{e:#?}");
            panic!();
        }
    };

    start_servers(ApiServer::new(
        pool,
        Arc::new(SmtpEmailService),
        BulkEmailConfig::from_args(),
        renderer,
    ))
}
