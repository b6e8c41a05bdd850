use crate::cotisation::build_situation;
use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::notification::bulk::{BulkEmailConfig, PreparedEmail, check_recipients, send_all};
use crate::notification::service::EmailService;
use crate::notification::situation::build_situation_email;
use crate::web::api::{ApiResponse, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::email::{EmailSendingResult, SendSituations};
use log::info;
use rocket::State;
use rocket::serde::json::Json;
use std::sync::Arc;
use tera::Tera;

#[post("/clubs/<club_id>/mandats/<mandat_id>/cotisations/emails/<member_id>")]
pub async fn send_situation(
    pool: &State<DbPool>,
    email_service: &State<Arc<dyn EmailService>>,
    renderer: &State<Tera>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    member_id: i32,
) -> ApiResponse<()> {
    let request = {
        let mut connection = connect(pool)?;
        authorize(&mut connection, &session, club_id, Role::Admin)?;
        let club = dao::club::get_club(&mut connection, club_id)?;
        let situation = build_situation(&mut connection, club_id, mandat_id, member_id)?;
        build_situation_email(renderer, club.name(), &situation)?
    };

    email_service.inner().send_simple_email(request).await?;
    info!("Situation sent [club_id: {club_id}, mandat_id: {mandat_id}, member_id: {member_id}]");
    done("Email sent.")
}

/// Send their situation to several members, one email after the other.
/// Members who can't be reached are reported without stopping the sending.
#[post(
    "/clubs/<club_id>/mandats/<mandat_id>/cotisations/emails",
    format = "application/json",
    data = "<request>"
)]
pub async fn send_situations(
    pool: &State<DbPool>,
    email_service: &State<Arc<dyn EmailService>>,
    bulk_email_config: &State<BulkEmailConfig>,
    renderer: &State<Tera>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    request: Json<SendSituations>,
) -> ApiResponse<Vec<EmailSendingResult>> {
    let emails = {
        let mut connection = connect(pool)?;
        authorize(&mut connection, &session, club_id, Role::Admin)?;
        let member_ids = check_recipients(request.member_ids())?;
        let club = dao::club::get_club(&mut connection, club_id)?;
        dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;

        let mut emails = Vec::with_capacity(member_ids.len());
        for member_id in member_ids {
            let email = match build_situation(&mut connection, club_id, mandat_id, member_id) {
                Ok(situation) => {
                    let address = situation.member().email().clone();
                    let request = build_situation_email(renderer, club.name(), &situation)?;
                    PreparedEmail::ready(member_id, address, request)
                }
                Err(ApplicationError::NotFound(reason)) => PreparedEmail::unavailable(member_id, None, reason),
                Err(error) => return Err(error),
            };
            emails.push(email);
        }
        emails
    };

    let results = send_all(email_service.inner().as_ref(), emails, bulk_email_config).await;
    info!(
        "Situations sent [club_id: {club_id}, mandat_id: {mandat_id}, sent: {}, failed: {}]",
        results.iter().filter(|result| *result.sent()).count(),
        results.iter().filter(|result| !*result.sent()).count()
    );
    ok(results)
}
