use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::gala::import_invites::parse_invites;
use crate::gala::{build_invites, ensure_new_invite_name};
use crate::tools::is_valid_email;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::gala::{GalaInvite, ImportReport, NewGalaInvite};
use log::{info, warn};
use rocket::State;
use rocket::data::{ByteUnit, Data, ToByteUnit};
use rocket::serde::json::Json;

const IMPORT_LIMIT_MIB: u64 = 2;

fn import_limit() -> ByteUnit {
    IMPORT_LIMIT_MIB.mebibytes()
}

#[get("/clubs/<club_id>/galas/<gala_id>/invites")]
pub fn get_invites(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
) -> ApiResponse<Vec<GalaInvite>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let invites = dao::gala::get_invites(&mut connection, *gala.id())?;
    let tables = dao::gala::get_tables(&mut connection, *gala.id())?;
    let affectations = dao::gala::get_affectations(&mut connection, *gala.id())?;
    ok(build_invites(invites, &tables, &affectations))
}

#[post("/clubs/<club_id>/galas/<gala_id>/invites", format = "application/json", data = "<new_invite>")]
pub fn add_invite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    new_invite: Json<NewGalaInvite>,
) -> ApiResponse<GalaInvite> {
    if new_invite.email().as_deref().is_some_and(|email| !is_valid_email(email)) {
        return Err(ApplicationError::bad_request("The email is invalid."));
    }
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    ensure_new_invite_name(&dao::gala::get_invites(&mut connection, *gala.id())?, new_invite.name())?;

    let invite = dao::gala::insert_invite(&mut connection, *gala.id(), &new_invite)?;
    created(GalaInvite::new(
        *invite.id(),
        *invite.gala_id(),
        invite.name().clone(),
        invite.email().clone(),
        invite.phone().clone(),
        None,
    ))
}

/// Import the invitees of a CSV file sent as the raw request body.
/// Names already invited are reported and left aside, the others are inserted together.
#[post("/clubs/<club_id>/galas/<gala_id>/invites/import", data = "<content>")]
pub async fn import_invites(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    content: Data<'_>,
) -> ApiResponse<ImportReport> {
    let content = content
        .open(import_limit())
        .into_bytes()
        .await
        .map_err(|error| {
            warn!("Invitees file not read [error: {error}]");
            ApplicationError::bad_request("The invitees file can't be read.")
        })?;
    if !content.is_complete() {
        return Err(ApplicationError::bad_request(format!(
            "The invitees file can't exceed {IMPORT_LIMIT_MIB} MiB."
        )));
    }

    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let existing_names: Vec<String> = dao::gala::get_invites(&mut connection, *gala.id())?
        .iter()
        .map(|invite| invite.name().clone())
        .collect();

    let parsed = parse_invites(&content, &existing_names)?;
    let imported = dao::gala::insert_invites(&mut connection, *gala.id(), parsed.invites())?;
    info!(
        "Invitees imported [gala_id: {gala_id}, imported: {imported}, duplicates: {}, skipped: {}]",
        parsed.duplicates().len(),
        parsed.skipped()
    );
    created(ImportReport::new(
        imported,
        parsed.duplicates().clone(),
        *parsed.skipped(),
    ))
}

/// The invitee's seat is freed along with it.
#[delete("/clubs/<club_id>/galas/<gala_id>/invites/<invite_id>")]
pub fn delete_invite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    invite_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    if dao::gala::delete_invite(&mut connection, *gala.id(), invite_id)? == 0 {
        return Err(ApplicationError::not_found("This invitee doesn't exist."));
    }
    done("Invitee deleted.")
}
