use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::gala::{check_gala, ensure_deletable, summarize};
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::gala::{Gala, GalaSummary, NewGala};
use log::warn;
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/galas")]
pub fn get_galas(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<Gala>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let galas = dao::gala::get_galas(&mut connection, club_id)?
        .into_iter()
        .map(Gala::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ok(galas)
}

#[post("/clubs/<club_id>/galas", format = "application/json", data = "<new_gala>")]
pub fn create_gala(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    new_gala: Json<NewGala>,
) -> ApiResponse<Gala> {
    check_gala(&new_gala)?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::insert_gala(&mut connection, club_id, &new_gala)?;
    created(Gala::try_from(gala)?)
}

#[get("/clubs/<club_id>/galas/<gala_id>")]
pub fn get_gala(pool: &State<DbPool>, session: Session, club_id: i32, gala_id: i32) -> ApiResponse<Gala> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    ok(Gala::try_from(gala)?)
}

#[put("/clubs/<club_id>/galas/<gala_id>", format = "application/json", data = "<new_gala>")]
pub fn update_gala(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    new_gala: Json<NewGala>,
) -> ApiResponse<Gala> {
    check_gala(&new_gala)?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let gala = dao::gala::update_gala(&mut connection, *gala.id(), &new_gala)?;
    ok(Gala::try_from(gala)?)
}

#[delete("/clubs/<club_id>/galas/<gala_id>")]
pub fn delete_gala(pool: &State<DbPool>, session: Session, club_id: i32, gala_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    ensure_deletable(dao::gala::count_attachments(&mut connection, *gala.id())?).inspect_err(|_| {
        warn!("Gala still in use [gala_id: {gala_id}]");
    })?;
    dao::gala::delete_gala(&mut connection, *gala.id())?;
    done("Gala deleted.")
}

#[get("/clubs/<club_id>/galas/<gala_id>/summary")]
pub fn get_summary(pool: &State<DbPool>, session: Session, club_id: i32, gala_id: i32) -> ApiResponse<GalaSummary> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let invites = dao::gala::get_invites(&mut connection, *gala.id())?;
    let tables = dao::gala::get_tables(&mut connection, *gala.id())?;
    let affectations = dao::gala::get_affectations(&mut connection, *gala.id())?;
    let tickets = dao::gala::get_tickets(&mut connection, *gala.id())?;
    let tombola = dao::gala::get_tombola_entries(&mut connection, *gala.id())?;

    ok(summarize(
        Gala::try_from(gala)?,
        invites.len(),
        tables.len(),
        affectations.len(),
        &tickets,
        &tombola,
    )?)
}
