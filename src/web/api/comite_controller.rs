use crate::database::dao;
use crate::database::model::comite::{MembreComite as StoredMembreComite, PosteComite as StoredPosteComite};
use crate::database::model::user::User;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::tools::check_required;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::comite::{MembreComite, Nomination, NewPosteComite, PosteComite};
use rocket::State;
use rocket::serde::json::Json;

fn build_membre(membre: StoredMembreComite, poste: &StoredPosteComite, user: User) -> MembreComite {
    MembreComite::new(
        *membre.id(),
        *membre.mandat_id(),
        *poste.id(),
        poste.name().clone(),
        *user.id(),
        user.first_name().clone(),
        user.last_name().clone(),
    )
}

#[get("/clubs/<club_id>/postes")]
pub fn get_postes(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<PosteComite>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let postes = dao::comite::get_postes(&mut connection, club_id)?
        .into_iter()
        .map(Into::into)
        .collect();
    ok(postes)
}

/// Without a position, the poste comes last.
#[post("/clubs/<club_id>/postes", format = "application/json", data = "<new_poste>")]
pub fn create_poste(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    new_poste: Json<NewPosteComite>,
) -> ApiResponse<PosteComite> {
    check_required(new_poste.name(), "The name is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let poste = dao::comite::insert_poste(&mut connection, club_id, new_poste.name().trim(), *new_poste.position())?;
    created(poste.into())
}

#[get("/clubs/<club_id>/mandats/<mandat_id>/comite")]
pub fn get_comite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
) -> ApiResponse<Vec<MembreComite>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    let comite = dao::comite::get_comite(&mut connection, mandat_id)?
        .into_iter()
        .map(|(membre, poste, user)| build_membre(membre, &poste, user))
        .collect();
    ok(comite)
}

/// Give the poste to the member for the mandat, replacing whoever held it.
#[post("/clubs/<club_id>/mandats/<mandat_id>/comite", format = "application/json", data = "<nomination>")]
pub fn nominate(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    nomination: Json<Nomination>,
) -> ApiResponse<MembreComite> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    let poste = dao::comite::get_poste(&mut connection, club_id, *nomination.poste_id())?;
    if dao::club::find_membership(&mut connection, club_id, *nomination.member_id())?.is_none() {
        return Err(ApplicationError::bad_request("The nominee isn't a member of the club."));
    }

    let membre = dao::comite::nominate(&mut connection, *poste.id(), mandat_id, *nomination.member_id())?;
    let user = dao::user::get_user(&mut connection, *nomination.member_id())?;
    created(build_membre(membre, &poste, user))
}

#[delete("/clubs/<club_id>/comite/<membre_comite_id>")]
pub fn remove_membre_comite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    membre_comite_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let membre = dao::comite::get_membre_comite_in_club(&mut connection, club_id, membre_comite_id)?;
    dao::comite::delete_membre_comite(&mut connection, *membre.id())?;
    done("Removed from the comité.")
}
