use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::{ApplicationError, Result};
use crate::reunion::compte_rendu::render_compte_rendu;
use crate::reunion::{check_new_reunion, check_title, get_details};
use crate::tools::check_required;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::reunion::{NewOrdreDuJour, NewReunion, OrdreDuJour, Reunion, ReunionDetails, UpdateReunion};
use log::debug;
use rocket::State;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use tera::Tera;

#[get("/clubs/<club_id>/reunions")]
pub fn get_reunions(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<Reunion>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let reunions = dao::reunion::get_reunions(&mut connection, club_id)?
        .into_iter()
        .map(Reunion::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ok(reunions)
}

#[post("/clubs/<club_id>/reunions", format = "application/json", data = "<new_reunion>")]
pub fn create_reunion(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    new_reunion: Json<NewReunion>,
) -> ApiResponse<ReunionDetails> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    check_new_reunion(&mut connection, club_id, &new_reunion)?;

    let reunion = dao::reunion::create_reunion(&mut connection, club_id, &new_reunion)?;
    debug!("Reunion created [club_id: {club_id}, reunion_id: {}]", reunion.id());
    created(get_details(&mut connection, club_id, *reunion.id())?)
}

#[get("/clubs/<club_id>/reunions/<reunion_id>")]
pub fn get_reunion(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
) -> ApiResponse<ReunionDetails> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    ok(get_details(&mut connection, club_id, reunion_id)?)
}

#[put("/clubs/<club_id>/reunions/<reunion_id>", format = "application/json", data = "<update>")]
pub fn update_reunion(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
    update: Json<UpdateReunion>,
) -> ApiResponse<Reunion> {
    check_title(update.title())?;
    check_required(update.kind(), "The kind is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;

    let reunion = dao::reunion::update_reunion(&mut connection, *reunion.id(), &update)?;
    ok(Reunion::try_from(reunion)?)
}

/// Agenda, attendance and invitees go along with the meeting.
#[delete("/clubs/<club_id>/reunions/<reunion_id>")]
pub fn delete_reunion(pool: &State<DbPool>, session: Session, club_id: i32, reunion_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;
    dao::reunion::delete_reunion(&mut connection, *reunion.id())?;
    done("Reunion deleted.")
}

#[get("/clubs/<club_id>/reunions/<reunion_id>/compte-rendu")]
pub fn get_compte_rendu(
    pool: &State<DbPool>,
    renderer: &State<Tera>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
) -> Result<RawHtml<String>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let club = dao::club::get_club(&mut connection, club_id)?;
    let details = get_details(&mut connection, club_id, reunion_id)?;
    Ok(RawHtml(render_compte_rendu(renderer, club.name(), &details)?))
}

#[post(
    "/clubs/<club_id>/reunions/<reunion_id>/ordres-du-jour",
    format = "application/json",
    data = "<new_ordre_du_jour>"
)]
pub fn add_ordre_du_jour(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
    new_ordre_du_jour: Json<NewOrdreDuJour>,
) -> ApiResponse<OrdreDuJour> {
    check_required(new_ordre_du_jour.subject(), "The subject is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;

    let ordre_du_jour = dao::reunion::insert_ordre_du_jour(
        &mut connection,
        *reunion.id(),
        new_ordre_du_jour.subject(),
        new_ordre_du_jour.notes().as_deref(),
    )?;
    created(ordre_du_jour.into())
}

#[delete("/clubs/<club_id>/reunions/<reunion_id>/ordres-du-jour/<ordre_du_jour_id>")]
pub fn delete_ordre_du_jour(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
    ordre_du_jour_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;
    if dao::reunion::delete_ordre_du_jour(&mut connection, *reunion.id(), ordre_du_jour_id)? == 0 {
        return Err(ApplicationError::not_found("This agenda item doesn't exist."));
    }
    done("Agenda item deleted.")
}
